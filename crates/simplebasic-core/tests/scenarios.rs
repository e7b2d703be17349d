// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! End-to-end pipeline tests: source text through compilation and both
//! execution disciplines.

use simplebasic_core::compile::{compile, CompileError};
use simplebasic_core::interpret::{run_synchronous, RuntimeErrorKind};
use simplebasic_core::session::{Session, SessionMessage};
use simplebasic_core::source_analysis::Position;

fn outputs(source: &str, inputs: Vec<i64>) -> Vec<String> {
    let outcome = run_synchronous(compile(source).unwrap().program, inputs);
    assert!(outcome.is_success(), "run failed: {:?}", outcome.result);
    outcome.output.iter().map(ToString::to_string).collect()
}

/// Drives a session to completion, answering each input request from the
/// queue, and returns the output log it produced.
fn interactive_outputs(source: &str, inputs: &[i64]) -> Vec<String> {
    let mut session = Session::new(compile(source).unwrap().program);
    let mut queue = inputs.iter();
    let mut log = Vec::new();
    let mut pending = session.start();

    loop {
        let mut awaiting = false;
        for message in pending {
            match message {
                SessionMessage::Output { data } => log.push(data),
                SessionMessage::InputRequest { .. } => awaiting = true,
                SessionMessage::ExecutionFinished { success, error } => {
                    assert!(success, "session failed: {error:?}");
                }
            }
        }
        if !awaiting {
            break;
        }
        let value = queue.next().expect("session requested too many inputs");
        pending = session.provide_input(&value.to_string()).unwrap();
    }

    log
}

#[test]
fn sums_two_supplied_inputs() {
    let source = "10 INPUT a\n20 INPUT b\n30 LET c = a + b\n40 PRINT c\n50 END";
    assert_eq!(outputs(source, vec![3, 4]), vec!["7"]);
}

#[test]
fn taken_conditional_jump_skips_the_fallthrough_line() {
    let source = "10 LET a = 5\n20 IF a == 5 GOTO 40\n30 PRINT 0\n40 PRINT 1\n50 END";
    assert_eq!(outputs(source, vec![]), vec!["1"]);
}

#[test]
fn division_by_zero_aborts_at_its_own_line() {
    let source = "10 LET a = 1\n20 LET b = a / 0\n30 END";
    let outcome = run_synchronous(compile(source).unwrap().program, vec![]);
    assert!(outcome.output.is_empty());
    let error = outcome.result.unwrap_err();
    assert_eq!(error.kind, RuntimeErrorKind::DivisionByZero);
    assert_eq!(error.line, 20);
}

#[test]
fn invalid_character_is_reported_at_its_column() {
    let source = "10 LET a = 5 $";
    let error = compile(source).unwrap_err();
    let CompileError::Lex(lex) = error else {
        panic!("expected a lex error, got {error:?}");
    };
    let position = Position::of(source, lex.span.start());
    assert_eq!(position.line, 1);
    assert_eq!(position.column, 14);
}

#[test]
fn dangling_jump_is_rejected_before_any_execution() {
    let error = compile("10 GOTO 99\n20 END").unwrap_err();
    let CompileError::Semantic { errors } = error else {
        panic!("expected semantic errors, got {error:?}");
    };
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].to_string(), "line 10: jump target 99 does not exist");
}

#[test]
fn both_disciplines_produce_identical_output_logs() {
    let programs: &[(&str, &[i64])] = &[
        (
            "10 INPUT a\n20 INPUT b\n30 LET c = a + b\n40 PRINT c\n50 END",
            &[3, 4],
        ),
        (
            "10 INPUT n\n\
             20 LET f = 1\n\
             30 IF n <= 1 GOTO 70\n\
             40 LET f = f * n\n\
             50 LET n = n - 1\n\
             60 GOTO 30\n\
             70 PRINT f\n\
             80 END",
            &[5],
        ),
        ("10 PRINT 1 + 2 * 3\n20 END", &[]),
        ("10 REM nothing to see\n20 END", &[]),
    ];

    for (source, inputs) in programs {
        let sync = outputs(source, inputs.to_vec());
        let interactive = interactive_outputs(source, inputs);
        assert_eq!(sync, interactive, "disciplines diverged for {source:?}");
    }
}

#[test]
fn factorial_of_five() {
    let source = "10 INPUT n\n\
                  20 LET f = 1\n\
                  30 IF n <= 1 GOTO 70\n\
                  40 LET f = f * n\n\
                  50 LET n = n - 1\n\
                  60 GOTO 30\n\
                  70 PRINT f\n\
                  80 END";
    assert_eq!(outputs(source, vec![5]), vec!["120"]);
}

#[test]
fn fibonacci_sequence() {
    let source = "10 LET a = 0\n\
                  20 LET b = 1\n\
                  30 LET i = 0\n\
                  40 IF i >= 8 GOTO 100\n\
                  50 PRINT a\n\
                  60 LET t = a + b\n\
                  70 LET a = b\n\
                  80 LET b = t\n\
                  90 LET i = i + 1\n\
                  95 GOTO 40\n\
                  100 END";
    assert_eq!(
        outputs(source, vec![]),
        vec!["0", "1", "1", "2", "3", "5", "8", "13"]
    );
}

#[test]
fn chained_expression_evaluates_left_to_right() {
    // One precedence level only: (1 + 2) * 3, not 1 + (2 * 3).
    assert_eq!(outputs("10 PRINT 1 + 2 * 3\n20 END", vec![]), vec!["9"]);
}

#[test]
fn session_reports_failure_after_partial_output() {
    let source = "10 PRINT 1\n20 LET x = 1 % 0\n30 END";
    let mut session = Session::new(compile(source).unwrap().program);
    let messages = session.start();
    assert_eq!(messages.len(), 2);
    assert_eq!(
        messages[0],
        SessionMessage::Output { data: "1".into() }
    );
    assert!(matches!(
        &messages[1],
        SessionMessage::ExecutionFinished { success: false, error: Some(e) }
            if e.contains("line 20")
    ));
}
