// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Execution of compiled Simple programs.
//!
//! The [`Interpreter`] is a resumable state machine; everything else is a
//! way of driving it. Two input-delivery disciplines share it:
//!
//! - [`run_synchronous`] — all input supplied up front as a queue; output
//!   collected into an ordered log. The classic batch run.
//! - [`Session`](crate::session::Session) — interactive; the machine
//!   suspends at each `INPUT` and the host delivers values one at a time.
//!
//! Both disciplines produce identical output logs for identical inputs.
//! The core never blocks a thread waiting for input and enforces no step
//! limit; see [`Interpreter::steps`] for host-imposed caps.

mod error;
mod machine;
mod value;

pub use error::{RuntimeError, RuntimeErrorKind};
pub use machine::{Interpreter, Status, StepEffect, INPUT_PROMPT};
pub use value::Value;

use std::collections::VecDeque;

use ecow::EcoString;

use crate::ast::Program;

/// The result of a synchronous run.
///
/// `output` holds everything printed before the run ended, in order. It is
/// preserved even when `result` is an error — a failing program's partial
/// output is never discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncOutcome {
    /// The ordered output log.
    pub output: Vec<EcoString>,
    /// `Ok(())` for a completed run, or the error that aborted it.
    pub result: Result<(), RuntimeError>,
}

impl SyncOutcome {
    /// Returns `true` if the run completed without a runtime error.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Runs a program under the synchronous discipline.
///
/// Each `INPUT` statement pops the next value from `inputs`; an `INPUT`
/// with the queue empty aborts with
/// [`RuntimeErrorKind::InputExhausted`]. Leftover inputs are ignored.
///
/// # Examples
///
/// ```
/// use simplebasic_core::compile::compile;
/// use simplebasic_core::interpret::run_synchronous;
///
/// let compiled = compile("10 INPUT a\n20 PRINT a\n30 END").unwrap();
/// let outcome = run_synchronous(compiled.program, vec![5]);
/// assert_eq!(outcome.output, vec!["5"]);
/// assert!(outcome.is_success());
/// ```
#[must_use]
pub fn run_synchronous(program: Program, inputs: Vec<i64>) -> SyncOutcome {
    let mut machine = Interpreter::new(program);
    let mut queue: VecDeque<i64> = inputs.into();
    let mut output = Vec::new();

    loop {
        match machine.step() {
            Ok(StepEffect::Continue) => {}
            Ok(StepEffect::Output(text)) => output.push(text),
            Ok(StepEffect::InputRequest { .. }) => match queue.pop_front() {
                Some(value) => {
                    if let Err(error) = machine.resume_with_value(value) {
                        return SyncOutcome {
                            output,
                            result: Err(error),
                        };
                    }
                }
                None => {
                    let error = machine.fail(RuntimeErrorKind::InputExhausted);
                    return SyncOutcome {
                        output,
                        result: Err(error),
                    };
                }
            },
            Ok(StepEffect::Completed) => {
                return SyncOutcome {
                    output,
                    result: Ok(()),
                }
            }
            Err(error) => {
                return SyncOutcome {
                    output,
                    result: Err(error),
                }
            }
        }
    }
}
