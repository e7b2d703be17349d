// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Runtime error types.
//!
//! A runtime error aborts the execution that raised it at the statement
//! that triggered it; output produced before that point is preserved by the
//! caller, never discarded. Every error names the Simple line it occurred
//! on.

use ecow::EcoString;
use miette::Diagnostic;
use thiserror::Error;

use crate::ast::LineNumber;

/// A runtime error, fatal to its execution.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("runtime error at line {line}: {kind}")]
#[diagnostic()]
pub struct RuntimeError {
    /// The kind of runtime error.
    #[source]
    pub kind: RuntimeErrorKind,
    /// The Simple line number of the statement that raised the error.
    pub line: LineNumber,
}

impl RuntimeError {
    /// Creates a new runtime error.
    #[must_use]
    pub fn new(kind: RuntimeErrorKind, line: LineNumber) -> Self {
        Self { kind, line }
    }
}

/// The kind of runtime error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeErrorKind {
    /// `/` or `%` with a zero right operand.
    #[error("division by zero")]
    DivisionByZero,

    /// A delivered input value that does not parse as an integer.
    #[error("input must be an integer (received '{0}')")]
    InvalidInput(EcoString),

    /// An `INPUT` statement ran with the synchronous input queue empty.
    #[error("input exhausted")]
    InputExhausted,

    /// An internal-consistency failure. Raised when an invariant that
    /// semantic analysis guarantees is violated anyway; indicates a bug in
    /// the engine, not in the user's program.
    #[error("internal error: {0}")]
    Internal(EcoString),
}
