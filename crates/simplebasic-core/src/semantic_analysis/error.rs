// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Semantic analysis error types.

use miette::Diagnostic;
use thiserror::Error;

use crate::ast::LineNumber;
use crate::source_analysis::Span;

/// A semantic error discovered during analysis.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("line {line}: {kind}")]
#[diagnostic()]
pub struct SemanticError {
    /// The kind of semantic error.
    #[source]
    pub kind: SemanticErrorKind,
    /// The program line containing the error.
    pub line: LineNumber,
    /// The source location of the offending statement.
    #[label("referenced here")]
    pub span: Span,
}

impl SemanticError {
    /// Creates a new semantic error.
    #[must_use]
    pub fn new(kind: SemanticErrorKind, line: LineNumber, span: Span) -> Self {
        Self { kind, line, span }
    }
}

/// Types of semantic errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SemanticErrorKind {
    /// A `GOTO`/`IF ... GOTO` names a line number with no statement.
    #[error("jump target {target} does not exist")]
    UnknownJumpTarget {
        /// The missing target line number.
        target: LineNumber,
    },
}
