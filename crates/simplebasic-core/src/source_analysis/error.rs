// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Lexical and syntax error types.
//!
//! Both carry a [`Span`] and integrate with [`miette`] for rendered
//! diagnostics. Compilation is all-or-nothing: the first lexical or syntax
//! error aborts the pipeline before any execution.

use ecow::EcoString;
use miette::Diagnostic;
use thiserror::Error;

use super::Span;

/// A lexical error encountered during tokenization.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("{kind}")]
#[diagnostic()]
pub struct LexError {
    /// The kind of lexical error.
    #[source]
    pub kind: LexErrorKind,
    /// The source location of the error.
    #[label("here")]
    pub span: Span,
}

impl LexError {
    /// Creates a new lexical error.
    #[must_use]
    pub fn new(kind: LexErrorKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Creates an "unexpected character" error.
    #[must_use]
    pub fn unexpected_char(c: char, span: Span) -> Self {
        Self::new(LexErrorKind::UnexpectedCharacter(c), span)
    }
}

/// The kind of lexical error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexErrorKind {
    /// A character that cannot start any Simple token.
    #[error("unexpected character '{0}'")]
    UnexpectedCharacter(char),

    /// An integer literal that does not fit the value range.
    #[error("integer literal out of range")]
    IntegerOutOfRange,
}

/// A syntax error: a statement or expression with the wrong token shape.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("{kind}")]
#[diagnostic()]
pub struct SyntaxError {
    /// The kind of syntax error.
    #[source]
    pub kind: SyntaxErrorKind,
    /// The source location of the offending token.
    #[label("here")]
    pub span: Span,
}

impl SyntaxError {
    /// Creates a new syntax error.
    #[must_use]
    pub fn new(kind: SyntaxErrorKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Creates an "expected X, found Y" error.
    #[must_use]
    pub fn unexpected(expected: impl Into<EcoString>, found: impl Into<EcoString>, span: Span) -> Self {
        Self::new(
            SyntaxErrorKind::UnexpectedToken {
                expected: expected.into(),
                found: found.into(),
            },
            span,
        )
    }
}

/// The kind of syntax error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxErrorKind {
    /// A specific token (or token class) was required but something else
    /// was found.
    #[error("expected {expected}, found {found}")]
    UnexpectedToken {
        /// What the parser required at this point.
        expected: EcoString,
        /// A description of the token actually found.
        found: EcoString,
    },

    /// A statement did not begin with a line-number prefix.
    #[error("every statement must begin with a line number")]
    MissingLineNumber,

    /// Line numbers must be positive.
    #[error("line numbers must be positive")]
    LineNumberZero,

    /// The same line number was used twice.
    #[error("duplicate line number {line}")]
    DuplicateLineNumber {
        /// The repeated line number.
        line: u32,
    },

    /// Line numbers must be strictly increasing in source order.
    #[error("line numbers must increase: {found} follows {previous}")]
    LineNumberOutOfOrder {
        /// The line number of the preceding statement.
        previous: u32,
        /// The smaller line number that followed it.
        found: u32,
    },

    /// A `GOTO`/`IF ... GOTO` target too large to be a line number.
    #[error("jump target {target} is out of range")]
    JumpTargetOutOfRange {
        /// The literal value written as the target.
        target: i64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lex_error_display() {
        let err = LexError::unexpected_char('$', Span::new(12, 13));
        assert_eq!(err.to_string(), "unexpected character '$'");
        assert_eq!(err.span, Span::new(12, 13));
    }

    #[test]
    fn syntax_error_display() {
        let err = SyntaxError::unexpected("an identifier", "'GOTO'", Span::new(3, 7));
        assert_eq!(err.to_string(), "expected an identifier, found 'GOTO'");

        let err = SyntaxError::new(
            SyntaxErrorKind::LineNumberOutOfOrder {
                previous: 30,
                found: 20,
            },
            Span::new(0, 2),
        );
        assert_eq!(err.to_string(), "line numbers must increase: 20 follows 30");
    }
}
