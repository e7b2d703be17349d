// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Token types for Simple lexical analysis.
//!
//! Each token pairs a [`TokenKind`] with the [`Span`] of its lexeme. Tokens
//! are immutable once produced. Keywords are recognized case-insensitively,
//! so `PRINT`, `print`, and `Print` all lex to [`TokenKind::Print`].

use ecow::EcoString;

use super::Span;

/// The kind of token, not including source location.
///
/// String data uses [`EcoString`] so tokens are cheap to clone.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A statement's line-number prefix: an integer at the start of a
    /// physical line, e.g. the `10` in `10 PRINT x`.
    LineNumber(u32),

    /// An integer literal appearing inside a statement: `42`.
    Integer(i64),

    /// A variable name: `a`, `total`.
    Identifier(EcoString),

    // === Keywords ===
    /// The `INPUT` keyword.
    Input,
    /// The `PRINT` keyword.
    Print,
    /// The `LET` keyword.
    Let,
    /// The `GOTO` keyword.
    Goto,
    /// The `IF` keyword.
    If,
    /// The `END` keyword.
    End,
    /// The `REM` keyword together with the rest of its physical line,
    /// which is discarded as comment text rather than re-lexed.
    Rem(EcoString),

    // === Arithmetic operators ===
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `%`
    Percent,

    /// Assignment in `LET`: `=`
    Assign,

    // === Comparison operators ===
    /// `==`
    EqEq,
    /// `!=`
    NotEq,
    /// `>`
    Greater,
    /// `>=`
    GreaterEq,
    /// `<`
    Less,
    /// `<=`
    LessEq,

    /// End of a physical source line.
    Newline,

    /// End of input.
    Eof,
}

impl TokenKind {
    /// Looks up the keyword for `word`, case-insensitively.
    ///
    /// `REM` is handled separately by the lexer because it swallows the rest
    /// of the line, so it is not returned here.
    #[must_use]
    pub fn keyword(word: &str) -> Option<Self> {
        if word.len() > 5 {
            return None;
        }
        match word.to_ascii_lowercase().as_str() {
            "input" => Some(Self::Input),
            "print" => Some(Self::Print),
            "let" => Some(Self::Let),
            "goto" => Some(Self::Goto),
            "if" => Some(Self::If),
            "end" => Some(Self::End),
            _ => None,
        }
    }

    /// Returns `true` if this token is one of the arithmetic operators.
    #[must_use]
    pub const fn is_arithmetic_operator(&self) -> bool {
        matches!(
            self,
            Self::Plus | Self::Minus | Self::Star | Self::Slash | Self::Percent
        )
    }

    /// Returns `true` if this token is one of the comparison operators.
    #[must_use]
    pub const fn is_comparator(&self) -> bool {
        matches!(
            self,
            Self::EqEq | Self::NotEq | Self::Greater | Self::GreaterEq | Self::Less | Self::LessEq
        )
    }

    /// Returns `true` if this is the end-of-input marker.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self, Self::Eof)
    }

    /// A short human-readable name for diagnostics ("a line number",
    /// "an identifier", ...).
    #[must_use]
    pub fn describe(&self) -> EcoString {
        match self {
            Self::LineNumber(n) => ecow::eco_format!("line number {n}"),
            Self::Integer(v) => ecow::eco_format!("the number {v}"),
            Self::Identifier(name) => ecow::eco_format!("the identifier '{name}'"),
            Self::Rem(_) => EcoString::from("a REM comment"),
            Self::Newline => EcoString::from("end of line"),
            Self::Eof => EcoString::from("end of input"),
            other => ecow::eco_format!("'{other}'"),
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LineNumber(n) => write!(f, "{n}"),
            Self::Integer(v) => write!(f, "{v}"),
            Self::Identifier(name) => write!(f, "{name}"),
            Self::Input => write!(f, "INPUT"),
            Self::Print => write!(f, "PRINT"),
            Self::Let => write!(f, "LET"),
            Self::Goto => write!(f, "GOTO"),
            Self::If => write!(f, "IF"),
            Self::End => write!(f, "END"),
            Self::Rem(text) if text.is_empty() => write!(f, "REM"),
            Self::Rem(text) => write!(f, "REM {text}"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::Percent => write!(f, "%"),
            Self::Assign => write!(f, "="),
            Self::EqEq => write!(f, "=="),
            Self::NotEq => write!(f, "!="),
            Self::Greater => write!(f, ">"),
            Self::GreaterEq => write!(f, ">="),
            Self::Less => write!(f, "<"),
            Self::LessEq => write!(f, "<="),
            Self::Newline => write!(f, "<newline>"),
            Self::Eof => write!(f, "<eof>"),
        }
    }
}

/// A token with its source location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    kind: TokenKind,
    span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Returns the kind of this token.
    #[must_use]
    pub fn kind(&self) -> &TokenKind {
        &self.kind
    }

    /// Consumes the token and returns its kind.
    #[must_use]
    pub fn into_kind(self) -> TokenKind {
        self.kind
    }

    /// Returns the source span of this token.
    #[must_use]
    pub fn span(&self) -> Span {
        self.span
    }
}
