// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Abstract syntax tree for Simple programs.
//!
//! A [`Program`] is the line table: its statements sorted strictly ascending
//! by line number, consulted both for sequential "next line" resolution and
//! for jump-target validation. Every statement owns its sub-expressions; no
//! sharing. Each parsed line carries the [`Span`] of its source text.
//!
//! Expressions have a single binary level with no precedence tiers:
//! `1 + 2 * 3` parses as `(1 + 2) * 3`, strictly left to right.

use ecow::EcoString;

use crate::source_analysis::Span;

/// A Simple line number: positive, unique within a program.
pub type LineNumber = u32;

/// An arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `/` (floor division)
    Divide,
    /// `%` (floor modulo)
    Modulo,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Modulo => "%",
        };
        write!(f, "{symbol}")
    }
}

/// A comparison operator, used only in `IF` statements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparator {
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterOrEqual,
    /// `<`
    Less,
    /// `<=`
    LessOrEqual,
}

impl std::fmt::Display for Comparator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Greater => ">",
            Self::GreaterOrEqual => ">=",
            Self::Less => "<",
            Self::LessOrEqual => "<=",
        };
        write!(f, "{symbol}")
    }
}

/// A Simple expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    /// An integer literal: `42`.
    IntegerLiteral {
        /// The literal value.
        value: i64,
        /// Source location of the literal.
        span: Span,
    },

    /// A variable reference: `a`.
    VariableRef {
        /// The variable name.
        name: EcoString,
        /// Source location of the reference.
        span: Span,
    },

    /// A binary operation. Nested operations are always left-nested because
    /// evaluation is strictly left to right.
    BinaryOp {
        /// The operator.
        op: BinaryOperator,
        /// The left operand.
        left: Box<Expression>,
        /// The right operand.
        right: Box<Expression>,
        /// Source location covering both operands.
        span: Span,
    },
}

impl Expression {
    /// Returns the source span of this expression.
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            Self::IntegerLiteral { span, .. }
            | Self::VariableRef { span, .. }
            | Self::BinaryOp { span, .. } => *span,
        }
    }
}

/// A Simple statement, without its line-number prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `INPUT a` — request one integer and store it in the variable.
    Input {
        /// The variable receiving the input.
        variable: EcoString,
    },

    /// `PRINT <expr>` — evaluate and emit the value as an output effect.
    Print {
        /// The expression to print.
        value: Expression,
    },

    /// `LET a = <expr>` — evaluate and assign.
    Let {
        /// The variable being assigned.
        variable: EcoString,
        /// The assigned expression.
        value: Expression,
    },

    /// `GOTO <line>` — unconditional jump.
    Goto {
        /// The target line number.
        target: LineNumber,
    },

    /// `IF <expr> <cmp> <expr> GOTO <line>` — conditional jump; falsity
    /// falls through to the next line in table order.
    If {
        /// The left operand of the comparison.
        left: Expression,
        /// The comparator.
        comparator: Comparator,
        /// The right operand of the comparison.
        right: Expression,
        /// The target line number when the comparison holds.
        target: LineNumber,
    },

    /// `REM ...` — a comment; executes as a no-op.
    Rem {
        /// The comment text (everything after `REM`, trimmed).
        text: EcoString,
    },

    /// `END` — terminal; no statement executes after it.
    End,
}

impl Statement {
    /// Returns the jump target if this statement can transfer control.
    #[must_use]
    pub fn jump_target(&self) -> Option<LineNumber> {
        match self {
            Self::Goto { target } | Self::If { target, .. } => Some(*target),
            _ => None,
        }
    }
}

/// One parsed program line: a line number, its statement, and the span of
/// the whole source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// The line number prefix.
    pub number: LineNumber,
    /// The statement on this line.
    pub statement: Statement,
    /// Source location of the full statement, including the prefix.
    pub span: Span,
}

/// A validated-shape Simple program: the line table.
///
/// Lines are stored sorted strictly ascending by line number; the parser
/// guarantees this, so jump resolution is a binary search.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    lines: Vec<Line>,
}

impl Program {
    /// Creates a program from lines already sorted strictly ascending by
    /// line number.
    ///
    /// This is only called by the parser, which enforces the ordering as a
    /// syntax rule.
    #[must_use]
    pub(crate) fn from_sorted_lines(lines: Vec<Line>) -> Self {
        debug_assert!(lines.windows(2).all(|w| w[0].number < w[1].number));
        Self { lines }
    }

    /// Returns the lines in line-number order.
    #[must_use]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Returns the number of statements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns `true` if the program has no statements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Resolves a line number to its index in table order.
    #[must_use]
    pub fn index_of(&self, number: LineNumber) -> Option<usize> {
        self.lines
            .binary_search_by_key(&number, |line| line.number)
            .ok()
    }

    /// Returns `true` if a statement exists at the given line number.
    #[must_use]
    pub fn contains_line(&self, number: LineNumber) -> bool {
        self.index_of(number).is_some()
    }
}
