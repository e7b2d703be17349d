// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Recursive descent parser for Simple source code.
//!
//! Grammar, one statement per physical source line:
//!
//! ```text
//! program   := (line NEWLINE)* EOF
//! line      := LINE_NUMBER command
//! command   := "INPUT" IDENT
//!            | "PRINT" expr
//!            | "LET" IDENT "=" expr
//!            | "GOTO" INT
//!            | "IF" expr CMP expr "GOTO" INT
//!            | REM
//!            | "END"
//! expr      := term (ARITH_OP term)*
//! term      := INT | IDENT
//! ```
//!
//! Every command has a fixed token shape, so the parser never needs
//! lookahead beyond the current token. Expressions have a single binary
//! level: chains associate strictly left to right with no precedence tiers.
//!
//! The parser also enforces the line-table invariants as syntax rules: line
//! numbers must be positive, unique, and strictly increasing in source
//! order. Duplicate lines are rejected, never silently overwritten.

use ecow::EcoString;

use crate::ast::{
    BinaryOperator, Comparator, Expression, Line, LineNumber, Program, Statement,
};

use super::{Span, SyntaxError, SyntaxErrorKind, Token, TokenKind};

/// Parses a token sequence into a [`Program`].
///
/// The token sequence must end with [`TokenKind::Eof`], as produced by
/// [`tokenize`](super::tokenize).
///
/// # Errors
///
/// Returns a [`SyntaxError`] for the first statement or expression with the
/// wrong token shape, and for line-number ordering violations.
///
/// # Examples
///
/// ```
/// use simplebasic_core::source_analysis::{parse, tokenize};
///
/// let program = parse(tokenize("10 LET a = 5\n20 END").unwrap()).unwrap();
/// assert_eq!(program.len(), 2);
/// ```
pub fn parse(tokens: Vec<Token>) -> Result<Program, SyntaxError> {
    Parser::new(tokens).parse_program()
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn new(tokens: Vec<Token>) -> Self {
        debug_assert!(tokens.last().is_some_and(|t| t.kind().is_eof()));
        Self { tokens, pos: 0 }
    }

    /// The current token. The sequence ends with `Eof`, which is never
    /// consumed, so this always succeeds.
    fn peek(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or_else(|| {
            // Unreachable for lexer-produced input; the trailing Eof guard
            // in `new` keeps `pos` in range.
            &self.tokens[self.tokens.len() - 1]
        })
    }

    /// Consumes and returns the current token.
    fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if !token.kind().is_eof() {
            self.pos += 1;
        }
        token
    }

    /// The span of the most recently consumed token.
    fn previous_span(&self) -> Span {
        if self.pos == 0 {
            Span::default()
        } else {
            self.tokens[self.pos - 1].span()
        }
    }

    fn unexpected(&self, expected: &str) -> SyntaxError {
        let found = self.peek().kind().describe();
        SyntaxError::unexpected(expected, found, self.peek().span())
    }

    fn parse_program(mut self) -> Result<Program, SyntaxError> {
        let mut lines: Vec<Line> = Vec::new();

        loop {
            while matches!(self.peek().kind(), TokenKind::Newline) {
                self.advance();
            }
            if self.peek().kind().is_eof() {
                break;
            }

            let line = self.parse_line(lines.last().map(|l| l.number))?;
            lines.push(line);

            match self.peek().kind() {
                TokenKind::Newline => {
                    self.advance();
                }
                TokenKind::Eof => {}
                _ => return Err(self.unexpected("end of line")),
            }
        }

        Ok(Program::from_sorted_lines(lines))
    }

    fn parse_line(&mut self, previous: Option<LineNumber>) -> Result<Line, SyntaxError> {
        let TokenKind::LineNumber(number) = *self.peek().kind() else {
            return Err(SyntaxError::new(
                SyntaxErrorKind::MissingLineNumber,
                self.peek().span(),
            ));
        };
        let start = self.peek().span();
        self.advance();

        if number == 0 {
            return Err(SyntaxError::new(SyntaxErrorKind::LineNumberZero, start));
        }
        if let Some(previous) = previous {
            if number == previous {
                return Err(SyntaxError::new(
                    SyntaxErrorKind::DuplicateLineNumber { line: number },
                    start,
                ));
            }
            if number < previous {
                return Err(SyntaxError::new(
                    SyntaxErrorKind::LineNumberOutOfOrder {
                        previous,
                        found: number,
                    },
                    start,
                ));
            }
        }

        let statement = self.parse_statement()?;
        Ok(Line {
            number,
            statement,
            span: start.merge(self.previous_span()),
        })
    }

    fn parse_statement(&mut self) -> Result<Statement, SyntaxError> {
        match self.peek().kind() {
            TokenKind::Rem(text) => {
                let text = text.clone();
                self.advance();
                Ok(Statement::Rem { text })
            }
            TokenKind::Input => {
                self.advance();
                let (variable, _) = self.expect_identifier()?;
                Ok(Statement::Input { variable })
            }
            TokenKind::Print => {
                self.advance();
                let value = self.parse_expression()?;
                Ok(Statement::Print { value })
            }
            TokenKind::Let => {
                self.advance();
                let (variable, _) = self.expect_identifier()?;
                if !matches!(self.peek().kind(), TokenKind::Assign) {
                    return Err(self.unexpected("'='"));
                }
                self.advance();
                let value = self.parse_expression()?;
                Ok(Statement::Let { variable, value })
            }
            TokenKind::Goto => {
                self.advance();
                let target = self.expect_jump_target()?;
                Ok(Statement::Goto { target })
            }
            TokenKind::If => {
                self.advance();
                let left = self.parse_expression()?;
                let comparator = self.expect_comparator()?;
                let right = self.parse_expression()?;
                if !matches!(self.peek().kind(), TokenKind::Goto) {
                    return Err(self.unexpected("'GOTO'"));
                }
                self.advance();
                let target = self.expect_jump_target()?;
                Ok(Statement::If {
                    left,
                    comparator,
                    right,
                    target,
                })
            }
            TokenKind::End => {
                self.advance();
                Ok(Statement::End)
            }
            _ => Err(self.unexpected("a command (INPUT, PRINT, LET, GOTO, IF, REM, or END)")),
        }
    }

    /// Parses `term (op term)*`, folding left so chains evaluate strictly
    /// left to right.
    fn parse_expression(&mut self) -> Result<Expression, SyntaxError> {
        let mut left = self.parse_term()?;

        while self.peek().kind().is_arithmetic_operator() {
            let op = match self.peek().kind() {
                TokenKind::Plus => BinaryOperator::Add,
                TokenKind::Minus => BinaryOperator::Subtract,
                TokenKind::Star => BinaryOperator::Multiply,
                TokenKind::Slash => BinaryOperator::Divide,
                TokenKind::Percent => BinaryOperator::Modulo,
                _ => unreachable!("guarded by is_arithmetic_operator"),
            };
            self.advance();
            let right = self.parse_term()?;
            let span = left.span().merge(right.span());
            left = Expression::BinaryOp {
                op,
                left: Box::new(left),
                right: Box::new(right),
                span,
            };
        }

        Ok(left)
    }

    fn parse_term(&mut self) -> Result<Expression, SyntaxError> {
        match *self.peek().kind() {
            TokenKind::Integer(value) => {
                let span = self.peek().span();
                self.advance();
                Ok(Expression::IntegerLiteral { value, span })
            }
            TokenKind::Identifier(ref name) => {
                let name = name.clone();
                let span = self.peek().span();
                self.advance();
                Ok(Expression::VariableRef { name, span })
            }
            _ => Err(self.unexpected("a number or variable")),
        }
    }

    fn expect_identifier(&mut self) -> Result<(EcoString, Span), SyntaxError> {
        match self.peek().kind() {
            TokenKind::Identifier(name) => {
                let name = name.clone();
                let span = self.peek().span();
                self.advance();
                Ok((name, span))
            }
            _ => Err(self.unexpected("a variable name")),
        }
    }

    fn expect_comparator(&mut self) -> Result<Comparator, SyntaxError> {
        let comparator = match self.peek().kind() {
            TokenKind::EqEq => Comparator::Equal,
            TokenKind::NotEq => Comparator::NotEqual,
            TokenKind::Greater => Comparator::Greater,
            TokenKind::GreaterEq => Comparator::GreaterOrEqual,
            TokenKind::Less => Comparator::Less,
            TokenKind::LessEq => Comparator::LessOrEqual,
            _ => return Err(self.unexpected("a comparison operator")),
        };
        self.advance();
        Ok(comparator)
    }

    /// Parses a jump target. Targets outside the line-number range are
    /// syntax errors; a target naming no existing line is left to semantic
    /// analysis.
    fn expect_jump_target(&mut self) -> Result<LineNumber, SyntaxError> {
        let TokenKind::Integer(value) = *self.peek().kind() else {
            return Err(self.unexpected("a target line number"));
        };
        let span = self.peek().span();
        self.advance();
        LineNumber::try_from(value).map_err(|_| {
            SyntaxError::new(SyntaxErrorKind::JumpTargetOutOfRange { target: value }, span)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source_analysis::tokenize;

    fn parse_source(source: &str) -> Result<Program, SyntaxError> {
        parse(tokenize(source).unwrap())
    }

    #[test]
    fn parses_every_statement_form() {
        let program = parse_source(
            "10 REM a demo\n\
             20 INPUT a\n\
             30 LET b = a + 1\n\
             40 PRINT b\n\
             50 IF b > 10 GOTO 70\n\
             60 GOTO 20\n\
             70 END",
        )
        .unwrap();

        assert_eq!(program.len(), 7);
        assert!(matches!(
            program.lines()[0].statement,
            Statement::Rem { ref text } if text == "a demo"
        ));
        assert!(matches!(
            program.lines()[1].statement,
            Statement::Input { ref variable } if variable == "a"
        ));
        assert!(matches!(program.lines()[4].statement, Statement::If { target: 70, .. }));
        assert!(matches!(program.lines()[5].statement, Statement::Goto { target: 20 }));
        assert!(matches!(program.lines()[6].statement, Statement::End));
    }

    #[test]
    fn print_accepts_expressions() {
        let program = parse_source("10 PRINT 1\n20 PRINT a + 2\n30 END").unwrap();
        assert!(matches!(
            program.lines()[0].statement,
            Statement::Print {
                value: Expression::IntegerLiteral { value: 1, .. }
            }
        ));
        assert!(matches!(
            program.lines()[1].statement,
            Statement::Print {
                value: Expression::BinaryOp { .. }
            }
        ));
    }

    #[test]
    fn expression_chains_are_left_nested() {
        let program = parse_source("10 LET x = 1 + 2 * 3\n20 END").unwrap();
        let Statement::Let { value, .. } = &program.lines()[0].statement else {
            panic!("expected LET");
        };
        // (1 + 2) * 3 — no precedence tiers, strictly left to right.
        let Expression::BinaryOp { op, left, right, .. } = value else {
            panic!("expected binary op");
        };
        assert_eq!(*op, BinaryOperator::Multiply);
        assert!(matches!(**right, Expression::IntegerLiteral { value: 3, .. }));
        assert!(matches!(
            **left,
            Expression::BinaryOp {
                op: BinaryOperator::Add,
                ..
            }
        ));
    }

    #[test]
    fn missing_line_number_is_rejected() {
        let err = parse_source("PRINT a").unwrap_err();
        assert_eq!(err.kind, SyntaxErrorKind::MissingLineNumber);
    }

    #[test]
    fn zero_line_number_is_rejected() {
        let err = parse_source("0 END").unwrap_err();
        assert_eq!(err.kind, SyntaxErrorKind::LineNumberZero);
    }

    #[test]
    fn duplicate_line_numbers_are_rejected() {
        let err = parse_source("10 LET a = 1\n10 LET a = 2\n20 END").unwrap_err();
        assert_eq!(err.kind, SyntaxErrorKind::DuplicateLineNumber { line: 10 });
    }

    #[test]
    fn out_of_order_line_numbers_are_rejected() {
        let err = parse_source("20 LET a = 1\n10 END").unwrap_err();
        assert_eq!(
            err.kind,
            SyntaxErrorKind::LineNumberOutOfOrder {
                previous: 20,
                found: 10
            }
        );
    }

    #[test]
    fn let_requires_assignment() {
        let err = parse_source("10 LET a 5").unwrap_err();
        assert!(matches!(err.kind, SyntaxErrorKind::UnexpectedToken { .. }));
    }

    #[test]
    fn if_requires_goto_keyword() {
        let err = parse_source("10 IF a == 1 PRINT a\n20 END").unwrap_err();
        assert!(
            matches!(err.kind, SyntaxErrorKind::UnexpectedToken { ref expected, .. } if expected == "'GOTO'")
        );
    }

    #[test]
    fn input_requires_a_variable() {
        let err = parse_source("10 INPUT 5").unwrap_err();
        assert!(
            matches!(err.kind, SyntaxErrorKind::UnexpectedToken { ref expected, .. } if expected == "a variable name")
        );
    }

    #[test]
    fn trailing_tokens_are_rejected() {
        let err = parse_source("10 END END").unwrap_err();
        assert!(
            matches!(err.kind, SyntaxErrorKind::UnexpectedToken { ref expected, .. } if expected == "end of line")
        );
    }

    #[test]
    fn jump_target_out_of_range_is_rejected() {
        let err = parse_source("10 GOTO 99999999999").unwrap_err();
        assert!(matches!(
            err.kind,
            SyntaxErrorKind::JumpTargetOutOfRange {
                target: 99_999_999_999
            }
        ));
    }

    #[test]
    fn empty_source_parses_to_empty_program() {
        let program = parse_source("").unwrap();
        assert!(program.is_empty());
        assert!(parse_source("\n\n\n").unwrap().is_empty());
    }

    #[test]
    fn line_spans_cover_the_statement() {
        let source = "10 LET a = 5\n20 END";
        let program = parse_source(source).unwrap();
        let span = program.lines()[0].span;
        assert_eq!(&source[span.as_range()], "10 LET a = 5");
    }
}
