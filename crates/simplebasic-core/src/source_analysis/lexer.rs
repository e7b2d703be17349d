// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Lexical analysis for Simple source code.
//!
//! [`tokenize`] converts source text into a flat token sequence ending in
//! [`TokenKind::Eof`]. The lexer is hand-written and total: every character
//! either becomes part of a token or fails with a [`LexError`] carrying its
//! exact location. Nothing is silently dropped.
//!
//! Two rules need one character of context:
//!
//! - An integer at the start of a physical line is a [`TokenKind::LineNumber`]
//!   prefix; anywhere else it is a [`TokenKind::Integer`] literal.
//! - `REM` swallows the remainder of its physical line as comment text in a
//!   single token, so comments are never re-lexed.
//!
//! Comparison operators use longest-match: `>=` wins over `>`, and a bare `!`
//! (which is only valid as part of `!=`) is a lexical error.

use std::iter::Peekable;
use std::str::CharIndices;

use ecow::EcoString;

use super::{LexError, LexErrorKind, Span, Token, TokenKind};

/// Tokenizes an entire source text.
///
/// The returned sequence always ends with an [`TokenKind::Eof`] token.
///
/// # Errors
///
/// Returns a [`LexError`] on the first character that cannot be part of any
/// token.
///
/// # Examples
///
/// ```
/// use simplebasic_core::source_analysis::{tokenize, TokenKind};
///
/// let tokens = tokenize("10 PRINT x").unwrap();
/// assert!(matches!(tokens[0].kind(), TokenKind::LineNumber(10)));
/// assert!(matches!(tokens[1].kind(), TokenKind::Print));
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(source).tokenize()
}

/// A lexer over Simple source text.
pub struct Lexer<'src> {
    /// The source text being lexed.
    source: &'src str,
    /// Character iterator with byte positions.
    chars: Peekable<CharIndices<'src>>,
    /// Current byte position in source.
    position: usize,
    /// Whether the next token starts a physical line (line-number position).
    at_line_start: bool,
}

impl std::fmt::Debug for Lexer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lexer")
            .field("position", &self.position)
            .field("remaining", &self.source.get(self.position..).unwrap_or(""))
            .finish()
    }
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer for the given source text.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            position: 0,
            at_line_start: true,
        }
    }

    /// Consumes the lexer and produces the full token sequence.
    ///
    /// # Errors
    ///
    /// Returns a [`LexError`] on the first invalid character.
    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let done = token.kind().is_eof();
            tokens.push(token);
            if done {
                return Ok(tokens);
            }
        }
    }

    /// Peeks at the next character without consuming it.
    fn peek_char(&mut self) -> Option<char> {
        self.chars.peek().map(|&(_, c)| c)
    }

    /// Consumes the next character and returns it.
    fn advance(&mut self) -> Option<char> {
        let (pos, c) = self.chars.next()?;
        self.position = pos + c.len_utf8();
        Some(c)
    }

    /// Consumes characters while the predicate is true.
    fn advance_while(&mut self, predicate: impl Fn(char) -> bool) {
        while self.peek_char().is_some_and(&predicate) {
            self.advance();
        }
    }

    /// Returns the current byte position.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "source files over 4GB are not supported"
    )]
    fn current_position(&self) -> u32 {
        self.position as u32
    }

    /// Creates a span from start to current position.
    fn span_from(&self, start: u32) -> Span {
        Span::new(start, self.current_position())
    }

    /// Extracts source text for a span.
    fn text_for(&self, span: Span) -> &'src str {
        &self.source[span.as_range()]
    }

    /// Lexes the next token, skipping any leading blank space.
    fn next_token(&mut self) -> Result<Token, LexError> {
        self.advance_while(|c| matches!(c, ' ' | '\t' | '\r'));
        let start = self.current_position();

        let Some(c) = self.peek_char() else {
            return Ok(Token::new(TokenKind::Eof, self.span_from(start)));
        };

        let kind = match c {
            '\n' => {
                self.advance();
                self.at_line_start = true;
                return Ok(Token::new(TokenKind::Newline, self.span_from(start)));
            }
            '0'..='9' => self.lex_number(start)?,
            'a'..='z' | 'A'..='Z' | '_' => self.lex_word(start)?,
            '+' => {
                self.advance();
                TokenKind::Plus
            }
            '-' => {
                self.advance();
                TokenKind::Minus
            }
            '*' => {
                self.advance();
                TokenKind::Star
            }
            '/' => {
                self.advance();
                TokenKind::Slash
            }
            '%' => {
                self.advance();
                TokenKind::Percent
            }
            '=' => {
                self.advance();
                if self.peek_char() == Some('=') {
                    self.advance();
                    TokenKind::EqEq
                } else {
                    TokenKind::Assign
                }
            }
            '!' => {
                self.advance();
                if self.peek_char() == Some('=') {
                    self.advance();
                    TokenKind::NotEq
                } else {
                    return Err(LexError::unexpected_char('!', self.span_from(start)));
                }
            }
            '>' => {
                self.advance();
                if self.peek_char() == Some('=') {
                    self.advance();
                    TokenKind::GreaterEq
                } else {
                    TokenKind::Greater
                }
            }
            '<' => {
                self.advance();
                if self.peek_char() == Some('=') {
                    self.advance();
                    TokenKind::LessEq
                } else {
                    TokenKind::Less
                }
            }
            _ => {
                self.advance();
                return Err(LexError::unexpected_char(c, self.span_from(start)));
            }
        };

        self.at_line_start = false;
        Ok(Token::new(kind, self.span_from(start)))
    }

    /// Lexes an integer: a line-number prefix at the start of a physical
    /// line, an integer literal otherwise.
    fn lex_number(&mut self, start: u32) -> Result<TokenKind, LexError> {
        self.advance_while(|c| c.is_ascii_digit());
        let text = self.text_for(self.span_from(start));
        if self.at_line_start {
            let number = text
                .parse::<u32>()
                .map_err(|_| LexError::new(LexErrorKind::IntegerOutOfRange, self.span_from(start)))?;
            Ok(TokenKind::LineNumber(number))
        } else {
            let value = text
                .parse::<i64>()
                .map_err(|_| LexError::new(LexErrorKind::IntegerOutOfRange, self.span_from(start)))?;
            Ok(TokenKind::Integer(value))
        }
    }

    /// Lexes an identifier or keyword. `REM` consumes the rest of the line.
    fn lex_word(&mut self, start: u32) -> Result<TokenKind, LexError> {
        self.advance_while(|c| c.is_ascii_alphanumeric() || c == '_');
        let word = self.text_for(self.span_from(start));

        if word.eq_ignore_ascii_case("rem") {
            let text_start = self.current_position();
            self.advance_while(|c| c != '\n');
            let text = self.text_for(self.span_from(text_start)).trim();
            return Ok(TokenKind::Rem(EcoString::from(text)));
        }

        Ok(TokenKind::keyword(word)
            .unwrap_or_else(|| TokenKind::Identifier(EcoString::from(word))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source_analysis::Position;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source)
            .unwrap()
            .into_iter()
            .map(Token::into_kind)
            .collect()
    }

    #[test]
    fn lexes_a_let_statement() {
        assert_eq!(
            kinds("10 let a = 5"),
            vec![
                TokenKind::LineNumber(10),
                TokenKind::Let,
                TokenKind::Identifier("a".into()),
                TokenKind::Assign,
                TokenKind::Integer(5),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn line_numbers_only_at_line_start() {
        assert_eq!(
            kinds("10 goto 40"),
            vec![
                TokenKind::LineNumber(10),
                TokenKind::Goto,
                TokenKind::Integer(40),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn newline_resets_line_start() {
        assert_eq!(
            kinds("10 end\n20 end"),
            vec![
                TokenKind::LineNumber(10),
                TokenKind::End,
                TokenKind::Newline,
                TokenKind::LineNumber(20),
                TokenKind::End,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn keywords_are_case_insensitive() {
        assert_eq!(
            kinds("10 PRINT a\n20 Print b"),
            vec![
                TokenKind::LineNumber(10),
                TokenKind::Print,
                TokenKind::Identifier("a".into()),
                TokenKind::Newline,
                TokenKind::LineNumber(20),
                TokenKind::Print,
                TokenKind::Identifier("b".into()),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn comparison_operators_use_longest_match() {
        assert_eq!(
            kinds("10 if a >= 1 goto 30"),
            vec![
                TokenKind::LineNumber(10),
                TokenKind::If,
                TokenKind::Identifier("a".into()),
                TokenKind::GreaterEq,
                TokenKind::Integer(1),
                TokenKind::Goto,
                TokenKind::Integer(30),
                TokenKind::Eof,
            ]
        );
        assert!(kinds("10 if a == 1 goto 30").contains(&TokenKind::EqEq));
        assert!(kinds("10 if a != 1 goto 30").contains(&TokenKind::NotEq));
        assert!(kinds("10 if a <= 1 goto 30").contains(&TokenKind::LessEq));
    }

    #[test]
    fn assign_is_distinct_from_equality() {
        let tokens = kinds("10 let a = 1\n20 if a == 1 goto 40");
        assert!(tokens.contains(&TokenKind::Assign));
        assert!(tokens.contains(&TokenKind::EqEq));
    }

    #[test]
    fn rem_swallows_rest_of_line() {
        assert_eq!(
            kinds("10 rem anything $ goes % here\n20 end"),
            vec![
                TokenKind::LineNumber(10),
                TokenKind::Rem("anything $ goes % here".into()),
                TokenKind::Newline,
                TokenKind::LineNumber(20),
                TokenKind::End,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn rem_with_no_text() {
        assert_eq!(
            kinds("10 rem"),
            vec![
                TokenKind::LineNumber(10),
                TokenKind::Rem("".into()),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn invalid_character_fails_at_its_column() {
        let source = "10 LET a = 5 $";
        let err = tokenize(source).unwrap_err();
        assert_eq!(err.kind, LexErrorKind::UnexpectedCharacter('$'));
        let pos = Position::of(source, err.span.start());
        assert_eq!(pos.line, 1);
        assert_eq!(pos.column, 14);
    }

    #[test]
    fn bare_bang_is_an_error() {
        let err = tokenize("10 if a ! 1 goto 30").unwrap_err();
        assert_eq!(err.kind, LexErrorKind::UnexpectedCharacter('!'));
    }

    #[test]
    fn oversized_integer_literal_is_an_error() {
        let err = tokenize("10 let a = 99999999999999999999").unwrap_err();
        assert_eq!(err.kind, LexErrorKind::IntegerOutOfRange);
    }

    #[test]
    fn empty_source_is_just_eof() {
        assert_eq!(kinds(""), vec![TokenKind::Eof]);
    }

    #[test]
    fn spans_cover_their_lexemes() {
        let source = "10 print abc";
        let tokens = tokenize(source).unwrap();
        assert_eq!(tokens[0].span(), Span::new(0, 2));
        assert_eq!(tokens[1].span(), Span::new(3, 8));
        assert_eq!(tokens[2].span(), Span::new(9, 12));
    }

    #[test]
    fn whitespace_separates_but_is_never_significant() {
        assert_eq!(kinds("10\tlet\ta\t=\t5"), kinds("10   let  a =     5"));
    }
}
