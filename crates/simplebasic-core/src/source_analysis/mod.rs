// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Source analysis for Simple: spans, tokens, lexer, and parser.
//!
//! Data flows strictly forward through this module: text → [`Token`]s
//! ([`tokenize`]) → [`Program`](crate::ast::Program) ([`parse`]). Both stages
//! are pure functions of their input; neither performs any I/O.
//!
//! Jump-target validation happens afterwards in
//! [`semantic_analysis`](crate::semantic_analysis); execution lives in
//! [`interpret`](crate::interpret).

mod error;
mod lexer;
mod parser;
mod span;
mod token;


pub use error::{LexError, LexErrorKind, SyntaxError, SyntaxErrorKind};
pub use lexer::{tokenize, Lexer};
pub use parser::parse;
pub use span::{Position, Span};
pub use token::{Token, TokenKind};
