// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! The Simple language engine: lexer, parser, semantic analyzer, and
//! resumable interpreter for a line-numbered BASIC-style teaching language.
//!
//! The pipeline runs in fixed phases:
//!
//! 1. [`source_analysis`] — tokenize source text, then parse the token
//!    stream into the line-ordered [`ast::Program`].
//! 2. [`semantic_analysis`] — validate that every jump target resolves.
//! 3. [`interpret`] — execute, either synchronously with a pre-supplied
//!    input queue or interactively through a [`session::Session`] that
//!    suspends at each `INPUT`.
//!
//! [`compile::compile`] runs phases 1 and 2 in one call. [`unparse`]
//! renders a program back to canonical source text.
//!
//! # Examples
//!
//! ```
//! use simplebasic_core::compile::compile;
//! use simplebasic_core::interpret::run_synchronous;
//!
//! let source = "\
//! 10 INPUT a
//! 20 INPUT b
//! 30 LET c = a + b
//! 40 PRINT c
//! 50 END";
//!
//! let compiled = compile(source).unwrap();
//! let outcome = run_synchronous(compiled.program, vec![3, 4]);
//! assert_eq!(outcome.output, vec!["7"]);
//! ```

pub mod ast;
pub mod compile;
pub mod interpret;
pub mod semantic_analysis;
pub mod session;
pub mod source_analysis;
pub mod unparse;
