// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! The front-end pipeline, in one call.
//!
//! [`compile`] runs the three analysis phases in order — lexing, parsing,
//! semantic analysis — and hands back everything they produced, or the
//! first phase's errors. It is all-or-nothing: a program with any dangling
//! jump target is rejected outright, so the interpreter only ever sees
//! programs whose jumps are known to resolve.

use miette::Diagnostic;
use thiserror::Error;

use crate::ast::Program;
use crate::semantic_analysis::{self, SemanticError};
use crate::source_analysis::{self, LexError, SyntaxError, Token};

/// A fully analysed program, ready to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledProgram {
    /// The token stream the program was parsed from.
    pub tokens: Vec<Token>,
    /// The analysed program.
    pub program: Program,
}

/// An error from any front-end phase.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum CompileError {
    /// The source failed to tokenize.
    #[error(transparent)]
    #[diagnostic(transparent)]
    Lex(#[from] LexError),

    /// The token stream failed to parse.
    #[error(transparent)]
    #[diagnostic(transparent)]
    Syntax(#[from] SyntaxError),

    /// The program parsed but is not executable.
    #[error("program failed semantic analysis")]
    Semantic {
        /// Every semantic error found, in line order.
        #[related]
        errors: Vec<SemanticError>,
    },
}

/// Compiles Simple source text into an executable program.
///
/// # Errors
///
/// Returns the first lex or syntax error encountered, or all semantic
/// errors at once if the program parses but contains dangling jumps.
///
/// # Examples
///
/// ```
/// use simplebasic_core::compile::compile;
///
/// let compiled = compile("10 LET a = 2 + 3\n20 PRINT a\n30 END").unwrap();
/// assert_eq!(compiled.program.len(), 3);
/// ```
pub fn compile(source: &str) -> Result<CompiledProgram, CompileError> {
    let tokens = source_analysis::tokenize(source)?;
    let program = source_analysis::parse(tokens.clone())?;
    let errors = semantic_analysis::analyse(&program);
    if !errors.is_empty() {
        return Err(CompileError::Semantic { errors });
    }
    Ok(CompiledProgram { tokens, program })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compiles_a_valid_program() {
        let compiled = compile("10 INPUT a\n20 PRINT a\n30 END").unwrap();
        assert_eq!(compiled.program.len(), 3);
        assert!(!compiled.tokens.is_empty());
    }

    #[test]
    fn lex_errors_surface_first() {
        let error = compile("10 LET a = $").unwrap_err();
        assert!(matches!(error, CompileError::Lex(_)));
    }

    #[test]
    fn syntax_errors_surface_before_semantic_analysis() {
        // The dangling GOTO is never reached; the parse error wins.
        let error = compile("10 GOTO 99\n20 LET = 5").unwrap_err();
        assert!(matches!(error, CompileError::Syntax(_)));
    }

    #[test]
    fn semantic_errors_are_collected_together() {
        let error = compile("10 GOTO 70\n20 IF 1 == 1 GOTO 80\n30 END").unwrap_err();
        let CompileError::Semantic { errors } = error else {
            panic!("expected semantic errors");
        };
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn empty_source_compiles_to_an_empty_program() {
        let compiled = compile("").unwrap();
        assert!(compiled.program.is_empty());
    }
}
