// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Semantic analysis for Simple programs.
//!
//! The language has a single value type, so there is no type checking; the
//! only static check is jump-target resolution. Every `GOTO` and
//! `IF ... GOTO` target must name a line present in the line table. All
//! violations are collected in one pass (not just the first), and analysis
//! always runs to completion before any execution begins.

pub mod error;

pub use error::{SemanticError, SemanticErrorKind};

use crate::ast::Program;

/// Validates every jump target in `program` against its line table.
///
/// Returns all violations in line order; an empty vector means the program
/// is ready to execute. After a clean pass, jump resolution during
/// execution can never fail for a user-visible reason.
#[must_use]
pub fn analyse(program: &Program) -> Vec<SemanticError> {
    let mut errors = Vec::new();

    for line in program.lines() {
        if let Some(target) = line.statement.jump_target() {
            if !program.contains_line(target) {
                errors.push(SemanticError::new(
                    SemanticErrorKind::UnknownJumpTarget { target },
                    line.number,
                    line.span,
                ));
            }
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source_analysis::{parse, tokenize};

    fn analyse_source(source: &str) -> Vec<SemanticError> {
        analyse(&parse(tokenize(source).unwrap()).unwrap())
    }

    #[test]
    fn valid_targets_pass() {
        assert!(analyse_source("10 GOTO 30\n20 IF 1 == 1 GOTO 10\n30 END").is_empty());
    }

    #[test]
    fn dangling_goto_is_reported() {
        let errors = analyse_source("10 GOTO 99\n20 END");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].line, 10);
        assert_eq!(
            errors[0].kind,
            SemanticErrorKind::UnknownJumpTarget { target: 99 }
        );
    }

    #[test]
    fn dangling_if_target_is_reported() {
        let errors = analyse_source("10 IF 1 == 1 GOTO 55\n20 END");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].line, 10);
    }

    #[test]
    fn all_violations_are_collected() {
        let errors = analyse_source("10 GOTO 99\n20 GOTO 88\n30 IF 1 > 0 GOTO 77\n40 END");
        assert_eq!(errors.len(), 3);
        assert_eq!(errors[0].line, 10);
        assert_eq!(errors[1].line, 20);
        assert_eq!(errors[2].line, 30);
    }

    #[test]
    fn a_line_may_jump_to_itself() {
        // Degenerate but well-formed; any step cap is host policy.
        assert!(analyse_source("10 GOTO 10").is_empty());
    }
}
