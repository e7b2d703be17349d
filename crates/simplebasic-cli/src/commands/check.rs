// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Check source files for errors without executing them.

use miette::Result;
use simplebasic_core::unparse;
use tracing::{debug, instrument};

/// Compile a source file and report the result.
///
/// With `--tokens` the token stream is printed; with `--ast` the canonical
/// program listing is. Errors render as miette diagnostics against the
/// named source.
#[instrument(skip_all, fields(file = %file))]
pub fn check(file: &str, tokens: bool, ast: bool) -> Result<()> {
    let source = super::read_source(file)?;
    let compiled = super::compile_named(file, &source)?;
    debug!(lines = compiled.program.len(), "Compiled");

    if tokens {
        for token in &compiled.tokens {
            println!("{:?}", token.kind());
        }
    }

    if ast {
        print!("{}", unparse::program_source(&compiled.program));
    }

    if !tokens && !ast {
        println!(
            "{file}: OK ({} line{})",
            compiled.program.len(),
            if compiled.program.len() == 1 { "" } else { "s" }
        );
    }

    Ok(())
}
