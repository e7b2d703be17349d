// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! CLI command implementations.

pub mod check;
pub mod examples;
pub mod interactive;
pub mod run;

use camino::Utf8Path;
use miette::{Context, IntoDiagnostic, NamedSource, Result};
use simplebasic_core::ast::Program;
use simplebasic_core::compile::{compile, CompiledProgram};

/// Reads a source file.
pub fn read_source(path: &str) -> Result<String> {
    let path = Utf8Path::new(path);
    std::fs::read_to_string(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to read '{path}'"))
}

/// Compiles source text, attaching the named source so diagnostics render
/// with the offending line in context.
pub fn compile_named(path: &str, source: &str) -> Result<CompiledProgram> {
    compile(source).map_err(|error| {
        miette::Report::new(error)
            .with_source_code(NamedSource::new(path, source.to_string()))
    })
}

/// Reads and compiles a source file in one step.
pub fn load_program(path: &str) -> Result<Program> {
    let source = read_source(path)?;
    Ok(compile_named(path, &source)?.program)
}
