// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Run a program interactively over stdin/stdout.
//!
//! The command speaks the session protocol as JSON lines: each
//! [`SessionMessage`] is written to stdout on its own line, and each reply
//! is read from stdin as a [`HostMessage`]. A transport (WebSocket bridge,
//! test harness, or a human with a terminal) relays messages verbatim.

use std::io::{BufRead, Write};

use miette::{Context, IntoDiagnostic, Result};
use simplebasic_core::session::{HostMessage, Session, SessionMessage};
use tracing::{debug, instrument};

/// Execute a source file under the interactive discipline.
#[instrument(skip_all, fields(file = %file))]
pub fn run(file: &str) -> Result<()> {
    let program = super::load_program(file)?;
    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    let stdout = std::io::stdout();

    let mut session = Session::new(program);
    emit(&stdout, &session.start())?;

    while !session.is_finished() {
        let Some(line) = lines.next() else {
            miette::bail!("stdin closed while the program was awaiting input");
        };
        let line = line.into_diagnostic().wrap_err("Failed to read stdin")?;
        if line.trim().is_empty() {
            continue;
        }

        let message: HostMessage = serde_json::from_str(&line)
            .into_diagnostic()
            .wrap_err("Malformed host message")?;
        debug!(?message, "Received");

        let replies = session
            .handle(&message)
            .into_diagnostic()
            .wrap_err("Protocol violation")?;
        emit(&stdout, &replies)?;
    }

    Ok(())
}

/// Writes each message as one JSON line, flushing so a host driving us
/// through a pipe sees the request before we block on its reply.
fn emit(stdout: &std::io::Stdout, messages: &[SessionMessage]) -> Result<()> {
    let mut handle = stdout.lock();
    for message in messages {
        let json = serde_json::to_string(message).into_diagnostic()?;
        writeln!(handle, "{json}").into_diagnostic()?;
    }
    handle.flush().into_diagnostic()?;
    Ok(())
}
