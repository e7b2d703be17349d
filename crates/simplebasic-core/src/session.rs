// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! The interactive execution protocol.
//!
//! A [`Session`] wraps one [`Interpreter`] and turns its effects into an
//! ordered stream of [`SessionMessage`]s (`input_request` / `output` /
//! `execution_finished`, tagged with a `type` field when serialized). The
//! transport layer, whether a WebSocket bridge, a CLI pipe, or a test
//! harness, only relays messages; all semantics live here.
//!
//! Protocol rules:
//!
//! - Messages are emitted in the exact order effects occurred.
//! - `input_request` is answered with exactly one [`HostMessage::Input`];
//!   delivering input at any other time is a [`SessionError`].
//! - `execution_finished` is terminal; nothing follows it, and runtime
//!   failures (including unparseable input) are reported inside it rather
//!   than as a transport error.
//!
//! Each session owns its interpreter outright, so concurrent sessions never
//! share state, and dropping a session before it finishes simply abandons
//! the program.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ast::Program;
use crate::interpret::{Interpreter, StepEffect};

/// A message emitted by the core for delivery to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionMessage {
    /// Execution suspended; the host must answer with one input value.
    InputRequest {
        /// Prompt text to display.
        prompt: String,
        /// The variable the pending `INPUT` assigns to.
        variable: String,
    },

    /// One completed `PRINT`.
    Output {
        /// The printed value, already rendered.
        data: String,
    },

    /// Terminal message; no further messages follow for this session.
    ExecutionFinished {
        /// `true` when the program completed, `false` when a runtime error
        /// aborted it.
        success: bool,
        /// The rendered runtime error, when `success` is `false`.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        error: Option<String>,
    },
}

/// A message delivered by the host to the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HostMessage {
    /// The answer to the most recent outstanding
    /// [`SessionMessage::InputRequest`].
    Input {
        /// The raw value text; parsed as an integer by the core.
        value: String,
    },
}

/// A protocol violation by the host.
///
/// These are distinct from runtime errors: a runtime error ends the program
/// (inside `execution_finished`), while a session error means the host
/// spoke out of turn and the program state is unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Input was delivered with no outstanding `input_request`.
    #[error("no input request is outstanding")]
    NotAwaitingInput,

    /// A message was delivered after `execution_finished`.
    #[error("the session has already finished")]
    Finished,
}

/// One interactive execution, driven message by message.
///
/// # Examples
///
/// ```
/// use simplebasic_core::compile::compile;
/// use simplebasic_core::session::{Session, SessionMessage};
///
/// let compiled = compile("10 INPUT a\n20 PRINT a\n30 END").unwrap();
/// let mut session = Session::new(compiled.program);
///
/// let messages = session.start();
/// assert!(matches!(messages[0], SessionMessage::InputRequest { .. }));
///
/// let messages = session.provide_input("7").unwrap();
/// assert_eq!(
///     messages[0],
///     SessionMessage::Output { data: "7".into() }
/// );
/// assert!(session.is_finished());
/// ```
#[derive(Debug)]
pub struct Session {
    machine: Interpreter,
    finished: bool,
}

impl Session {
    /// Creates a session over a semantically valid program.
    #[must_use]
    pub fn new(program: Program) -> Self {
        Self {
            machine: Interpreter::new(program),
            finished: false,
        }
    }

    /// Returns `true` once `execution_finished` has been emitted.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Returns `true` while an `input_request` is outstanding.
    #[must_use]
    pub fn is_awaiting_input(&self) -> bool {
        !self.finished && self.machine.status().is_suspended()
    }

    /// Returns the number of statements executed so far; hosts may use
    /// this to impose a step budget between messages.
    #[must_use]
    pub fn steps(&self) -> u64 {
        self.machine.steps()
    }

    /// Begins execution, returning every message up to the first
    /// suspension or termination.
    pub fn start(&mut self) -> Vec<SessionMessage> {
        self.pump()
    }

    /// Answers the outstanding input request and continues execution.
    ///
    /// A value that does not parse as an integer ends the program: the
    /// returned messages close with an unsuccessful `execution_finished`,
    /// exactly as any other runtime error would.
    ///
    /// # Errors
    ///
    /// Returns a [`SessionError`] if no request is outstanding; the
    /// program state is untouched in that case.
    pub fn provide_input(&mut self, value: &str) -> Result<Vec<SessionMessage>, SessionError> {
        if self.finished {
            return Err(SessionError::Finished);
        }
        if !self.machine.status().is_suspended() {
            return Err(SessionError::NotAwaitingInput);
        }

        if let Err(error) = self.machine.resume_with_input(value) {
            self.finished = true;
            return Ok(vec![SessionMessage::ExecutionFinished {
                success: false,
                error: Some(error.to_string()),
            }]);
        }

        Ok(self.pump())
    }

    /// Handles one host message.
    ///
    /// # Errors
    ///
    /// Returns a [`SessionError`] if the message violates the protocol.
    pub fn handle(&mut self, message: &HostMessage) -> Result<Vec<SessionMessage>, SessionError> {
        match message {
            HostMessage::Input { value } => self.provide_input(value),
        }
    }

    /// Steps the machine until it suspends or terminates, collecting
    /// messages in effect order.
    fn pump(&mut self) -> Vec<SessionMessage> {
        let mut messages = Vec::new();

        loop {
            match self.machine.step() {
                Ok(StepEffect::Continue) => {}
                Ok(StepEffect::Output(data)) => {
                    messages.push(SessionMessage::Output {
                        data: data.to_string(),
                    });
                }
                Ok(StepEffect::InputRequest { prompt, variable }) => {
                    messages.push(SessionMessage::InputRequest {
                        prompt: prompt.to_string(),
                        variable: variable.to_string(),
                    });
                    break;
                }
                Ok(StepEffect::Completed) => {
                    self.finished = true;
                    messages.push(SessionMessage::ExecutionFinished {
                        success: true,
                        error: None,
                    });
                    break;
                }
                Err(error) => {
                    self.finished = true;
                    messages.push(SessionMessage::ExecutionFinished {
                        success: false,
                        error: Some(error.to_string()),
                    });
                    break;
                }
            }
        }

        messages
    }
}
