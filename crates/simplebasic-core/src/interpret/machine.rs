// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! The resumable interpreter state machine.
//!
//! Execution is a fetch-decode-effect loop keyed by the program counter.
//! Rather than blocking for input, the machine is driven from outside:
//! [`Interpreter::step`] executes one statement and reports its observable
//! [`StepEffect`]; an `INPUT` statement suspends the machine, and
//! [`Interpreter::resume_with_input`] delivers the requested value and makes
//! it runnable again. The whole execution state lives in the [`Interpreter`]
//! value, so a suspended machine can be parked in a session table, resumed
//! later, or simply dropped to abandon the program.
//!
//! The status lattice is `Ready → Running → (Suspended ⇄ Running)* →
//! (Completed | Failed)`; `Completed` and `Failed` are terminal.
//!
//! Arithmetic is total: `/` and `%` are floor division and floor modulo,
//! and `+`/`-`/`*` wrap on i64 overflow. Reading a variable that was never
//! assigned yields 0.

use std::collections::HashMap;

use ecow::{eco_format, EcoString};

use crate::ast::{BinaryOperator, Comparator, Expression, LineNumber, Program, Statement};

use super::error::{RuntimeError, RuntimeErrorKind};
use super::value::Value;

/// The prompt text sent with every input request.
pub const INPUT_PROMPT: &str = "? ";

/// The lifecycle status of an [`Interpreter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    /// Constructed but not yet stepped.
    Ready,
    /// Stepping normally.
    Running,
    /// Waiting for one input value; resumable exactly once.
    Suspended {
        /// The variable the pending `INPUT` assigns to.
        variable: EcoString,
        /// The line of the pending `INPUT` statement.
        line: LineNumber,
    },
    /// Ran to completion. Terminal.
    Completed,
    /// Aborted by a runtime error. Terminal.
    Failed(RuntimeError),
}

impl Status {
    /// Returns `true` for the terminal states.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Failed(_))
    }

    /// Returns `true` if the machine is waiting for input.
    #[must_use]
    pub const fn is_suspended(&self) -> bool {
        matches!(self, Self::Suspended { .. })
    }
}

/// The externally observable effect of one [`Interpreter::step`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepEffect {
    /// A statement executed with nothing observable (`LET`, `GOTO`, `IF`,
    /// `REM`).
    Continue,
    /// A `PRINT` produced one line of output.
    Output(EcoString),
    /// An `INPUT` suspended the machine; deliver a value with
    /// [`Interpreter::resume_with_input`].
    InputRequest {
        /// The prompt to show, always [`INPUT_PROMPT`].
        prompt: EcoString,
        /// The variable the value will be assigned to.
        variable: EcoString,
    },
    /// The program reached `END` (or ran past its last line), or was
    /// already in a terminal state.
    Completed,
}

/// A program-counter-driven interpreter for one Simple program.
///
/// Each interpreter owns its entire execution state; concurrent sessions
/// each construct their own. Construction requires a program that already
/// passed semantic analysis — see [`compile`](crate::compile::compile).
///
/// # Examples
///
/// ```
/// use simplebasic_core::compile::compile;
/// use simplebasic_core::interpret::{Interpreter, StepEffect};
///
/// let compiled = compile("10 PRINT 7\n20 END").unwrap();
/// let mut machine = Interpreter::new(compiled.program);
/// assert_eq!(
///     machine.step().unwrap(),
///     StepEffect::Output("7".into())
/// );
/// assert_eq!(machine.step().unwrap(), StepEffect::Completed);
/// ```
#[derive(Debug, Clone)]
pub struct Interpreter {
    program: Program,
    variables: HashMap<EcoString, Value>,
    /// Index of the next statement in line-table order.
    pc: usize,
    status: Status,
    steps: u64,
}

impl Interpreter {
    /// Creates a machine in the `Ready` state, positioned at the first line.
    #[must_use]
    pub fn new(program: Program) -> Self {
        Self {
            program,
            variables: HashMap::new(),
            pc: 0,
            status: Status::Ready,
            steps: 0,
        }
    }

    /// Returns the current lifecycle status.
    #[must_use]
    pub fn status(&self) -> &Status {
        &self.status
    }

    /// Returns the number of statements executed so far.
    ///
    /// The core imposes no step limit; hosts that want to guard against
    /// `GOTO` loops can poll this between steps and stop driving the
    /// machine when their budget is spent.
    #[must_use]
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Returns the value of a variable, or 0 if it was never assigned.
    #[must_use]
    pub fn variable(&self, name: &str) -> Value {
        self.variables
            .get(name)
            .copied()
            .unwrap_or(Value::Integer(0))
    }

    /// Executes the statement at the program counter and reports its
    /// effect.
    ///
    /// Stepping a terminal machine returns [`StepEffect::Completed`];
    /// stepping a suspended machine re-reports its pending
    /// [`StepEffect::InputRequest`] without executing anything.
    ///
    /// # Errors
    ///
    /// Returns the [`RuntimeError`] that aborted execution; the machine is
    /// left in the `Failed` state.
    pub fn step(&mut self) -> Result<StepEffect, RuntimeError> {
        match &self.status {
            Status::Completed | Status::Failed(_) => return Ok(StepEffect::Completed),
            Status::Suspended { variable, .. } => {
                return Ok(StepEffect::InputRequest {
                    prompt: INPUT_PROMPT.into(),
                    variable: variable.clone(),
                });
            }
            Status::Ready | Status::Running => {}
        }

        if self.pc >= self.program.len() {
            // Ran off the end without an END; treated as completion.
            self.status = Status::Completed;
            return Ok(StepEffect::Completed);
        }

        self.status = Status::Running;
        self.steps += 1;

        let number = self.program.lines()[self.pc].number;
        let statement = self.program.lines()[self.pc].statement.clone();

        match statement {
            Statement::Rem { .. } => {
                self.pc += 1;
                Ok(StepEffect::Continue)
            }
            Statement::Input { variable } => {
                self.status = Status::Suspended {
                    variable: variable.clone(),
                    line: number,
                };
                Ok(StepEffect::InputRequest {
                    prompt: INPUT_PROMPT.into(),
                    variable,
                })
            }
            Statement::Print { value } => {
                let value = self.eval_or_fail(&value, number)?;
                self.pc += 1;
                Ok(StepEffect::Output(eco_format!("{value}")))
            }
            Statement::Let { variable, value } => {
                let value = self.eval_or_fail(&value, number)?;
                self.variables.insert(variable, Value::Integer(value));
                self.pc += 1;
                Ok(StepEffect::Continue)
            }
            Statement::Goto { target } => {
                self.jump_or_fail(target, number)?;
                Ok(StepEffect::Continue)
            }
            Statement::If {
                left,
                comparator,
                right,
                target,
            } => {
                let left = self.eval_or_fail(&left, number)?;
                let right = self.eval_or_fail(&right, number)?;
                if compare(comparator, left, right) {
                    self.jump_or_fail(target, number)?;
                } else {
                    self.pc += 1;
                }
                Ok(StepEffect::Continue)
            }
            Statement::End => {
                self.status = Status::Completed;
                Ok(StepEffect::Completed)
            }
        }
    }

    /// Delivers the raw text answer to the pending input request.
    ///
    /// On success the machine returns to `Running` and the next
    /// [`step`](Self::step) continues after the `INPUT` statement.
    ///
    /// # Errors
    ///
    /// - [`RuntimeErrorKind::InvalidInput`] if `raw` does not parse as an
    ///   integer (after trimming); this aborts the execution.
    /// - [`RuntimeErrorKind::Internal`] if the machine was not suspended;
    ///   the machine state is unchanged in that case.
    pub fn resume_with_input(&mut self, raw: &str) -> Result<(), RuntimeError> {
        let Status::Suspended { line, .. } = self.status else {
            return Err(RuntimeError::new(
                RuntimeErrorKind::Internal("input delivered with no pending request".into()),
                self.current_line(),
            ));
        };

        let trimmed = raw.trim();
        match trimmed.parse::<i64>() {
            Ok(value) => self.resume_with_value(value),
            Err(_) => Err(self.fail_at(RuntimeErrorKind::InvalidInput(trimmed.into()), line)),
        }
    }

    /// Delivers an already-parsed integer to the pending input request.
    ///
    /// # Errors
    ///
    /// Returns [`RuntimeErrorKind::Internal`] (machine unchanged) if the
    /// machine was not suspended.
    pub fn resume_with_value(&mut self, value: i64) -> Result<(), RuntimeError> {
        let Status::Suspended { ref variable, .. } = self.status else {
            return Err(RuntimeError::new(
                RuntimeErrorKind::Internal("input delivered with no pending request".into()),
                self.current_line(),
            ));
        };

        self.variables.insert(variable.clone(), Value::Integer(value));
        self.pc += 1;
        self.status = Status::Running;
        Ok(())
    }

    /// Aborts the machine with an error raised by the driving host (for
    /// example, synchronous input exhaustion).
    pub(crate) fn fail(&mut self, kind: RuntimeErrorKind) -> RuntimeError {
        let line = self.current_line();
        self.fail_at(kind, line)
    }

    fn fail_at(&mut self, kind: RuntimeErrorKind, line: LineNumber) -> RuntimeError {
        let error = RuntimeError::new(kind, line);
        self.status = Status::Failed(error.clone());
        error
    }

    /// The line number of the statement about to execute (or pending, when
    /// suspended).
    fn current_line(&self) -> LineNumber {
        if let Status::Suspended { line, .. } = self.status {
            return line;
        }
        self.program.lines().get(self.pc).map_or(0, |l| l.number)
    }

    fn eval_or_fail(&mut self, expr: &Expression, line: LineNumber) -> Result<i64, RuntimeError> {
        match eval(&self.variables, expr) {
            Ok(value) => Ok(value),
            Err(kind) => Err(self.fail_at(kind, line)),
        }
    }

    /// Transfers control to `target`. A miss here means semantic analysis
    /// was skipped or the line table changed underneath us; it is reported
    /// as an internal-consistency failure, not a user error.
    fn jump_or_fail(&mut self, target: LineNumber, line: LineNumber) -> Result<(), RuntimeError> {
        match self.program.index_of(target) {
            Some(index) => {
                self.pc = index;
                Ok(())
            }
            None => Err(self.fail_at(
                RuntimeErrorKind::Internal(eco_format!(
                    "jump target {target} missing from the line table"
                )),
                line,
            )),
        }
    }
}

/// Evaluates an expression against the variable store.
///
/// Unassigned variables read as 0.
fn eval(variables: &HashMap<EcoString, Value>, expr: &Expression) -> Result<i64, RuntimeErrorKind> {
    match expr {
        Expression::IntegerLiteral { value, .. } => Ok(*value),
        Expression::VariableRef { name, .. } => Ok(variables
            .get(name.as_str())
            .copied()
            .unwrap_or(Value::Integer(0))
            .as_integer()),
        Expression::BinaryOp {
            op, left, right, ..
        } => {
            let left = eval(variables, left)?;
            let right = eval(variables, right)?;
            apply(*op, left, right)
        }
    }
}

fn apply(op: BinaryOperator, left: i64, right: i64) -> Result<i64, RuntimeErrorKind> {
    match op {
        BinaryOperator::Add => Ok(left.wrapping_add(right)),
        BinaryOperator::Subtract => Ok(left.wrapping_sub(right)),
        BinaryOperator::Multiply => Ok(left.wrapping_mul(right)),
        BinaryOperator::Divide => {
            if right == 0 {
                Err(RuntimeErrorKind::DivisionByZero)
            } else {
                Ok(floor_div(left, right))
            }
        }
        BinaryOperator::Modulo => {
            if right == 0 {
                Err(RuntimeErrorKind::DivisionByZero)
            } else {
                Ok(floor_rem(left, right))
            }
        }
    }
}

fn compare(comparator: Comparator, left: i64, right: i64) -> bool {
    match comparator {
        Comparator::Equal => left == right,
        Comparator::NotEqual => left != right,
        Comparator::Greater => left > right,
        Comparator::GreaterOrEqual => left >= right,
        Comparator::Less => left < right,
        Comparator::LessOrEqual => left <= right,
    }
}

/// Floor division: rounds toward negative infinity. `i64::MIN / -1` wraps.
fn floor_div(a: i64, b: i64) -> i64 {
    let quotient = a.wrapping_div(b);
    let remainder = a.wrapping_rem(b);
    if remainder != 0 && (remainder < 0) != (b < 0) {
        quotient - 1
    } else {
        quotient
    }
}

/// Floor modulo: the result takes the sign of the divisor.
fn floor_rem(a: i64, b: i64) -> i64 {
    let remainder = a.wrapping_rem(b);
    if remainder != 0 && (remainder < 0) != (b < 0) {
        remainder + b
    } else {
        remainder
    }
}
