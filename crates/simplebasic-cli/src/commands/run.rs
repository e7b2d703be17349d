// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Run a program with inputs supplied up front.

use std::collections::VecDeque;

use miette::Result;
use simplebasic_core::interpret::{Interpreter, Status, StepEffect};
use tracing::{debug, instrument};

/// Execute a source file synchronously.
///
/// Output is printed as it is produced, one value per line. The step cap
/// is a host policy: the engine itself never limits GOTO loops.
#[instrument(skip_all, fields(file = %file))]
pub fn run(file: &str, inputs: Vec<i64>, max_steps: Option<u64>) -> Result<()> {
    let program = super::load_program(file)?;
    let mut machine = Interpreter::new(program);
    let mut queue: VecDeque<i64> = inputs.into();

    loop {
        if let Some(cap) = max_steps {
            if machine.steps() >= cap {
                miette::bail!("execution exceeded {cap} steps; aborting");
            }
        }

        match machine.step() {
            Ok(StepEffect::Continue) => {}
            Ok(StepEffect::Output(text)) => println!("{text}"),
            Ok(StepEffect::InputRequest { .. }) => {
                let Some(value) = queue.pop_front() else {
                    let line = match machine.status() {
                        Status::Suspended { line, .. } => *line,
                        _ => unreachable!("input request implies suspension"),
                    };
                    miette::bail!(
                        "runtime error at line {line}: input exhausted \
                         (supply more --input values)"
                    );
                };
                machine.resume_with_value(value)?;
            }
            Ok(StepEffect::Completed) => {
                debug!(steps = machine.steps(), "Completed");
                return Ok(());
            }
            Err(error) => return Err(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn source_file(source: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(source.as_bytes()).unwrap();
        file
    }

    #[test]
    fn runs_a_program_to_completion() {
        let file = source_file("10 INPUT a\n20 PRINT a\n30 END\n");
        run(file.path().to_str().unwrap(), vec![7], None).unwrap();
    }

    #[test]
    fn step_cap_aborts_an_infinite_loop() {
        let file = source_file("10 GOTO 10\n");
        let error = run(file.path().to_str().unwrap(), vec![], Some(100)).unwrap_err();
        assert!(error.to_string().contains("100 steps"));
    }

    #[test]
    fn missing_inputs_report_the_input_line() {
        let file = source_file("10 INPUT a\n20 END\n");
        let error = run(file.path().to_str().unwrap(), vec![], None).unwrap_err();
        assert!(error.to_string().contains("line 10"));
    }

    #[test]
    fn runtime_errors_propagate() {
        let file = source_file("10 LET a = 1 / 0\n20 END\n");
        let error = run(file.path().to_str().unwrap(), vec![], None).unwrap_err();
        assert!(error.to_string().contains("division by zero"));
    }
}
