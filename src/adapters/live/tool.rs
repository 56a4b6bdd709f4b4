//! Live tool runner using `std::process::Command`.

use std::process::{Command, Stdio};

use tracing::debug;

use crate::error::BoxError;
use crate::ports::tool::{OutputMode, ToolInvocation, ToolOutput, ToolRunner};

/// Live tool runner that spawns real processes.
pub struct LiveToolRunner;

impl ToolRunner for LiveToolRunner {
    fn run(&self, invocation: &ToolInvocation) -> Result<ToolOutput, BoxError> {
        debug!(
            command = %invocation.command_line(),
            dir = %invocation.working_dir.display(),
            "spawning"
        );

        let mut command = Command::new(&invocation.program);
        command.args(&invocation.args).current_dir(&invocation.working_dir);

        match invocation.output {
            OutputMode::Captured => {
                let output = command.stdin(Stdio::null()).output()?;
                Ok(ToolOutput {
                    exit_code: output.status.code().unwrap_or(-1),
                    stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                    stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
                })
            }
            OutputMode::Inherited => {
                let status = command.status()?;
                Ok(ToolOutput { exit_code: status.code().unwrap_or(-1), ..ToolOutput::default() })
            }
        }
    }
}
