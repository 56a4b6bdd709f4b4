//! Scripted tool runner for unit tests.

use std::sync::{Arc, Mutex};

use crate::error::BoxError;
use crate::ports::tool::{ToolInvocation, ToolOutput, ToolRunner};

/// Shared view of the invocations a [`ScriptedToolRunner`] has seen.
pub(crate) type CallLog = Arc<Mutex<Vec<ToolInvocation>>>;

/// Records every invocation and fails the ones a predicate selects.
pub(crate) struct ScriptedToolRunner {
    calls: CallLog,
    fail_when: Box<dyn Fn(&ToolInvocation) -> bool + Send + Sync>,
}

impl ScriptedToolRunner {
    /// A runner on which every invocation succeeds.
    pub(crate) fn succeeding() -> Self {
        Self::failing_when(|_| false)
    }

    /// A runner that reports exit code 1 for invocations matching `pred`.
    pub(crate) fn failing_when(
        pred: impl Fn(&ToolInvocation) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self { calls: CallLog::default(), fail_when: Box::new(pred) }
    }

    /// Handle to the call log that outlives boxing the runner.
    pub(crate) fn log(&self) -> CallLog {
        Arc::clone(&self.calls)
    }
}

impl ToolRunner for ScriptedToolRunner {
    fn run(&self, invocation: &ToolInvocation) -> Result<ToolOutput, BoxError> {
        self.calls.lock().unwrap().push(invocation.clone());
        if (self.fail_when)(invocation) {
            return Ok(ToolOutput {
                exit_code: 1,
                stdout: String::new(),
                stderr: format!("{}: scripted failure", invocation.program),
            });
        }
        Ok(ToolOutput::default())
    }
}
