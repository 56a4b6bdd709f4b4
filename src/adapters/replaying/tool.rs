//! Replaying adapter for the `ToolRunner` port.

use std::sync::Mutex;

use super::extract_result;
use crate::cassette::replayer::CassetteReplayer;
use crate::error::BoxError;
use crate::ports::tool::{ToolInvocation, ToolOutput, ToolRunner};

/// Replays recorded tool results from a cassette.
pub struct ReplayingToolRunner {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingToolRunner {
    /// Creates a new replaying runner from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl ToolRunner for ReplayingToolRunner {
    fn run(&self, _invocation: &ToolInvocation) -> Result<ToolOutput, BoxError> {
        let output = {
            let mut replayer = self.replayer.lock().expect("replayer lock poisoned");
            let interaction = replayer.next_interaction("tool", "run");
            interaction.output.clone()
        };
        extract_result(&output, "tool::run")
    }
}
