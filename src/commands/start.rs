//! `start` task: run the vinyl server in the foreground.

use tracing::info;

use super::invoke;
use crate::context::ServiceContext;
use crate::error::Result;
use crate::layout::TaskLayout;
use crate::ports::ToolInvocation;

/// Run `go run main.go` from the server directory, streaming its output.
///
/// Blocks until the server exits.
///
/// # Errors
///
/// Returns an error if `go` cannot be started or exits non-zero.
pub fn run(ctx: &ServiceContext, layout: &TaskLayout) -> Result<()> {
    let server_dir = layout.server_dir();
    info!(dir = %server_dir.display(), "starting server");

    let invocation = ToolInvocation::new("go", ["run", "main.go"], &server_dir).inherit_output();
    invoke(ctx, &invocation)?;
    Ok(())
}
