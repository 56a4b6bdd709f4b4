//! Task dispatch and handlers.

pub mod mock;
pub mod proto;
pub mod race;
pub mod start;

use tracing::{debug, info};

use crate::cli::Task;
use crate::context::ServiceContext;
use crate::error::{Error, Result, TaskError};
use crate::layout::TaskLayout;
use crate::ports::{ToolInvocation, ToolOutput};

/// Dispatch a parsed task to its handler, rooted at the current directory.
///
/// # Errors
///
/// Returns an error string if the task root cannot be determined or the
/// task fails.
pub fn dispatch(task: Task) -> std::result::Result<(), String> {
    let layout = TaskLayout::from_current_dir()
        .map_err(|e| format!("{task}: could not determine task root: {e}"))?;
    run_task(task, &ServiceContext::live(), &layout).map_err(|e| e.to_string())
}

/// Run one task against `ctx` with paths taken from `layout`.
///
/// # Errors
///
/// Returns the first failing step, wrapped with the task's name.
pub fn run_task(
    task: Task,
    ctx: &ServiceContext,
    layout: &TaskLayout,
) -> std::result::Result<(), TaskError> {
    info!(%task, root = %layout.root().display(), "running task");
    let result = match task {
        Task::Start => start::run(ctx, layout),
        Task::Proto => proto::run(ctx, layout),
        Task::Race => race::run(ctx, layout),
        Task::Mock => mock::run(ctx, layout),
    };
    match result {
        Ok(()) => {
            info!(%task, "task finished");
            Ok(())
        }
        Err(source) => Err(TaskError::new(task, source)),
    }
}

/// Run an external tool, turning a non-zero exit into [`Error::ExternalTool`].
pub(crate) fn invoke(ctx: &ServiceContext, invocation: &ToolInvocation) -> Result<ToolOutput> {
    debug!(
        command = %invocation.command_line(),
        dir = %invocation.working_dir.display(),
        "invoking tool"
    );
    let output = ctx
        .tool
        .run(invocation)
        .map_err(|source| Error::Spawn { program: invocation.program.clone(), source })?;

    if !output.success() {
        return Err(Error::ExternalTool {
            program: invocation.program.clone(),
            args: invocation.args.clone(),
            exit_code: output.exit_code,
            stderr: output.stderr,
        });
    }
    Ok(output)
}
