//! `mock` task: generate mocks for every package under `internal/`.

use std::path::Path;

use tracing::info;

use super::invoke;
use crate::context::ServiceContext;
use crate::error::Result;
use crate::layout::TaskLayout;
use crate::ports::ToolInvocation;
use crate::walk::walk;

/// Flags passed to `mockery`: every interface, expecter helpers, snake_case file names.
const MOCKERY_ARGS: [&str; 4] = ["--all", "--with-expecter", "--case", "underscore"];

/// Generate mocks in every directory below the internal source tree.
///
/// # Errors
///
/// Stops at the first directory where `mockery` fails, returning a
/// traversal error naming it. Mocks generated before that are kept.
pub fn run(ctx: &ServiceContext, layout: &TaskLayout) -> Result<()> {
    let visited = walk(ctx.fs.as_ref(), &layout.internal_dir(), |dir| generate_mocks(ctx, dir))?;
    info!(packages = visited.len(), "mocks generated");
    Ok(())
}

/// Run `mockery` for the interfaces declared directly in `dir`.
///
/// # Errors
///
/// Returns an error if `mockery` cannot be started or exits non-zero.
pub fn generate_mocks(ctx: &ServiceContext, dir: &Path) -> Result<()> {
    invoke(ctx, &ToolInvocation::new("mockery", MOCKERY_ARGS, dir))?;
    Ok(())
}
