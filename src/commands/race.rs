//! `race` task: race-enabled tests with a coverage profile free of generated code.

use tracing::info;

use super::invoke;
use crate::context::ServiceContext;
use crate::coverage;
use crate::error::Result;
use crate::layout::{TaskLayout, COVERAGE_FILE, GENERATED_MARKER};
use crate::ports::ToolInvocation;

/// Run `go test -race` over `internal/...`, then strip generated-code lines
/// from the coverage profile.
///
/// # Errors
///
/// Returns an error if the tests fail (the profile is then left alone), or
/// if the profile cannot be read or rewritten.
pub fn run(ctx: &ServiceContext, layout: &TaskLayout) -> Result<()> {
    let packages = layout.internal_dir().join("...");
    let invocation = ToolInvocation::new(
        "go",
        [
            "test".to_string(),
            "-race".to_string(),
            "-covermode=atomic".to_string(),
            format!("-coverprofile={COVERAGE_FILE}"),
            packages.display().to_string(),
        ],
        layout.root(),
    );
    invoke(ctx, &invocation)?;

    let profile = layout.coverage_file();
    let removed = coverage::sanitize_file(ctx.fs.as_ref(), &profile, GENERATED_MARKER)?;
    info!(profile = %profile.display(), removed, "coverage profile sanitized");
    Ok(())
}
