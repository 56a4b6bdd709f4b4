//! `proto` task: regenerate Go gRPC and message code from `.proto` files.

use std::ffi::OsStr;
use std::path::Path;

use tracing::{debug, info};

use super::invoke;
use crate::context::ServiceContext;
use crate::error::{Error, Result};
use crate::layout::{TaskLayout, PROTO_GROUPS, PROTO_SUFFIX};
use crate::ports::ToolInvocation;

/// Output kinds requested from `protoc` for every definition file.
const OUTPUT_FLAGS: [&str; 2] = ["--go-grpc_out=.", "--go_out=."];

/// Regenerate every definition group.
///
/// # Errors
///
/// Stops at the first group directory that cannot be listed or the first
/// `protoc` run that fails. Files generated before that point are kept.
pub fn run(ctx: &ServiceContext, layout: &TaskLayout) -> Result<()> {
    for group in PROTO_GROUPS {
        let count = generate_group(ctx, layout, group)?;
        info!(group, files = count, "regenerated proto group");
    }
    Ok(())
}

/// Run `protoc` for each definition file of `group`, once per output kind.
///
/// Output is written relative to the task root. Returns the number of
/// definition files processed.
///
/// # Errors
///
/// Returns an error if the group directory cannot be listed, a definition
/// file name is not valid UTF-8, or a `protoc` run fails.
pub fn generate_group(ctx: &ServiceContext, layout: &TaskLayout, group: &str) -> Result<usize> {
    let source_dir = layout.proto_group_dir(group);
    let entries =
        ctx.fs.list_dir(&source_dir).map_err(|e| Error::filesystem("list", &source_dir, e))?;

    let mut count = 0;
    for name in entries.iter().filter(|name| is_definition(name)) {
        debug!(group, file = %name.to_string_lossy(), "generating");
        let Some(name) = name.to_str() else {
            let path = source_dir.join(name);
            return Err(Error::filesystem("read", path, "file name is not valid UTF-8".into()));
        };
        for flag in OUTPUT_FLAGS {
            invoke(ctx, &protoc(&source_dir, flag, name, layout.root()))?;
        }
        count += 1;
    }
    Ok(count)
}

fn is_definition(name: &OsStr) -> bool {
    name.as_encoded_bytes().ends_with(PROTO_SUFFIX.as_bytes())
}

fn protoc(source_dir: &Path, output_flag: &str, file: &str, out_root: &Path) -> ToolInvocation {
    let proto_path = format!("--proto_path={}", source_dir.display());
    ToolInvocation::new("protoc", [proto_path, output_flag.to_string(), file.to_string()], out_root)
}
