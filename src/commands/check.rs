use std::io::{self, Write};
use std::path::Path;

use anyhow::{bail, Result};

use filesets::{CheckResult, CheckUseCase, ManifestStore};

use super::CommandContext;
use crate::ui::{json, stdout_supports_unicode, views};

pub fn cmd_check(ctx: &CommandContext) -> Result<()> {
    let store = ctx.load_store()?;
    let mut out = std::io::stdout().lock();

    let result = if ctx.json {
        write_json(&mut out, &store, &ctx.manifest_path)?
    } else {
        let result = CheckUseCase::new(&store).execute();
        write!(out, "{}", views::render_check(&result, stdout_supports_unicode()))?;
        result
    };
    out.flush()?;

    let issues = result.issues().len();
    if issues > 0 {
        bail!(
            "{} resolution issue(s) in {}",
            issues,
            ctx.manifest_path.display()
        );
    }
    Ok(())
}

/// Stream one `list` event per list between `start` and `complete`.
///
/// The first failed write stops the stream; `complete` is only written when
/// every list event made it out.
fn write_json(
    out: &mut impl Write,
    store: &ManifestStore,
    manifest: &Path,
) -> io::Result<CheckResult> {
    json::write_event(
        out,
        &serde_json::json!({
            "event": "start",
            "command": "check",
            "manifest": manifest.display().to_string(),
        }),
    )?;

    let mut write_error: Option<io::Error> = None;
    let result = CheckUseCase::new(store).execute_with_callback(|report| {
        if write_error.is_none() {
            if let Err(e) = json::write_tagged(out, "list", report) {
                write_error = Some(e);
            }
        }
    });
    if let Some(e) = write_error {
        return Err(e);
    }

    json::write_event(
        out,
        &serde_json::json!({
            "event": "complete",
            "command": "check",
            "lists": result.lists.len(),
            "roots": result.roots,
            "issues": result.issues().len(),
            "success": result.is_clean(),
        }),
    )?;
    Ok(result)
}
