use std::io::Write;

use anyhow::Result;

use super::CommandContext;
use crate::ui::{json, stdout_supports_unicode, views};

pub fn cmd_lists(ctx: &CommandContext) -> Result<()> {
    let store = ctx.load_store()?;
    let mut out = std::io::stdout().lock();

    if ctx.json {
        for list in store.lists() {
            json::write_event(
                &mut out,
                &serde_json::json!({
                    "event": "list",
                    "name": list.name(),
                    "entries": list.entries(),
                    "references": list.references().collect::<Vec<_>>(),
                    "patterns": list.pattern_count(),
                }),
            )?;
        }
        json::write_event(
            &mut out,
            &serde_json::json!({
                "event": "complete",
                "command": "lists",
                "lists": store.len(),
                "manifest": ctx.manifest_path.display().to_string(),
            }),
        )?;
    } else {
        write!(out, "{}", views::render_lists(&store, stdout_supports_unicode()))?;
    }

    out.flush()?;
    Ok(())
}
