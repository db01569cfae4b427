use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};

use crate::context::CommandContext;
use crate::presentation::presenters::{present_check, present_export};
use crate::presentation::{ConsoleRenderer, ViewMode};
use da6_content::check_catalog;

pub fn handle_check(ctx: &CommandContext, renderer: &ConsoleRenderer, mode: ViewMode) -> Result<()> {
    let catalog = ctx.catalog()?;
    let report = check_catalog(catalog);
    renderer.render_check(&present_check(ctx.source(), catalog, &report), mode)?;

    // Findings were already printed; the exit code is the contract for
    // scripted callers.
    if report.has_errors() {
        bail!("catalog check found {} error(s)", report.error_count());
    }
    Ok(())
}

pub fn handle_export(
    ctx: &CommandContext,
    renderer: &ConsoleRenderer,
    output: Option<PathBuf>,
) -> Result<()> {
    let catalog = ctx.catalog()?;
    match output {
        Some(path) => {
            let json = serde_json::to_string_pretty(catalog)?;
            fs::write(&path, json)
                .with_context(|| format!("failed to write {}", path.display()))?;
            renderer.render_export(&present_export(&path, catalog))
        }
        None => renderer.render_catalog_dump(catalog),
    }
}
