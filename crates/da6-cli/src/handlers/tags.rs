use anyhow::Result;

use crate::context::CommandContext;
use crate::presentation::presenters::present_tag_summary;
use crate::presentation::{ConsoleRenderer, ViewMode};
use crate::types::SectionFilter;

pub fn handle(
    ctx: &CommandContext,
    renderer: &ConsoleRenderer,
    section: SectionFilter,
    mode: ViewMode,
) -> Result<()> {
    let catalog = ctx.catalog()?;
    renderer.render_tag_summary(&present_tag_summary(catalog, section), mode)
}
