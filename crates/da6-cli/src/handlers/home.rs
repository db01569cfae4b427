use anyhow::Result;

use crate::context::CommandContext;
use crate::presentation::presenters::present_module_list;
use crate::presentation::{ConsoleRenderer, ViewMode};

pub fn handle(ctx: &CommandContext, renderer: &ConsoleRenderer, mode: ViewMode) -> Result<()> {
    let catalog = ctx.catalog()?;
    renderer.render_module_list(&present_module_list(&catalog.modules), mode)
}
