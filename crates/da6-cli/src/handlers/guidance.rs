use anyhow::Result;

use crate::context::CommandContext;
use crate::presentation::ConsoleRenderer;
use crate::presentation::presenters::present_guidance;

/// Bare `da6` with no subcommand: a short orientation instead of an
/// error, in the spirit of a landing page.
pub fn handle(ctx: &CommandContext, renderer: &ConsoleRenderer) -> Result<()> {
    let catalog = ctx.catalog()?;
    renderer.render_guidance(&present_guidance(ctx.source(), catalog))
}
