use anyhow::{Result, bail};
use is_terminal::IsTerminal;

use crate::context::CommandContext;
use crate::presentation::renderers::TuiRenderer;

pub fn handle(ctx: &CommandContext) -> Result<()> {
    if !std::io::stdout().is_terminal() {
        bail!("browse needs a terminal (stdout is not a TTY)");
    }

    let catalog = ctx.catalog()?.clone();
    TuiRenderer::new(catalog, &ctx.config().playback).run()
}
