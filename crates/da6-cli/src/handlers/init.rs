use anyhow::{Result, bail};

use crate::context::CommandContext;
use crate::presentation::ConsoleRenderer;
use crate::presentation::presenters::present_init;
use da6_content::Config;

pub fn handle(ctx: &CommandContext, renderer: &ConsoleRenderer, force: bool) -> Result<()> {
    let path = Config::path_in(ctx.data_dir());
    let existed = path.exists();
    if existed && !force {
        bail!(
            "config already exists at {} (use --force to overwrite)",
            path.display()
        );
    }

    Config::default().save_to(&path)?;
    renderer.render_init(&present_init(&path, existed))
}
