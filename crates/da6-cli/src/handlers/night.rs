use anyhow::{Result, bail};

use crate::context::CommandContext;
use crate::presentation::presenters::{present_event_detail, present_event_list};
use crate::presentation::{ConsoleRenderer, ViewMode};

pub fn handle_list(
    ctx: &CommandContext,
    renderer: &ConsoleRenderer,
    search: Option<String>,
    mode: ViewMode,
) -> Result<()> {
    let catalog = ctx.catalog()?;
    let search = search.filter(|term| !term.is_empty());

    let model = present_event_list(&catalog.events, search);
    renderer.render_event_list(&model, mode)
}

pub fn handle_show(
    ctx: &CommandContext,
    renderer: &ConsoleRenderer,
    event_id: String,
    mode: ViewMode,
) -> Result<()> {
    let catalog = ctx.catalog()?;
    let Some(index) = catalog.events.iter().position(|event| event.id == event_id) else {
        bail!("no event with id '{event_id}' (run `da6 night list` to see ids)");
    };
    renderer.render_event_detail(&present_event_detail(&catalog.events, index), mode)
}
