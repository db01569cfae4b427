use anyhow::{Result, bail};

use crate::context::CommandContext;
use crate::presentation::presenters::{present_photo_detail, present_photo_list};
use crate::presentation::{ConsoleRenderer, ViewMode};
use da6_engine::{ALL_TAGS, CatalogFilter};

pub fn handle_list(
    ctx: &CommandContext,
    renderer: &ConsoleRenderer,
    tag: Option<String>,
    search: Option<String>,
    mode: ViewMode,
) -> Result<()> {
    let catalog = ctx.catalog()?;
    let search = search.filter(|term| !term.is_empty());
    let tag = tag.filter(|tag| !tag.is_empty() && tag != ALL_TAGS);

    let filter = CatalogFilter::new()
        .search(search.clone().unwrap_or_default())
        .tag(tag.clone().unwrap_or_default());
    let filtered = filter.apply(&catalog.photos);

    let model = present_photo_list(&catalog.photos, &filtered, search, tag);
    renderer.render_photo_list(&model, mode)
}

pub fn handle_show(
    ctx: &CommandContext,
    renderer: &ConsoleRenderer,
    photo_id: String,
    mode: ViewMode,
) -> Result<()> {
    let catalog = ctx.catalog()?;
    let Some(photo) = catalog.photos.iter().find(|photo| photo.id == photo_id) else {
        bail!("no photo with id '{photo_id}' (run `da6 gallery list` to see ids)");
    };
    renderer.render_photo_detail(&present_photo_detail(photo), mode)
}
