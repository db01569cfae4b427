use anyhow::{Result, bail};

use crate::context::CommandContext;
use crate::presentation::presenters::{present_post_detail, present_post_list};
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

    // "all" and "" mean unfiltered; drop them so the summary only shows
    // filters that actually narrowed anything.
    let search = search.filter(|term| !term.is_empty());
    let tag = tag.filter(|tag| !tag.is_empty() && tag != ALL_TAGS);

    let filter = CatalogFilter::new()
        .search(search.clone().unwrap_or_default())
        .tag(tag.clone().unwrap_or_default());
    let filtered = filter.apply(&catalog.posts);

    let model = present_post_list(&catalog.posts, &filtered, search, tag);
    renderer.render_post_list(&model, mode)
}

pub fn handle_show(
    ctx: &CommandContext,
    renderer: &ConsoleRenderer,
    post_id: String,
    mode: ViewMode,
) -> Result<()> {
    let catalog = ctx.catalog()?;
    let Some(post) = catalog.posts.iter().find(|post| post.id == post_id) else {
        bail!("no post with id '{post_id}' (run `da6 blog list` to see ids)");
    };
    renderer.render_post_detail(&present_post_detail(post), mode)
}
