use super::args::{BlogCommand, Cli, Commands, ContentCommand, GalleryCommand, NightCommand};
use super::handlers;
use crate::context::CommandContext;
use crate::presentation::ConsoleRenderer;
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    let ctx = CommandContext::resolve(cli.data_dir.as_deref(), cli.content.as_deref())?;
    let renderer = ConsoleRenderer::new(cli.format);

    let Some(command) = cli.command else {
        return handlers::guidance::handle(&ctx, &renderer);
    };

    match command {
        Commands::Browse => handlers::browse::handle(&ctx),

        Commands::Home { view_mode } => handlers::home::handle(&ctx, &renderer, view_mode.resolve()),

        Commands::Blog { command } => match command {
            BlogCommand::List {
                tag,
                search,
                view_mode,
            } => handlers::blog::handle_list(&ctx, &renderer, tag, search, view_mode.resolve()),
            BlogCommand::Show { post_id, view_mode } => {
                handlers::blog::handle_show(&ctx, &renderer, post_id, view_mode.resolve())
            }
        },

        Commands::Gallery { command } => match command {
            GalleryCommand::List {
                tag,
                search,
                view_mode,
            } => handlers::gallery::handle_list(&ctx, &renderer, tag, search, view_mode.resolve()),
            GalleryCommand::Show {
                photo_id,
                view_mode,
            } => handlers::gallery::handle_show(&ctx, &renderer, photo_id, view_mode.resolve()),
        },

        Commands::Night { command } => match command {
            NightCommand::List { search, view_mode } => {
                handlers::night::handle_list(&ctx, &renderer, search, view_mode.resolve())
            }
            NightCommand::Show {
                event_id,
                view_mode,
            } => handlers::night::handle_show(&ctx, &renderer, event_id, view_mode.resolve()),
        },

        Commands::Tags { section, view_mode } => {
            handlers::tags::handle(&ctx, &renderer, section, view_mode.resolve())
        }

        Commands::Content { command } => match command {
            ContentCommand::Check { view_mode } => {
                handlers::content::handle_check(&ctx, &renderer, view_mode.resolve())
            }
            ContentCommand::Export { output } => {
                handlers::content::handle_export(&ctx, &renderer, output)
            }
        },

        Commands::Init { force } => handlers::init::handle(&ctx, &renderer, force),
    }
}
