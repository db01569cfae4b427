use super::common::ViewModeArgs;
use crate::types::SectionFilter;
use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Open the full-screen browser (needs a terminal)")]
    Browse,

    #[command(about = "List the home screen modules in carousel order")]
    Home {
        #[command(flatten)]
        view_mode: ViewModeArgs,
    },

    #[command(about = "Read the blog")]
    Blog {
        #[command(subcommand)]
        command: BlogCommand,
    },

    #[command(about = "Flip through the photo gallery")]
    Gallery {
        #[command(subcommand)]
        command: GalleryCommand,
    },

    #[command(about = "Tour the night event archive")]
    Night {
        #[command(subcommand)]
        command: NightCommand,
    },

    #[command(about = "List distinct tags in first-seen order")]
    Tags {
        #[arg(long, default_value = "all")]
        section: SectionFilter,

        #[command(flatten)]
        view_mode: ViewModeArgs,
    },

    #[command(about = "Inspect or export the active catalog")]
    Content {
        #[command(subcommand)]
        command: ContentCommand,
    },

    #[command(about = "Write a starter config.toml into the data directory")]
    Init {
        #[arg(long, help = "Overwrite an existing config")]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum BlogCommand {
    #[command(about = "List posts, newest first as authored")]
    List {
        #[arg(long, help = "Keep only posts carrying this exact tag")]
        tag: Option<String>,

        #[arg(long, help = "Keep only posts whose title or excerpt contains TEXT")]
        search: Option<String>,

        #[command(flatten)]
        view_mode: ViewModeArgs,
    },

    #[command(about = "Show one post in full")]
    Show {
        post_id: String,

        #[command(flatten)]
        view_mode: ViewModeArgs,
    },
}

#[derive(Subcommand)]
pub enum GalleryCommand {
    #[command(about = "List photos")]
    List {
        #[arg(long, help = "Keep only photos carrying this exact tag")]
        tag: Option<String>,

        #[arg(long, help = "Keep only photos whose caption contains TEXT")]
        search: Option<String>,

        #[command(flatten)]
        view_mode: ViewModeArgs,
    },

    #[command(about = "Show one photo in full")]
    Show {
        photo_id: String,

        #[command(flatten)]
        view_mode: ViewModeArgs,
    },
}

#[derive(Subcommand)]
pub enum NightCommand {
    #[command(about = "List events in wheel order with positions")]
    List {
        #[arg(long, help = "Keep only events whose title or description contains TEXT")]
        search: Option<String>,

        #[command(flatten)]
        view_mode: ViewModeArgs,
    },

    #[command(about = "Show one event in full")]
    Show {
        event_id: String,

        #[command(flatten)]
        view_mode: ViewModeArgs,
    },
}

#[derive(Subcommand)]
pub enum ContentCommand {
    #[command(about = "Validate the active catalog against its invariants")]
    Check {
        #[command(flatten)]
        view_mode: ViewModeArgs,
    },

    #[command(about = "Write the active catalog as JSON")]
    Export {
        #[arg(long, help = "Destination file (stdout when omitted)")]
        output: Option<PathBuf>,
    },
}
