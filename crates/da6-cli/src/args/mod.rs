// NOTE: Command Organization Rationale
//
// Why namespaced subcommands (not flat)?
// - The sections of the site are the namespaces: blog, gallery, night
// - `blog list` / `blog show` mirrors how visitors move through a
//   section, and keeps --help grouped by section
// - Cross-section commands (home, tags, content, init, browse) stay at
//   the top level because they do not belong to one section

mod commands;
mod common;

pub use commands::*;
pub use common::*;

use crate::types::OutputFormat;
use clap::Parser;

#[derive(Parser)]
#[command(name = "da6")]
#[command(about = "Browse the DA6 portfolio from the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory holding config.toml (defaults to the platform data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    /// Catalog JSON file replacing the embedded content
    #[arg(long, global = true)]
    pub content: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
