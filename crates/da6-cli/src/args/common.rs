use clap::Args;

use crate::presentation::ViewMode;

/// Density flags shared by every listing/detail command. clap's `group`
/// makes them mutually exclusive.
#[derive(Debug, Clone, Default, Args)]
pub struct ViewModeArgs {
    #[arg(long, help = "Ids only, one per line (for pipes)", group = "view_mode")]
    pub quiet: bool,

    #[arg(long, help = "One line per record", group = "view_mode")]
    pub compact: bool,

    #[arg(
        long,
        help = "Every field, including bodies and image urls",
        group = "view_mode"
    )]
    pub verbose: bool,
}

impl ViewModeArgs {
    pub fn resolve(&self) -> ViewMode {
        match (self.quiet, self.compact, self.verbose) {
            (true, _, _) => ViewMode::Minimal,
            (_, true, _) => ViewMode::Compact,
            (_, _, true) => ViewMode::Verbose,
            _ => ViewMode::default(),
        }
    }
}
