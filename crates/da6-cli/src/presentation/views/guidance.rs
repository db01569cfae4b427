use std::fmt;

use owo_colors::OwoColorize;

use crate::presentation::formatters::FormatOptions;
use crate::presentation::view_models::GuidanceViewModel;

/// What `da6` with no subcommand prints: a short orientation, never an
/// error.
pub struct GuidanceView<'a> {
    data: &'a GuidanceViewModel,
    options: FormatOptions,
}

impl<'a> GuidanceView<'a> {
    pub fn new(data: &'a GuidanceViewModel, options: FormatOptions) -> Self {
        Self { data, options }
    }
}

impl<'a> fmt::Display for GuidanceView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "da6 - terminal portfolio browser")?;
        writeln!(f)?;
        writeln!(
            f,
            "Catalog: {} ({} posts, {} photos, {} events, {} modules)",
            self.data.source,
            self.data.post_count,
            self.data.photo_count,
            self.data.event_count,
            self.data.module_count
        )?;
        writeln!(f)?;

        writeln!(f, "Quick commands:")?;
        for tip in &self.data.suggestions {
            // Pad before coloring so the escape codes stay out of the width.
            let padded = format!("{:<34}", tip.command);
            let painted = if self.options.enable_color {
                format!("{}", padded.cyan())
            } else {
                padded
            };
            writeln!(f, "  {}# {}", painted, tip.description)?;
        }

        writeln!(f)?;
        writeln!(f, "For more commands:")?;
        writeln!(f, "  da6 --help")?;

        Ok(())
    }
}
