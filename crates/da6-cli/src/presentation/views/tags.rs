use std::fmt;

use crate::presentation::view_models::{TagSummaryViewModel, ViewMode};

pub struct TagSummaryView<'a> {
    data: &'a TagSummaryViewModel,
    mode: ViewMode,
}

impl<'a> TagSummaryView<'a> {
    pub fn new(data: &'a TagSummaryViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }
}

impl<'a> fmt::Display for TagSummaryView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.tags.is_empty() {
            if self.mode != ViewMode::Minimal {
                writeln!(f, "No tags in section '{}'.", self.data.section)?;
            }
            return Ok(());
        }

        for tag in &self.data.tags {
            writeln!(f, "{}", tag)?;
        }

        if self.mode == ViewMode::Verbose {
            writeln!(f)?;
            writeln!(
                f,
                "{} tags from section '{}'",
                self.data.total, self.data.section
            )?;
        }

        Ok(())
    }
}
