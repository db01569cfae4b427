use std::fmt;

use owo_colors::OwoColorize;

use crate::presentation::formatters::{text, FormatOptions};
use crate::presentation::view_models::{PhotoDetailViewModel, PhotoListViewModel, ViewMode};

// --------------------------------------------------------
// Photo List View
// --------------------------------------------------------

pub struct PhotoListView<'a> {
    data: &'a PhotoListViewModel,
    mode: ViewMode,
    options: FormatOptions,
}

impl<'a> PhotoListView<'a> {
    pub fn new(data: &'a PhotoListViewModel, mode: ViewMode, options: FormatOptions) -> Self {
        Self {
            data,
            mode,
            options,
        }
    }

    fn render_minimal(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for photo in &self.data.photos {
            writeln!(f, "{}", photo.id)?;
        }
        Ok(())
    }

    fn render_compact(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.photos.is_empty() {
            if self.data.applied.is_empty() {
                writeln!(f, "No photos in the catalog.")?;
            } else {
                writeln!(f, "No photos match.")?;
            }
            self.show_filter_info(f)?;
            return Ok(());
        }

        let budget = self.options.truncate_text.unwrap_or(usize::MAX);

        for photo in &self.data.photos {
            let date = if self.options.enable_color {
                format!("{}", photo.date.bright_black())
            } else {
                photo.date.clone()
            };

            writeln!(
                f,
                "{:>3}  {}  ♥ {:>3}  {}",
                photo.id,
                date,
                photo.likes,
                text::inline(&photo.caption, budget)
            )?;
        }

        writeln!(f)?;
        writeln!(
            f,
            "{} of {} photos",
            self.data.photos.len(),
            self.data.total
        )?;
        self.show_filter_info(f)?;

        Ok(())
    }

    fn render_verbose(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.photos.is_empty() {
            return self.render_compact(f);
        }

        for photo in &self.data.photos {
            let date = if self.options.enable_color {
                format!("{}", photo.date.bright_black())
            } else {
                photo.date.clone()
            };

            writeln!(f, "{:>3}  {}  {}", photo.id, date, photo.caption)?;

            let tags = photo
                .tags
                .iter()
                .map(|tag| {
                    if self.options.enable_color {
                        format!("[{}]", tag.cyan())
                    } else {
                        format!("[{}]", tag)
                    }
                })
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(
                f,
                "     {}  ♥ {}  {} comments",
                tags, photo.likes, photo.comments
            )?;
            writeln!(f)?;
        }

        writeln!(
            f,
            "{} of {} photos",
            self.data.photos.len(),
            self.data.total
        )?;
        if !self.data.available_tags.is_empty() {
            writeln!(f, "Tags: {}", self.data.available_tags.join(", "))?;
        }
        self.show_filter_info(f)?;

        Ok(())
    }

    fn show_filter_info(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.applied.is_empty() {
            return Ok(());
        }

        writeln!(f)?;
        writeln!(f, "Filters applied:")?;
        if let Some(ref search) = self.data.applied.search {
            writeln!(f, "  Search: {}", search)?;
        }
        if let Some(ref tag) = self.data.applied.tag {
            writeln!(f, "  Tag: {}", tag)?;
        }
        Ok(())
    }
}

impl<'a> fmt::Display for PhotoListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.mode {
            ViewMode::Minimal => self.render_minimal(f),
            ViewMode::Compact => self.render_compact(f),
            ViewMode::Verbose => self.render_verbose(f),
        }
    }
}

// --------------------------------------------------------
// Photo Detail View (lightbox)
// --------------------------------------------------------

pub struct PhotoDetailView<'a> {
    data: &'a PhotoDetailViewModel,
    mode: ViewMode,
    options: FormatOptions,
}

impl<'a> PhotoDetailView<'a> {
    pub fn new(data: &'a PhotoDetailViewModel, mode: ViewMode, options: FormatOptions) -> Self {
        Self {
            data,
            mode,
            options,
        }
    }

    fn render_full(&self, f: &mut fmt::Formatter, with_extras: bool) -> fmt::Result {
        let caption = if self.options.enable_color {
            format!("{}", self.data.caption.bold())
        } else {
            self.data.caption.clone()
        };

        writeln!(f, "{}", caption)?;
        writeln!(f, "{}", self.data.date)?;

        if !self.data.tags.is_empty() {
            let tags = self
                .data
                .tags
                .iter()
                .map(|tag| {
                    if self.options.enable_color {
                        format!("[{}]", tag.cyan())
                    } else {
                        format!("[{}]", tag)
                    }
                })
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "{}", tags)?;
        }

        writeln!(f)?;
        writeln!(f, "♥ {}  {} comments", self.data.likes, self.data.comments)?;

        if with_extras {
            writeln!(f, "Image: {}", self.data.image)?;
        }

        Ok(())
    }
}

impl<'a> fmt::Display for PhotoDetailView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.mode {
            ViewMode::Minimal => writeln!(f, "{}", self.data.id),
            ViewMode::Compact => self.render_full(f, false),
            ViewMode::Verbose => self.render_full(f, true),
        }
    }
}
