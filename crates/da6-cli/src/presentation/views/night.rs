use std::fmt;

use owo_colors::OwoColorize;

use crate::presentation::formatters::FormatOptions;
use crate::presentation::view_models::{EventDetailViewModel, EventListViewModel, ViewMode};

// --------------------------------------------------------
// Event List View (the wheel, flattened)
// --------------------------------------------------------

pub struct EventListView<'a> {
    data: &'a EventListViewModel,
    mode: ViewMode,
    options: FormatOptions,
}

impl<'a> EventListView<'a> {
    pub fn new(data: &'a EventListViewModel, mode: ViewMode, options: FormatOptions) -> Self {
        Self {
            data,
            mode,
            options,
        }
    }

    fn render_minimal(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for event in &self.data.events {
            writeln!(f, "{}", event.id)?;
        }
        Ok(())
    }

    fn render_compact(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.events.is_empty() {
            if self.data.applied.is_empty() {
                writeln!(f, "No events in the catalog.")?;
            } else {
                writeln!(f, "No events match.")?;
            }
            self.show_filter_info(f)?;
            return Ok(());
        }

        for event in &self.data.events {
            let date = if self.options.enable_color {
                format!("{}", event.date.bright_black())
            } else {
                event.date.clone()
            };

            writeln!(
                f,
                "{:>2}.  {}  {}  @ {}",
                event.position, date, event.title, event.venue
            )?;
        }

        writeln!(f)?;
        writeln!(
            f,
            "{} of {} events",
            self.data.events.len(),
            self.data.total
        )?;
        self.show_filter_info(f)?;

        Ok(())
    }

    fn render_verbose(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.events.is_empty() {
            return self.render_compact(f);
        }

        for event in &self.data.events {
            let date = if self.options.enable_color {
                format!("{}", event.date.bright_black())
            } else {
                event.date.clone()
            };

            writeln!(
                f,
                "{:>2}.  {}  {}  @ {}  mood: {}",
                event.position, date, event.title, event.venue, event.mood
            )?;
        }

        writeln!(f)?;
        writeln!(
            f,
            "{} of {} events",
            self.data.events.len(),
            self.data.total
        )?;
        self.show_filter_info(f)?;

        Ok(())
    }

    fn show_filter_info(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(ref search) = self.data.applied.search {
            writeln!(f)?;
            writeln!(f, "Filters applied:")?;
            writeln!(f, "  Search: {}", search)?;
        }
        Ok(())
    }
}

impl<'a> fmt::Display for EventListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.mode {
            ViewMode::Minimal => self.render_minimal(f),
            ViewMode::Compact => self.render_compact(f),
            ViewMode::Verbose => self.render_verbose(f),
        }
    }
}

// --------------------------------------------------------
// Event Detail View
// --------------------------------------------------------

pub struct EventDetailView<'a> {
    data: &'a EventDetailViewModel,
    mode: ViewMode,
    options: FormatOptions,
}

impl<'a> EventDetailView<'a> {
    pub fn new(data: &'a EventDetailViewModel, mode: ViewMode, options: FormatOptions) -> Self {
        Self {
            data,
            mode,
            options,
        }
    }

    fn render_full(&self, f: &mut fmt::Formatter, with_extras: bool) -> fmt::Result {
        let title = if self.options.enable_color {
            format!("{}", self.data.title.bold())
        } else {
            self.data.title.clone()
        };

        writeln!(f, "{}", title)?;
        writeln!(
            f,
            "{} · {} · mood: {}",
            self.data.venue, self.data.date, self.data.mood
        )?;
        writeln!(f)?;

        writeln!(f, "{}", self.data.description)?;
        writeln!(f)?;
        writeln!(f, "event {} of {}", self.data.position, self.data.total)?;

        if with_extras {
            writeln!(f, "Image: {}", self.data.image)?;
        }

        Ok(())
    }
}

impl<'a> fmt::Display for EventDetailView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.mode {
            ViewMode::Minimal => writeln!(f, "{}", self.data.id),
            ViewMode::Compact => self.render_full(f, false),
            ViewMode::Verbose => self.render_full(f, true),
        }
    }
}
