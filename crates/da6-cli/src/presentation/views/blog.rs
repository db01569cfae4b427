use std::fmt;

use owo_colors::OwoColorize;

use crate::presentation::formatters::{text, FormatOptions};
use crate::presentation::view_models::{PostDetailViewModel, PostListViewModel, ViewMode};

// --------------------------------------------------------
// Post List View
// --------------------------------------------------------

pub struct PostListView<'a> {
    data: &'a PostListViewModel,
    mode: ViewMode,
    options: FormatOptions,
}

impl<'a> PostListView<'a> {
    pub fn new(data: &'a PostListViewModel, mode: ViewMode, options: FormatOptions) -> Self {
        Self {
            data,
            mode,
            options,
        }
    }

    fn render_minimal(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for post in &self.data.posts {
            writeln!(f, "{}", post.id)?;
        }
        Ok(())
    }

    fn render_compact(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.posts.is_empty() {
            if self.data.applied.is_empty() {
                writeln!(f, "No posts in the catalog.")?;
            } else {
                writeln!(f, "No posts match.")?;
            }
            self.show_filter_info(f)?;
            return Ok(());
        }

        for post in &self.data.posts {
            let date = if self.options.enable_color {
                format!("{}", post.date.bright_black())
            } else {
                post.date.clone()
            };

            writeln!(
                f,
                "{:>3}  {}  {:>6}  {}",
                post.id, date, post.read_time, post.title
            )?;
        }

        writeln!(f)?;
        writeln!(f, "{} of {} posts", self.data.posts.len(), self.data.total)?;
        self.show_filter_info(f)?;

        Ok(())
    }

    fn render_verbose(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.posts.is_empty() {
            return self.render_compact(f);
        }

        let budget = self.options.truncate_text.unwrap_or(usize::MAX);

        for post in &self.data.posts {
            let date = if self.options.enable_color {
                format!("{}", post.date.bright_black())
            } else {
                post.date.clone()
            };

            writeln!(
                f,
                "{:>3}  {}  {:>6}  {}",
                post.id, date, post.read_time, post.title
            )?;
            writeln!(f, "     {}", text::inline(&post.excerpt, budget))?;

            let tags = post
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
                "     {}  ♥ {}  {} comments  mood: {}",
                tags, post.likes, post.comments, post.mood
            )?;
            writeln!(f)?;
        }

        writeln!(f, "{} of {} posts", self.data.posts.len(), self.data.total)?;
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

impl<'a> fmt::Display for PostListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.mode {
            ViewMode::Minimal => self.render_minimal(f),
            ViewMode::Compact => self.render_compact(f),
            ViewMode::Verbose => self.render_verbose(f),
        }
    }
}

// --------------------------------------------------------
// Post Detail View
// --------------------------------------------------------

pub struct PostDetailView<'a> {
    data: &'a PostDetailViewModel,
    mode: ViewMode,
    options: FormatOptions,
}

impl<'a> PostDetailView<'a> {
    pub fn new(data: &'a PostDetailViewModel, mode: ViewMode, options: FormatOptions) -> Self {
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
            self.data.date, self.data.read_time, self.data.mood
        )?;

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

        if with_extras {
            writeln!(f)?;
            let excerpt = if self.options.enable_color {
                format!("{}", self.data.excerpt.bright_black())
            } else {
                self.data.excerpt.clone()
            };
            writeln!(f, "{}", excerpt)?;
        }

        writeln!(f)?;
        writeln!(f, "{}", self.data.content)?;
        writeln!(f)?;
        writeln!(f, "♥ {}  {} comments", self.data.likes, self.data.comments)?;

        if with_extras {
            writeln!(f, "Image: {}", self.data.image)?;
        }

        Ok(())
    }
}

impl<'a> fmt::Display for PostDetailView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.mode {
            ViewMode::Minimal => writeln!(f, "{}", self.data.id),
            ViewMode::Compact => self.render_full(f, false),
            ViewMode::Verbose => self.render_full(f, true),
        }
    }
}
