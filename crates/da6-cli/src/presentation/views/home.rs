use std::fmt;

use owo_colors::OwoColorize;

use crate::presentation::formatters::{text, FormatOptions};
use crate::presentation::view_models::{ModuleListViewModel, ViewMode};

// --------------------------------------------------------
// Module List View (home carousel, flattened)
// --------------------------------------------------------

pub struct ModuleListView<'a> {
    data: &'a ModuleListViewModel,
    mode: ViewMode,
    options: FormatOptions,
}

impl<'a> ModuleListView<'a> {
    pub fn new(data: &'a ModuleListViewModel, mode: ViewMode, options: FormatOptions) -> Self {
        Self {
            data,
            mode,
            options,
        }
    }

    fn render_minimal(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for module in &self.data.modules {
            writeln!(f, "{}", module.id)?;
        }
        Ok(())
    }

    fn render_compact(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.modules.is_empty() {
            writeln!(f, "No modules in the catalog.")?;
            return Ok(());
        }

        for module in &self.data.modules {
            let section = match &module.section {
                Some(name) if self.options.enable_color => format!("[{}]", name.cyan()),
                Some(name) => format!("[{}]", name),
                None => "[?]".to_string(),
            };

            writeln!(
                f,
                "{}.  {}  {}  {}",
                module.position, module.title, module.subtitle, section
            )?;
        }

        Ok(())
    }

    fn render_verbose(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.modules.is_empty() {
            return self.render_compact(f);
        }

        let budget = self.options.truncate_text.unwrap_or(usize::MAX);

        for module in &self.data.modules {
            writeln!(
                f,
                "{}.  {}  {}",
                module.position, module.title, module.subtitle
            )?;
            writeln!(f, "    {}", text::inline(&module.description, budget))?;
            writeln!(
                f,
                "    link: {}  color: {}",
                module.link, module.color
            )?;
            writeln!(f)?;
        }

        Ok(())
    }
}

impl<'a> fmt::Display for ModuleListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.mode {
            ViewMode::Minimal => self.render_minimal(f),
            ViewMode::Compact => self.render_compact(f),
            ViewMode::Verbose => self.render_verbose(f),
        }
    }
}
