use std::fmt;

use owo_colors::OwoColorize;

use crate::presentation::formatters::FormatOptions;
use crate::presentation::view_models::{CheckViewModel, ExportViewModel, InitViewModel, ViewMode};

// --------------------------------------------------------
// Check Report View
// --------------------------------------------------------

pub struct CheckReportView<'a> {
    data: &'a CheckViewModel,
    mode: ViewMode,
    options: FormatOptions,
}

impl<'a> CheckReportView<'a> {
    pub fn new(data: &'a CheckViewModel, mode: ViewMode, options: FormatOptions) -> Self {
        Self {
            data,
            mode,
            options,
        }
    }

    fn render_minimal(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for finding in &self.data.findings {
            writeln!(
                f,
                "{}\t{}\t{}\t{}",
                finding.severity,
                finding.collection,
                finding.record_id.as_deref().unwrap_or("-"),
                finding.message
            )?;
        }
        Ok(())
    }

    fn render_report(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "Catalog: {} ({} records)",
            self.data.source, self.data.record_count
        )?;
        writeln!(f)?;

        if self.data.findings.is_empty() {
            writeln!(f, "✅ no findings")?;
            return Ok(());
        }

        writeln!(
            f,
            "{:<9} {:<10} {:<7} MESSAGE",
            "SEVERITY", "COLLECTION", "RECORD"
        )?;
        writeln!(f, "{}", "-".repeat(72))?;

        for finding in &self.data.findings {
            // Pad before coloring so the escape codes stay out of the width.
            let padded = format!("{:<9}", finding.severity);
            let severity = if self.options.enable_color {
                if finding.severity == "error" {
                    format!("{}", padded.red())
                } else {
                    format!("{}", padded.yellow())
                }
            } else {
                padded
            };

            writeln!(
                f,
                "{} {:<10} {:<7} {}",
                severity,
                finding.collection,
                finding.record_id.as_deref().unwrap_or("-"),
                finding.message
            )?;
        }

        writeln!(f)?;
        writeln!(
            f,
            "{} error(s), {} warning(s)",
            self.data.error_count, self.data.warning_count
        )?;

        Ok(())
    }
}

impl<'a> fmt::Display for CheckReportView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.mode {
            ViewMode::Minimal => self.render_minimal(f),
            ViewMode::Compact | ViewMode::Verbose => self.render_report(f),
        }
    }
}

// --------------------------------------------------------
// Export / Init Views
// --------------------------------------------------------

pub struct ExportView<'a> {
    data: &'a ExportViewModel,
}

impl<'a> ExportView<'a> {
    pub fn new(data: &'a ExportViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for ExportView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "Exported {} records to {}",
            self.data.record_count, self.data.destination
        )
    }
}

pub struct InitView<'a> {
    data: &'a InitViewModel,
    options: FormatOptions,
}

impl<'a> InitView<'a> {
    pub fn new(data: &'a InitViewModel, options: FormatOptions) -> Self {
        Self { data, options }
    }
}

impl<'a> fmt::Display for InitView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.overwritten {
            writeln!(f, "Overwrote config at {}", self.data.config_path)?;
        } else {
            writeln!(f, "Wrote config to {}", self.data.config_path)?;
        }

        if !self.data.suggestions.is_empty() {
            writeln!(f)?;
            if self.options.enable_color {
                writeln!(f, "{}", "💡 Tips:".yellow().bold())?;
            } else {
                writeln!(f, "💡 Tips:")?;
            }
            for tip in &self.data.suggestions {
                write!(f, "  • {}", tip.description)?;
                if self.options.enable_color {
                    writeln!(f, ": {}", tip.command.cyan())?;
                } else {
                    writeln!(f, ": {}", tip.command)?;
                }
            }
        }

        Ok(())
    }
}
