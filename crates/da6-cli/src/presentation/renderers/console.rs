use anyhow::Result;
use is_terminal::IsTerminal;
use serde::Serialize;
use std::fmt::Display;

use crate::presentation::formatters::FormatOptions;
use crate::presentation::view_models::{
    CheckViewModel, EventDetailViewModel, EventListViewModel, ExportViewModel, GuidanceViewModel,
    InitViewModel, ModuleListViewModel, PhotoDetailViewModel, PhotoListViewModel,
    PostDetailViewModel, PostListViewModel, TagSummaryViewModel, ViewMode,
};
use crate::presentation::views::{
    CheckReportView, EventDetailView, EventListView, ExportView, GuidanceView, InitView,
    ModuleListView, PhotoDetailView, PhotoListView, PostDetailView, PostListView, TagSummaryView,
};
use crate::types::OutputFormat;
use da6_types::Catalog;

pub struct ConsoleRenderer {
    format: OutputFormat,
}

impl ConsoleRenderer {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Styling is decided here, once: color only when stdout is a
    /// terminal, text budget from the terminal width with a safe
    /// fallback for pipes.
    fn options(&self) -> FormatOptions {
        let width = terminal_size::terminal_size()
            .map(|(terminal_size::Width(w), _)| w as usize)
            .unwrap_or(80);

        FormatOptions {
            enable_color: std::io::stdout().is_terminal(),
            truncate_text: Some(width.saturating_sub(24).clamp(40, 96)),
        }
    }

    fn emit<T: Serialize, V: Display>(&self, model: &T, view: V) -> Result<()> {
        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(model)?),
            OutputFormat::Plain => print!("{}", view),
        }
        Ok(())
    }

    pub fn render_post_list(&self, model: &PostListViewModel, mode: ViewMode) -> Result<()> {
        self.emit(model, PostListView::new(model, mode, self.options()))
    }

    pub fn render_post_detail(&self, model: &PostDetailViewModel, mode: ViewMode) -> Result<()> {
        self.emit(model, PostDetailView::new(model, mode, self.options()))
    }

    pub fn render_photo_list(&self, model: &PhotoListViewModel, mode: ViewMode) -> Result<()> {
        self.emit(model, PhotoListView::new(model, mode, self.options()))
    }

    pub fn render_photo_detail(&self, model: &PhotoDetailViewModel, mode: ViewMode) -> Result<()> {
        self.emit(model, PhotoDetailView::new(model, mode, self.options()))
    }

    pub fn render_event_list(&self, model: &EventListViewModel, mode: ViewMode) -> Result<()> {
        self.emit(model, EventListView::new(model, mode, self.options()))
    }

    pub fn render_event_detail(&self, model: &EventDetailViewModel, mode: ViewMode) -> Result<()> {
        self.emit(model, EventDetailView::new(model, mode, self.options()))
    }

    pub fn render_module_list(&self, model: &ModuleListViewModel, mode: ViewMode) -> Result<()> {
        self.emit(model, ModuleListView::new(model, mode, self.options()))
    }

    pub fn render_tag_summary(&self, model: &TagSummaryViewModel, mode: ViewMode) -> Result<()> {
        self.emit(model, TagSummaryView::new(model, mode))
    }

    pub fn render_check(&self, model: &CheckViewModel, mode: ViewMode) -> Result<()> {
        self.emit(model, CheckReportView::new(model, mode, self.options()))
    }

    pub fn render_export(&self, model: &ExportViewModel) -> Result<()> {
        self.emit(model, ExportView::new(model))
    }

    pub fn render_init(&self, model: &InitViewModel) -> Result<()> {
        self.emit(model, InitView::new(model, self.options()))
    }

    pub fn render_guidance(&self, model: &GuidanceViewModel) -> Result<()> {
        self.emit(model, GuidanceView::new(model, self.options()))
    }

    /// `content export` to stdout: the catalog itself, as JSON, in both
    /// formats. The export IS the data.
    pub fn render_catalog_dump(&self, catalog: &Catalog) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(catalog)?);
        Ok(())
    }
}
