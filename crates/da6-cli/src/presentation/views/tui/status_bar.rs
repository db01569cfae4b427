use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Key hints for the active screen, plus an optional state readout
/// (music/sound toggles, input-mode marker).
pub(crate) struct StatusBarView<'a> {
    hints: &'a [(&'a str, &'a str)],
    status: Option<String>,
}

impl<'a> StatusBarView<'a> {
    pub(crate) fn new(hints: &'a [(&'a str, &'a str)], status: Option<String>) -> Self {
        Self { hints, status }
    }
}

impl Widget for StatusBarView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::TOP);
        let inner = block.inner(area);
        block.render(area, buf);

        let mut spans = Vec::new();
        for (i, (key, action)) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(
                format!("[{key}]"),
                Style::default().fg(Color::Yellow),
            ));
            spans.push(Span::raw(format!(" {action}")));
        }
        if let Some(status) = self.status {
            spans.push(Span::raw("   "));
            spans.push(Span::styled(status, Style::default().fg(Color::Cyan)));
        }
        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}
