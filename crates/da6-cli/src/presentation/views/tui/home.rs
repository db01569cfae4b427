use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use da6_engine::Rotation;
use da6_types::HomeModule;

use super::accent_color;

/// One module card at a time, the way the landing page rotates through
/// its tiles.
pub(crate) struct HomeView<'a> {
    modules: &'a [HomeModule],
    rotation: &'a Rotation,
    /// Seconds until the rotation advances, `None` when autoplay is off.
    next_in: Option<u64>,
}

impl<'a> HomeView<'a> {
    pub(crate) fn new(
        modules: &'a [HomeModule],
        rotation: &'a Rotation,
        next_in: Option<u64>,
    ) -> Self {
        Self {
            modules,
            rotation,
            next_in,
        }
    }
}

impl Widget for HomeView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL).title(" da6 ");
        let inner = block.inner(area);
        block.render(area, buf);

        if self.modules.is_empty() {
            Paragraph::new("The catalog has no home modules.")
                .style(Style::default().fg(Color::DarkGray))
                .render(inner, buf);
            return;
        }

        let index = self.rotation.index().min(self.modules.len() - 1);
        let module = &self.modules[index];
        let accent = accent_color(&module.color);

        let chunks = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(2),
        ])
        .split(inner);

        let header = vec![
            Line::from(Span::styled(
                module.title.as_str(),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                module.subtitle.as_str(),
                Style::default().fg(Color::DarkGray),
            )),
            Line::default(),
        ];
        Paragraph::new(header).render(chunks[0], buf);

        Paragraph::new(module.description.as_str())
            .wrap(Wrap { trim: true })
            .render(chunks[1], buf);

        let mut dots: Vec<Span> = Vec::new();
        for i in 0..self.modules.len() {
            if i > 0 {
                dots.push(Span::raw(" "));
            }
            if i == index {
                dots.push(Span::styled("●", Style::default().fg(accent)));
            } else {
                dots.push(Span::styled("○", Style::default().fg(Color::DarkGray)));
            }
        }
        let autoplay = match self.next_in {
            Some(secs) => format!("   autoplay: next in {secs}s"),
            None => "   autoplay off".to_string(),
        };
        dots.push(Span::styled(autoplay, Style::default().fg(Color::DarkGray)));

        let open_hint = match module.section() {
            Some(section) => format!("Enter opens {section}"),
            None => "this module has no linked screen".to_string(),
        };
        let footer = vec![
            Line::from(dots),
            Line::from(Span::styled(
                open_hint,
                Style::default().fg(Color::DarkGray),
            )),
        ];
        Paragraph::new(footer).render(chunks[2], buf);
    }
}
