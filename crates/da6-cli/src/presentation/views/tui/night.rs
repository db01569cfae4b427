use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use da6_engine::Carousel;
use da6_types::NightEvent;

use super::night_mood_color;

/// Event wheel. One event is front and center, its neighbors peek in
/// from above and below.
pub(crate) struct WheelView<'a> {
    events: &'a [NightEvent],
    wheel: &'a Carousel,
}

impl<'a> WheelView<'a> {
    pub(crate) fn new(events: &'a [NightEvent], wheel: &'a Carousel) -> Self {
        Self { events, wheel }
    }
}

impl Widget for WheelView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" kingdom of night ")
            .border_style(Style::default().fg(Color::Magenta));
        let inner = block.inner(area);
        block.render(area, buf);

        if self.events.is_empty() {
            Paragraph::new("No events tonight.")
                .style(Style::default().fg(Color::DarkGray))
                .render(inner, buf);
            return;
        }

        let index = self.wheel.index().min(self.events.len() - 1);
        let event = &self.events[index];
        let dim = Style::default().fg(Color::DarkGray);

        let chunks =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(inner);

        let mut lines = Vec::new();
        match index.checked_sub(1).and_then(|i| self.events.get(i)) {
            Some(prev) => lines.push(Line::styled(format!("↑ {}", prev.title), dim)),
            None => lines.push(Line::default()),
        }
        lines.push(Line::default());
        lines.push(Line::from(vec![Span::styled(
            event.title.as_str(),
            Style::default()
                .fg(night_mood_color(event.mood))
                .add_modifier(Modifier::BOLD),
        )]));
        lines.push(Line::from(vec![
            Span::styled(format!("@ {}", event.venue), dim),
            Span::raw("   "),
            Span::styled(event.date.as_str(), dim),
            Span::raw("   "),
            Span::styled(
                event.mood.to_string(),
                Style::default().fg(night_mood_color(event.mood)),
            ),
        ]));
        lines.push(Line::default());
        lines.push(Line::raw(event.description.as_str()));
        lines.push(Line::default());
        match self.events.get(index + 1) {
            Some(next) => lines.push(Line::styled(format!("↓ {}", next.title), dim)),
            None => lines.push(Line::default()),
        }
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(chunks[0], buf);

        let mut footer = vec![Span::styled(
            format!("event {} of {}", index + 1, self.events.len()),
            dim,
        )];
        footer.push(Span::raw("   "));
        for i in 0..self.events.len() {
            if i > 0 {
                footer.push(Span::raw(" "));
            }
            if i == index {
                footer.push(Span::styled("●", Style::default().fg(Color::Magenta)));
            } else {
                footer.push(Span::styled("○", dim));
            }
        }
        Paragraph::new(Line::from(footer)).render(chunks[1], buf);
    }
}
