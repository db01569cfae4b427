use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, StatefulWidget, Widget, Wrap},
};

use da6_types::Photo;

use crate::presentation::renderers::tui::BrowseState;

use super::blog::{search_line, tag_line, tags_line};

/// Filterable photo list. Same chrome as the post browser.
pub(crate) struct PhotoBrowseView<'a> {
    photos: &'a [&'a Photo],
    state: &'a BrowseState,
    tag_options: &'a [String],
}

impl<'a> PhotoBrowseView<'a> {
    pub(crate) fn new(
        photos: &'a [&'a Photo],
        state: &'a BrowseState,
        tag_options: &'a [String],
    ) -> Self {
        Self {
            photos,
            state,
            tag_options,
        }
    }
}

impl Widget for PhotoBrowseView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" human collection ");
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .split(inner);

        Paragraph::new(search_line(self.state)).render(chunks[0], buf);
        Paragraph::new(tag_line(self.tag_options, self.state.tag_cursor)).render(chunks[1], buf);

        if self.photos.is_empty() {
            Paragraph::new("No photos match. Widen the search or cycle the tag with t.")
                .style(Style::default().fg(Color::DarkGray))
                .render(chunks[2], buf);
            return;
        }

        let items: Vec<ListItem> = self
            .photos
            .iter()
            .map(|photo| {
                ListItem::new(Line::from(vec![
                    Span::styled(photo.date.as_str(), Style::default().fg(Color::DarkGray)),
                    Span::raw("  "),
                    Span::styled(
                        format!("♥ {:>3}", photo.likes),
                        Style::default().fg(Color::Red),
                    ),
                    Span::raw("  "),
                    Span::raw(photo.caption.as_str()),
                ]))
            })
            .collect();
        let list = List::new(items)
            .highlight_symbol("❯ ")
            .highlight_style(Style::default().add_modifier(Modifier::BOLD));
        let mut list_state = ListState::default();
        list_state.select(Some(self.state.cursor.min(self.photos.len() - 1)));
        StatefulWidget::render(list, chunks[2], buf, &mut list_state);
    }
}

/// Single photo record, shown while one is focused. The terminal cannot
/// show the image itself, so the caption carries the view.
pub(crate) struct LightboxView<'a> {
    photo: &'a Photo,
}

impl<'a> LightboxView<'a> {
    pub(crate) fn new(photo: &'a Photo) -> Self {
        Self { photo }
    }
}

impl Widget for LightboxView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL).title(" lightbox ");
        let inner = block.inner(area);
        block.render(area, buf);

        let dim = Style::default().fg(Color::DarkGray);
        let lines = vec![
            Line::styled(
                self.photo.caption.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Line::styled(self.photo.date.as_str(), dim),
            Line::default(),
            tags_line(&self.photo.tags),
            Line::default(),
            Line::styled(
                format!("♥ {}   {} comments", self.photo.likes, self.photo.comments),
                dim,
            ),
            Line::default(),
            Line::styled(format!("image: {}", self.photo.image), dim),
        ];
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}
