use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, StatefulWidget, Widget, Wrap},
};

use da6_types::BlogPost;

use crate::presentation::renderers::tui::BrowseState;

use super::blog_mood_color;

/// Filterable post list with the search and tag chrome above it.
pub(crate) struct PostBrowseView<'a> {
    posts: &'a [&'a BlogPost],
    state: &'a BrowseState,
    tag_options: &'a [String],
}

impl<'a> PostBrowseView<'a> {
    pub(crate) fn new(
        posts: &'a [&'a BlogPost],
        state: &'a BrowseState,
        tag_options: &'a [String],
    ) -> Self {
        Self {
            posts,
            state,
            tag_options,
        }
    }
}

impl Widget for PostBrowseView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL).title(" blog ");
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

        if self.posts.is_empty() {
            Paragraph::new("No posts match. Widen the search or cycle the tag with t.")
                .style(Style::default().fg(Color::DarkGray))
                .render(chunks[2], buf);
            return;
        }

        let items: Vec<ListItem> = self
            .posts
            .iter()
            .map(|post| {
                ListItem::new(Line::from(vec![
                    Span::styled(post.date.as_str(), Style::default().fg(Color::DarkGray)),
                    Span::raw("  "),
                    Span::styled(
                        post.title.as_str(),
                        Style::default().fg(blog_mood_color(post.mood)),
                    ),
                    Span::raw("  "),
                    Span::styled(
                        format!("{} · ♥ {}", post.read_time, post.likes),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]))
            })
            .collect();
        let list = List::new(items)
            .highlight_symbol("❯ ")
            .highlight_style(Style::default().add_modifier(Modifier::BOLD));
        let mut list_state = ListState::default();
        list_state.select(Some(self.state.cursor.min(self.posts.len() - 1)));
        StatefulWidget::render(list, chunks[2], buf, &mut list_state);
    }
}

pub(super) fn search_line(state: &BrowseState) -> Line<'_> {
    let label = Span::styled("search: ", Style::default().fg(Color::DarkGray));
    if state.input_active {
        Line::from(vec![
            label,
            Span::raw(state.search.as_str()),
            Span::styled("▏", Style::default().fg(Color::Yellow)),
        ])
    } else if state.search.is_empty() {
        Line::from(Span::styled(
            "search: (press / to type)",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(vec![label, Span::raw(state.search.as_str())])
    }
}

pub(super) fn tag_line<'a>(tag_options: &'a [String], tag_cursor: usize) -> Line<'a> {
    let mut spans = vec![Span::styled("tags: ", Style::default().fg(Color::DarkGray))];
    for (i, tag) in tag_options.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        if i == tag_cursor {
            spans.push(Span::styled(
                format!("[{tag}]"),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled(
                format!(" {tag} "),
                Style::default().fg(Color::DarkGray),
            ));
        }
    }
    Line::from(spans)
}

/// Full article, shown while a post is focused.
pub(crate) struct ArticleView<'a> {
    post: &'a BlogPost,
}

impl<'a> ArticleView<'a> {
    pub(crate) fn new(post: &'a BlogPost) -> Self {
        Self { post }
    }
}

impl Widget for ArticleView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", self.post.title));
        let inner = block.inner(area);
        block.render(area, buf);

        let dim = Style::default().fg(Color::DarkGray);
        let mut lines = vec![
            Line::from(vec![
                Span::styled(self.post.date.as_str(), dim),
                Span::raw("  ·  "),
                Span::styled(self.post.read_time.as_str(), dim),
                Span::raw("  ·  "),
                Span::styled(
                    self.post.mood.to_string(),
                    Style::default().fg(blog_mood_color(self.post.mood)),
                ),
            ]),
            tags_line(&self.post.tags),
            Line::default(),
            Line::styled(
                self.post.excerpt.as_str(),
                dim.add_modifier(Modifier::ITALIC),
            ),
            Line::default(),
        ];
        for paragraph in self.post.content.split('\n') {
            lines.push(Line::raw(paragraph));
        }
        lines.push(Line::default());
        lines.push(Line::styled(
            format!("♥ {}   {} comments", self.post.likes, self.post.comments),
            dim,
        ));

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}

pub(super) fn tags_line(tags: &[String]) -> Line<'_> {
    let mut spans = Vec::new();
    for (i, tag) in tags.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(
            format!("[{tag}]"),
            Style::default().fg(Color::Cyan),
        ));
    }
    Line::from(spans)
}
