//! Full-screen interactive browser.
//!
//! The renderer owns every piece of screen state (active screen, list
//! cursors, search buffers, the home rotation and the night wheel) and
//! drives the engine state machines from key events. Drawing is handed
//! off to the widgets in `views::tui`, which never mutate anything.

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
    style::{Color, Modifier, Style},
    widgets::Tabs,
};

use da6_content::PlaybackConfig;
use da6_engine::{ALL_TAGS, Carousel, CatalogFilter, Focus, Rotation, distinct_tags};
use da6_types::{Catalog, Section};

use crate::presentation::views::tui::{
    ArticleView, HomeView, LightboxView, PhotoBrowseView, PostBrowseView, StatusBarView, WheelView,
};

/// Screens reachable from the tab bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Home,
    Blog,
    Gallery,
    Night,
}

impl Screen {
    fn next(self) -> Self {
        match self {
            Screen::Home => Screen::Blog,
            Screen::Blog => Screen::Gallery,
            Screen::Gallery => Screen::Night,
            Screen::Night => Screen::Home,
        }
    }

    fn index(self) -> usize {
        match self {
            Screen::Home => 0,
            Screen::Blog => 1,
            Screen::Gallery => 2,
            Screen::Night => 3,
        }
    }
}

/// Shared state for the two filterable list screens (blog, gallery).
#[derive(Debug, Default)]
pub(crate) struct BrowseState {
    pub(crate) cursor: usize,
    pub(crate) search: String,
    pub(crate) input_active: bool,
    pub(crate) tag_cursor: usize,
    pub(crate) focus: Focus<String>,
}

#[derive(Debug)]
struct NightState {
    wheel: Carousel,
    music: bool,
    sound: bool,
}

pub struct TuiRenderer {
    catalog: Catalog,
    screen: Screen,
    rotation: Rotation,
    autoplay_interval: Duration,
    last_advance: Instant,
    blog: BrowseState,
    gallery: BrowseState,
    blog_tags: Vec<String>,
    gallery_tags: Vec<String>,
    night: NightState,
    should_quit: bool,
}

impl TuiRenderer {
    /// Builds the initial screen state without touching the terminal, so
    /// state transitions stay testable.
    pub fn new(catalog: Catalog, playback: &PlaybackConfig) -> Self {
        let mut blog_tags = vec![ALL_TAGS.to_string()];
        blog_tags.extend(distinct_tags(&catalog.posts));
        let mut gallery_tags = vec![ALL_TAGS.to_string()];
        gallery_tags.extend(distinct_tags(&catalog.photos));

        let night = NightState {
            wheel: Carousel::new(catalog.events.len()),
            music: playback.music,
            sound: playback.sound,
        };

        Self {
            rotation: Rotation::new(catalog.modules.len()),
            autoplay_interval: Duration::from_millis(playback.autoplay_interval_ms),
            last_advance: Instant::now(),
            catalog,
            screen: Screen::Home,
            blog: BrowseState::default(),
            gallery: BrowseState::default(),
            blog_tags,
            gallery_tags,
            night,
            should_quit: false,
        }
    }

    pub fn run(mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Restore the terminal even when the process dies to a signal,
        // otherwise the shell is left in raw mode.
        ctrlc::set_handler(move || {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
            std::process::exit(0);
        })?;

        let result = self.event_loop(&mut terminal);

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        loop {
            terminal.draw(|frame| self.render(frame))?;

            if event::poll(Duration::from_millis(100))? {
                match event::read()? {
                    Event::Key(key) => self.handle_key_event(key),
                    Event::Mouse(mouse) => self.handle_mouse_event(mouse),
                    _ => {}
                }
            }

            if self.rotation.autoplay() && self.last_advance.elapsed() >= self.autoplay_interval {
                self.rotation.tick();
                self.last_advance = Instant::now();
            }

            if self.should_quit {
                return Ok(());
            }
        }
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        // crossterm on Windows reports both press and release.
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if self.input_active() {
            self.handle_search_input(key.code);
            return;
        }

        let consumed = match self.screen {
            Screen::Home => self.handle_home_key(key.code),
            Screen::Blog => {
                let visible = self.visible_post_ids();
                Self::handle_browse_key(&mut self.blog, self.blog_tags.len(), &visible, key.code)
            }
            Screen::Gallery => {
                let visible = self.visible_photo_ids();
                Self::handle_browse_key(
                    &mut self.gallery,
                    self.gallery_tags.len(),
                    &visible,
                    key.code,
                )
            }
            Screen::Night => self.handle_night_key(key.code),
        };
        if consumed {
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Tab => self.screen = self.screen.next(),
            KeyCode::Char('1') => self.screen = Screen::Home,
            KeyCode::Char('2') => self.screen = Screen::Blog,
            KeyCode::Char('3') => self.screen = Screen::Gallery,
            KeyCode::Char('4') => self.screen = Screen::Night,
            _ => {}
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        // The wheel metaphor only makes sense on the night screen.
        if self.screen != Screen::Night {
            return;
        }
        match mouse.kind {
            MouseEventKind::ScrollDown => self.night.wheel.advance(),
            MouseEventKind::ScrollUp => self.night.wheel.retreat(),
            _ => {}
        }
    }

    fn input_active(&self) -> bool {
        match self.screen {
            Screen::Blog => self.blog.input_active,
            Screen::Gallery => self.gallery.input_active,
            _ => false,
        }
    }

    fn handle_search_input(&mut self, code: KeyCode) {
        let state = match self.screen {
            Screen::Blog => &mut self.blog,
            Screen::Gallery => &mut self.gallery,
            _ => return,
        };
        match code {
            KeyCode::Esc | KeyCode::Enter => state.input_active = false,
            KeyCode::Backspace => {
                state.search.pop();
                state.cursor = 0;
            }
            KeyCode::Char(c) => {
                state.search.push(c);
                state.cursor = 0;
            }
            _ => {}
        }
    }

    fn handle_home_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Left => {
                self.rotation.select_prev();
                true
            }
            KeyCode::Right => {
                self.rotation.select_next();
                true
            }
            KeyCode::Char(c @ '1'..='9') => {
                self.rotation.select(c as usize - '1' as usize);
                true
            }
            KeyCode::Enter => {
                if let Some(module) = self.catalog.modules.get(self.rotation.index())
                    && let Some(section) = module.section()
                {
                    self.screen = match section {
                        Section::Blog => Screen::Blog,
                        Section::Gallery => Screen::Gallery,
                        Section::Night => Screen::Night,
                    };
                }
                true
            }
            _ => false,
        }
    }

    fn handle_browse_key(
        state: &mut BrowseState,
        tag_count: usize,
        visible_ids: &[String],
        code: KeyCode,
    ) -> bool {
        if state.focus.is_focused() {
            // Detail view is modal: only Esc acts, the rest of the list
            // keys are swallowed so the cursor cannot drift underneath.
            return match code {
                KeyCode::Esc => {
                    state.focus.dismiss();
                    true
                }
                KeyCode::Up
                | KeyCode::Down
                | KeyCode::Enter
                | KeyCode::Char('j' | 'k' | 't' | '/') => true,
                _ => false,
            };
        }

        match code {
            KeyCode::Up | KeyCode::Char('k') => {
                state.cursor = state.cursor.saturating_sub(1);
                true
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if state.cursor + 1 < visible_ids.len() {
                    state.cursor += 1;
                }
                true
            }
            KeyCode::Enter => {
                if let Some(id) = visible_ids.get(state.cursor) {
                    state.focus.select(id.clone());
                }
                true
            }
            KeyCode::Char('/') => {
                state.input_active = true;
                true
            }
            KeyCode::Char('t') => {
                if tag_count > 0 {
                    state.tag_cursor = (state.tag_cursor + 1) % tag_count;
                }
                state.cursor = 0;
                true
            }
            KeyCode::Esc => true,
            _ => false,
        }
    }

    fn handle_night_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.night.wheel.advance();
                true
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.night.wheel.retreat();
                true
            }
            KeyCode::Char(c @ '1'..='9') => {
                self.night.wheel.jump(c as usize - '1' as usize);
                true
            }
            KeyCode::Char('m') => {
                self.night.music = !self.night.music;
                true
            }
            KeyCode::Char('s') => {
                self.night.sound = !self.night.sound;
                true
            }
            _ => false,
        }
    }

    fn blog_filter(&self) -> CatalogFilter {
        CatalogFilter::new()
            .search(self.blog.search.clone())
            .tag(self.blog_tags[self.blog.tag_cursor].clone())
    }

    fn gallery_filter(&self) -> CatalogFilter {
        CatalogFilter::new()
            .search(self.gallery.search.clone())
            .tag(self.gallery_tags[self.gallery.tag_cursor].clone())
    }

    fn visible_post_ids(&self) -> Vec<String> {
        self.blog_filter()
            .apply(&self.catalog.posts)
            .iter()
            .map(|post| post.id.clone())
            .collect()
    }

    fn visible_photo_ids(&self) -> Vec<String> {
        self.gallery_filter()
            .apply(&self.catalog.photos)
            .iter()
            .map(|photo| photo.id.clone())
            .collect()
    }

    fn render(&self, frame: &mut Frame) {
        let chunks = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(5),
            Constraint::Length(2),
        ])
        .split(frame.area());

        let tabs = Tabs::new(vec!["1 Home", "2 Blog", "3 Gallery", "4 Night"])
            .select(self.screen.index())
            .style(Style::default().fg(Color::DarkGray))
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            );
        frame.render_widget(tabs, chunks[0]);

        match self.screen {
            Screen::Home => {
                let next_in = self.rotation.autoplay().then(|| {
                    self.autoplay_interval
                        .saturating_sub(self.last_advance.elapsed())
                        .as_secs()
                        + 1
                });
                frame.render_widget(
                    HomeView::new(&self.catalog.modules, &self.rotation, next_in),
                    chunks[1],
                );
            }
            Screen::Blog => {
                let focused = self
                    .blog
                    .focus
                    .focused()
                    .and_then(|id| self.catalog.posts.iter().find(|post| &post.id == id));
                if let Some(post) = focused {
                    frame.render_widget(ArticleView::new(post), chunks[1]);
                } else {
                    let posts = self.blog_filter().apply(&self.catalog.posts);
                    frame.render_widget(
                        PostBrowseView::new(&posts, &self.blog, &self.blog_tags),
                        chunks[1],
                    );
                }
            }
            Screen::Gallery => {
                let focused = self
                    .gallery
                    .focus
                    .focused()
                    .and_then(|id| self.catalog.photos.iter().find(|photo| &photo.id == id));
                if let Some(photo) = focused {
                    frame.render_widget(LightboxView::new(photo), chunks[1]);
                } else {
                    let photos = self.gallery_filter().apply(&self.catalog.photos);
                    frame.render_widget(
                        PhotoBrowseView::new(&photos, &self.gallery, &self.gallery_tags),
                        chunks[1],
                    );
                }
            }
            Screen::Night => {
                frame.render_widget(
                    WheelView::new(&self.catalog.events, &self.night.wheel),
                    chunks[1],
                );
            }
        }

        frame.render_widget(self.status_bar(), chunks[2]);
    }

    fn status_bar(&self) -> StatusBarView<'_> {
        if self.input_active() {
            return StatusBarView::new(
                &[("type", "to search"), ("Esc/Enter", "done")],
                Some("typing".to_string()),
            );
        }
        let focused = match self.screen {
            Screen::Blog => self.blog.focus.is_focused(),
            Screen::Gallery => self.gallery.focus.is_focused(),
            _ => false,
        };
        if focused {
            return StatusBarView::new(&[("Esc", "back to list"), ("Tab", "screen")], None);
        }
        match self.screen {
            Screen::Home => StatusBarView::new(
                &[
                    ("←/→", "select"),
                    ("Enter", "open"),
                    ("Tab", "screen"),
                    ("q", "quit"),
                ],
                None,
            ),
            Screen::Blog | Screen::Gallery => StatusBarView::new(
                &[
                    ("j/k", "move"),
                    ("Enter", "open"),
                    ("/", "search"),
                    ("t", "tag"),
                    ("q", "quit"),
                ],
                None,
            ),
            Screen::Night => StatusBarView::new(
                &[
                    ("j/k", "turn"),
                    ("1-9", "jump"),
                    ("m", "music"),
                    ("s", "sound"),
                    ("q", "quit"),
                ],
                Some(format!(
                    "music {}  sound {}",
                    if self.night.music { "on" } else { "off" },
                    if self.night.sound { "on" } else { "off" },
                )),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use da6_content::builtin_catalog;

    fn renderer() -> TuiRenderer {
        TuiRenderer::new(builtin_catalog().clone(), &PlaybackConfig::default())
    }

    fn press(renderer: &mut TuiRenderer, code: KeyCode) {
        renderer.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn tab_cycles_through_all_screens_and_wraps() {
        let mut r = renderer();
        assert_eq!(r.screen, Screen::Home);
        press(&mut r, KeyCode::Tab);
        assert_eq!(r.screen, Screen::Blog);
        press(&mut r, KeyCode::Tab);
        assert_eq!(r.screen, Screen::Gallery);
        press(&mut r, KeyCode::Tab);
        assert_eq!(r.screen, Screen::Night);
        press(&mut r, KeyCode::Tab);
        assert_eq!(r.screen, Screen::Home);
    }

    #[test]
    fn digit_keys_jump_between_screens() {
        let mut r = renderer();
        press(&mut r, KeyCode::Tab);
        assert_eq!(r.screen, Screen::Blog);
        press(&mut r, KeyCode::Char('3'));
        assert_eq!(r.screen, Screen::Gallery);
        press(&mut r, KeyCode::Char('4'));
        assert_eq!(r.screen, Screen::Night);
    }

    #[test]
    fn home_digits_select_modules_instead_of_switching_screens() {
        let mut r = renderer();
        press(&mut r, KeyCode::Char('2'));
        assert_eq!(r.screen, Screen::Home, "home consumes digits for modules");
        assert_eq!(r.rotation.index(), 1);
        assert!(!r.rotation.autoplay(), "manual pick stops the rotation");
    }

    #[test]
    fn home_arrows_move_the_rotation_and_disable_autoplay() {
        let mut r = renderer();
        assert!(r.rotation.autoplay());
        press(&mut r, KeyCode::Right);
        assert_eq!(r.rotation.index(), 1);
        assert!(!r.rotation.autoplay());
        press(&mut r, KeyCode::Left);
        assert_eq!(r.rotation.index(), 0);
    }

    #[test]
    fn enter_on_home_opens_the_linked_screen() {
        let mut r = renderer();
        // The first builtin module links to the photo gallery.
        press(&mut r, KeyCode::Enter);
        assert_eq!(r.screen, Screen::Gallery);
    }

    #[test]
    fn quit_key_sets_the_exit_flag() {
        let mut r = renderer();
        assert!(!r.should_quit);
        press(&mut r, KeyCode::Char('q'));
        assert!(r.should_quit);
    }

    #[test]
    fn ctrl_c_quits_from_any_state() {
        let mut r = renderer();
        press(&mut r, KeyCode::Char('2'));
        press(&mut r, KeyCode::Char('/'));
        r.handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(r.should_quit);
    }

    #[test]
    fn blog_cursor_moves_within_bounds() {
        let mut r = renderer();
        press(&mut r, KeyCode::Char('2'));
        let count = r.visible_post_ids().len();
        assert!(count >= 2);
        for _ in 0..count + 3 {
            press(&mut r, KeyCode::Char('j'));
        }
        assert_eq!(r.blog.cursor, count - 1, "cursor stops at the last row");
        press(&mut r, KeyCode::Char('k'));
        assert_eq!(r.blog.cursor, count - 2);
        for _ in 0..count {
            press(&mut r, KeyCode::Up);
        }
        assert_eq!(r.blog.cursor, 0);
    }

    #[test]
    fn search_input_captures_keys_and_filters_live() {
        let mut r = renderer();
        press(&mut r, KeyCode::Char('2'));
        let unfiltered = r.visible_post_ids().len();
        press(&mut r, KeyCode::Char('/'));
        assert!(r.blog.input_active);
        for c in "地鐵".chars() {
            press(&mut r, KeyCode::Char(c));
        }
        assert_eq!(r.blog.search, "地鐵");
        assert_eq!(r.visible_post_ids(), vec!["2".to_string()]);
        assert!(r.visible_post_ids().len() < unfiltered);
        // 'q' is text while typing, not quit.
        press(&mut r, KeyCode::Char('q'));
        assert!(!r.should_quit);
        press(&mut r, KeyCode::Backspace);
        assert_eq!(r.blog.search, "地鐵");
        press(&mut r, KeyCode::Esc);
        assert!(!r.blog.input_active);
        assert_eq!(r.blog.search, "地鐵", "leaving input keeps the query");
    }

    #[test]
    fn tag_key_cycles_back_to_all() {
        let mut r = renderer();
        press(&mut r, KeyCode::Char('2'));
        let tag_count = r.blog_tags.len();
        assert!(tag_count > 1);
        press(&mut r, KeyCode::Char('t'));
        assert_eq!(r.blog.tag_cursor, 1);
        for _ in 1..tag_count {
            press(&mut r, KeyCode::Char('t'));
        }
        assert_eq!(r.blog.tag_cursor, 0, "cycle wraps to the all sentinel");
    }

    #[test]
    fn enter_focuses_and_esc_returns_to_the_same_list() {
        let mut r = renderer();
        press(&mut r, KeyCode::Char('2'));
        press(&mut r, KeyCode::Char('j'));
        let expected = r.visible_post_ids()[1].clone();
        press(&mut r, KeyCode::Enter);
        assert_eq!(r.blog.focus.focused(), Some(&expected));
        // List keys are inert while the detail is open.
        press(&mut r, KeyCode::Char('j'));
        assert_eq!(r.blog.cursor, 1);
        press(&mut r, KeyCode::Esc);
        assert!(!r.blog.focus.is_focused());
        assert_eq!(r.blog.cursor, 1, "cursor survives the detour");
    }

    #[test]
    fn gallery_state_is_independent_of_blog_state() {
        let mut r = renderer();
        press(&mut r, KeyCode::Char('2'));
        press(&mut r, KeyCode::Char('/'));
        for c in "夜".chars() {
            press(&mut r, KeyCode::Char(c));
        }
        press(&mut r, KeyCode::Enter);
        press(&mut r, KeyCode::Char('3'));
        assert_eq!(r.gallery.search, "");
        assert_eq!(r.gallery.cursor, 0);
        press(&mut r, KeyCode::Char('2'));
        assert_eq!(r.blog.search, "夜");
    }

    #[test]
    fn night_wheel_clamps_at_both_ends() {
        let mut r = renderer();
        press(&mut r, KeyCode::Char('4'));
        let len = r.catalog.events.len();
        press(&mut r, KeyCode::Char('k'));
        assert_eq!(r.night.wheel.index(), 0);
        for _ in 0..len + 4 {
            press(&mut r, KeyCode::Char('j'));
        }
        assert_eq!(r.night.wheel.index(), len - 1);
    }

    #[test]
    fn night_digits_jump_on_the_wheel() {
        let mut r = renderer();
        press(&mut r, KeyCode::Char('4'));
        press(&mut r, KeyCode::Char('3'));
        assert_eq!(r.night.wheel.index(), 2);
        assert_eq!(r.screen, Screen::Night, "digits stay on the wheel");
        press(&mut r, KeyCode::Char('9'));
        assert_eq!(
            r.night.wheel.index(),
            r.catalog.events.len() - 1,
            "out-of-range jump clamps"
        );
    }

    #[test]
    fn mouse_scroll_turns_the_wheel_only_on_night() {
        let mut r = renderer();
        let scroll = |kind| MouseEvent {
            kind,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };
        r.handle_mouse_event(scroll(MouseEventKind::ScrollDown));
        assert_eq!(r.night.wheel.index(), 0, "ignored off the night screen");
        press(&mut r, KeyCode::Char('4'));
        r.handle_mouse_event(scroll(MouseEventKind::ScrollDown));
        assert_eq!(r.night.wheel.index(), 1);
        r.handle_mouse_event(scroll(MouseEventKind::ScrollUp));
        assert_eq!(r.night.wheel.index(), 0);
    }

    #[test]
    fn playback_toggles_flip_independently() {
        let mut r = renderer();
        press(&mut r, KeyCode::Char('4'));
        let music = r.night.music;
        let sound = r.night.sound;
        press(&mut r, KeyCode::Char('m'));
        assert_eq!(r.night.music, !music);
        assert_eq!(r.night.sound, sound);
        press(&mut r, KeyCode::Char('s'));
        assert_eq!(r.night.sound, !sound);
    }

    #[test]
    fn key_release_events_are_ignored() {
        let mut r = renderer();
        let mut release = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        r.handle_key_event(release);
        assert!(!r.should_quit);
    }
}
