//! Ratatui widgets for the interactive browser.
//!
//! Every widget borrows its data from the renderer and only draws; the
//! cursor positions, search buffers and wheel state all live in
//! [`crate::presentation::renderers::tui::TuiRenderer`]. Colors are
//! derived from catalog moods and module gradients so the terminal
//! keeps the palette of the site the catalog was authored for.

mod blog;
mod gallery;
mod home;
mod night;
mod status_bar;

pub(crate) use blog::{ArticleView, PostBrowseView};
pub(crate) use gallery::{LightboxView, PhotoBrowseView};
pub(crate) use home::HomeView;
pub(crate) use night::WheelView;
pub(crate) use status_bar::StatusBarView;

use ratatui::style::Color;

use da6_types::{BlogMood, NightMood};

fn blog_mood_color(mood: BlogMood) -> Color {
    match mood {
        BlogMood::Introspective => Color::Blue,
        BlogMood::Observational => Color::Green,
        BlogMood::Experimental => Color::Magenta,
    }
}

fn night_mood_color(mood: NightMood) -> Color {
    match mood {
        NightMood::Electronic => Color::Cyan,
        NightMood::Ambient => Color::Blue,
        NightMood::Experimental => Color::Magenta,
    }
}

/// Picks a terminal color from a CSS gradient string such as
/// "from-purple-600/80 to-pink-600/80". First recognized hue wins.
fn accent_color(gradient: &str) -> Color {
    const HUES: [(&str, Color); 10] = [
        ("purple", Color::Magenta),
        ("pink", Color::LightMagenta),
        ("indigo", Color::LightBlue),
        ("blue", Color::Blue),
        ("cyan", Color::Cyan),
        ("teal", Color::Cyan),
        ("green", Color::Green),
        ("amber", Color::Yellow),
        ("red", Color::Red),
        ("slate", Color::DarkGray),
    ];
    for (word, color) in HUES {
        if gradient.contains(word) {
            return color;
        }
    }
    Color::White
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accent_color_takes_the_first_hue() {
        assert_eq!(accent_color("from-purple-600/80 to-pink-600/80"), Color::Magenta);
        assert_eq!(accent_color("from-slate-600/80 to-indigo-600/80"), Color::LightBlue);
        assert_eq!(accent_color("plain"), Color::White);
    }
}
