use std::fmt;

use serde::{Deserialize, Serialize};

/// Browsable content sections a home module can link to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Blog,
    Gallery,
    Night,
}

impl Section {
    /// Resolve a module link target to its section. Accepts the authored
    /// route form ("/human-collection") with or without the leading slash.
    pub fn from_link(link: &str) -> Option<Self> {
        match link.trim_start_matches('/') {
            "blog" => Some(Section::Blog),
            "human-collection" => Some(Section::Gallery),
            "kingdom-of-night" => Some(Section::Night),
            _ => None,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::Blog => write!(f, "blog"),
            Section::Gallery => write!(f, "gallery"),
            Section::Night => write!(f, "night"),
        }
    }
}

/// One tile of the home rotation. Modules are the entry points into the
/// three content sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeModule {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,

    /// Image reference (URL or path); never fetched here.
    pub image: String,

    /// Link target as authored, e.g. "/human-collection". Resolved with
    /// [`Section::from_link`]; validation flags targets that resolve to
    /// no known section.
    pub link: String,

    /// Gradient label as authored, e.g. "from-purple-600/80 to-pink-600/80".
    /// Renderers map it to terminal colors; it has no other meaning.
    pub color: String,
}

impl HomeModule {
    pub fn section(&self) -> Option<Section> {
        Section::from_link(&self.link)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_targets_resolve_with_or_without_slash() {
        assert_eq!(Section::from_link("/human-collection"), Some(Section::Gallery));
        assert_eq!(Section::from_link("human-collection"), Some(Section::Gallery));
        assert_eq!(Section::from_link("/kingdom-of-night"), Some(Section::Night));
        assert_eq!(Section::from_link("/blog"), Some(Section::Blog));
    }

    #[test]
    fn unknown_link_target_resolves_to_none() {
        assert_eq!(Section::from_link("/about"), None);
        assert_eq!(Section::from_link(""), None);
    }
}
