use std::fmt;

use serde::{Deserialize, Serialize};

/// Cosmetic category for a blog post. Selects the gradient/color used by
/// renderers and carries no behavioral weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlogMood {
    Introspective,
    Observational,
    Experimental,
}

impl fmt::Display for BlogMood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlogMood::Introspective => write!(f, "introspective"),
            BlogMood::Observational => write!(f, "observational"),
            BlogMood::Experimental => write!(f, "experimental"),
        }
    }
}

/// A long-form post: full body text plus the metadata shown in listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub excerpt: String,

    /// Full article body. Paragraphs are separated by blank lines.
    pub content: String,

    /// Cover image reference (URL or path). Never fetched here; rendering
    /// collaborators decide what to do with it.
    pub image: String,

    /// Display date exactly as authored, e.g. "2024-01-15".
    pub date: String,

    /// Free-text tags in authored order. May be empty.
    pub tags: Vec<String>,

    /// Read-time label as authored, e.g. "5 min".
    pub read_time: String,

    pub likes: u32,
    pub comments: u32,
    pub mood: BlogMood,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mood_serializes_snake_case() {
        let json = serde_json::to_string(&BlogMood::Introspective).unwrap();
        assert_eq!(json, "\"introspective\"");

        let back: BlogMood = serde_json::from_str("\"experimental\"").unwrap();
        assert_eq!(back, BlogMood::Experimental);
    }

    #[test]
    fn unknown_mood_is_rejected() {
        let result: Result<BlogMood, _> = serde_json::from_str("\"nostalgic\"");
        assert!(result.is_err());
    }
}
