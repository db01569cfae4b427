use serde::{Deserialize, Serialize};

/// A captured moment in the Human Collection gallery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    pub id: String,

    /// Image reference (URL or path); never fetched here.
    pub image: String,

    /// Observation caption, the photo's only searchable text.
    pub caption: String,

    pub likes: u32,
    pub comments: u32,

    /// Free-text tags in authored order. May be empty.
    pub tags: Vec<String>,

    /// Display date exactly as authored, e.g. "2024-01-15".
    pub date: String,
}
