use std::fmt;

use serde::{Deserialize, Serialize};

/// Cosmetic category for a night event. Selects color styling only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NightMood {
    Electronic,
    Ambient,
    Experimental,
}

impl fmt::Display for NightMood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NightMood::Electronic => write!(f, "electronic"),
            NightMood::Ambient => write!(f, "ambient"),
            NightMood::Experimental => write!(f, "experimental"),
        }
    }
}

/// One entry in the Kingdom of Night carousel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NightEvent {
    pub id: String,
    pub title: String,
    pub venue: String,

    /// Display date exactly as authored. Night events use the dotted form,
    /// e.g. "2024.01.15".
    pub date: String,

    pub description: String,

    /// Image reference (URL or path); never fetched here.
    pub image: String,

    pub mood: NightMood,
}
