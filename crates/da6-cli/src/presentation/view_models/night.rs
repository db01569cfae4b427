use serde::Serialize;

use super::common::FilterSummary;

#[derive(Debug, Clone, Serialize)]
pub struct EventEntry {
    /// 1-based position on the wheel, kept from catalog order even when
    /// a search narrows the listing.
    pub position: usize,
    pub id: String,
    pub title: String,
    pub venue: String,
    pub date: String,
    pub mood: String,
}

#[derive(Debug, Serialize)]
pub struct EventListViewModel {
    pub events: Vec<EventEntry>,
    pub total: usize,
    pub applied: FilterSummary,
}

#[derive(Debug, Serialize)]
pub struct EventDetailViewModel {
    pub id: String,
    pub title: String,
    pub venue: String,
    pub date: String,
    pub mood: String,
    pub description: String,
    pub image: String,
    pub position: usize,
    pub total: usize,
}
