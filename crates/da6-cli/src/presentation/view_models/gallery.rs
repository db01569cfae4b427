use serde::Serialize;

use super::common::FilterSummary;

#[derive(Debug, Clone, Serialize)]
pub struct PhotoEntry {
    pub id: String,
    pub caption: String,
    pub date: String,
    pub tags: Vec<String>,
    pub likes: u32,
    pub comments: u32,
}

#[derive(Debug, Serialize)]
pub struct PhotoListViewModel {
    pub photos: Vec<PhotoEntry>,
    pub total: usize,
    pub available_tags: Vec<String>,
    pub applied: FilterSummary,
}

#[derive(Debug, Serialize)]
pub struct PhotoDetailViewModel {
    pub id: String,
    pub caption: String,
    pub date: String,
    pub tags: Vec<String>,
    pub likes: u32,
    pub comments: u32,
    pub image: String,
}
