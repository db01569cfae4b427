use serde::Serialize;

use super::common::FilterSummary;

#[derive(Debug, Clone, Serialize)]
pub struct PostEntry {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub date: String,
    pub mood: String,
    pub tags: Vec<String>,
    pub read_time: String,
    pub likes: u32,
    pub comments: u32,
}

#[derive(Debug, Serialize)]
pub struct PostListViewModel {
    pub posts: Vec<PostEntry>,
    /// How many posts the catalog holds before filtering.
    pub total: usize,
    /// Every tag carried by any post, first-seen order.
    pub available_tags: Vec<String>,
    pub applied: FilterSummary,
}

#[derive(Debug, Serialize)]
pub struct PostDetailViewModel {
    pub id: String,
    pub title: String,
    pub date: String,
    pub mood: String,
    pub tags: Vec<String>,
    pub read_time: String,
    pub likes: u32,
    pub comments: u32,
    pub excerpt: String,
    pub content: String,
    pub image: String,
}
