use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct TagSummaryViewModel {
    /// Which collections contributed: "blog", "gallery" or "all".
    pub section: String,
    pub tags: Vec<String>,
    pub total: usize,
}
