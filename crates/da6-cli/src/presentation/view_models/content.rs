use serde::Serialize;

use super::common::Guidance;

#[derive(Debug, Clone, Serialize)]
pub struct FindingEntry {
    pub severity: String,
    pub collection: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_id: Option<String>,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct CheckViewModel {
    pub source: String,
    pub record_count: usize,
    pub findings: Vec<FindingEntry>,
    pub error_count: usize,
    pub warning_count: usize,
}

#[derive(Debug, Serialize)]
pub struct ExportViewModel {
    pub destination: String,
    pub record_count: usize,
}

#[derive(Debug, Serialize)]
pub struct InitViewModel {
    pub config_path: String,
    pub overwritten: bool,
    pub suggestions: Vec<Guidance>,
}

#[derive(Debug, Serialize)]
pub struct GuidanceViewModel {
    pub source: String,
    pub post_count: usize,
    pub photo_count: usize,
    pub event_count: usize,
    pub module_count: usize,
    pub suggestions: Vec<Guidance>,
}
