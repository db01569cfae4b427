use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ModuleEntry {
    /// 1-based position in the rotation.
    pub position: usize,
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    /// Section the link resolves to, when it names one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    pub link: String,
    pub color: String,
}

#[derive(Debug, Serialize)]
pub struct ModuleListViewModel {
    pub modules: Vec<ModuleEntry>,
    pub total: usize,
}
