use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Minimal,
    #[default]
    Compact,
    Verbose,
}

/// Which narrowing a listing had applied, echoed back so scripts can
/// tell an empty catalog from an empty match.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FilterSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

impl FilterSummary {
    pub fn is_empty(&self) -> bool {
        self.search.is_none() && self.tag.is_none()
    }
}

/// A runnable suggestion shown by `init` and the bare-invocation
/// orientation.
#[derive(Debug, Clone, Serialize)]
pub struct Guidance {
    pub description: String,
    pub command: String,
}

impl Guidance {
    pub fn new(description: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            command: command.into(),
        }
    }
}
