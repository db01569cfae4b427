use serde::{Deserialize, Serialize};

use crate::blog::BlogPost;
use crate::gallery::Photo;
use crate::home::HomeModule;
use crate::night::NightEvent;

/// The full content bundle: every collection the application serves.
///
/// Loaded wholesale at startup and never mutated afterwards. All four
/// collections are required when deserializing; a catalog source that
/// omits one is rejected rather than silently emptied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub posts: Vec<BlogPost>,
    pub photos: Vec<Photo>,
    pub events: Vec<NightEvent>,
    pub modules: Vec<HomeModule>,
}

impl Catalog {
    /// Total record count across all collections.
    pub fn record_count(&self) -> usize {
        self.posts.len() + self.photos.len() + self.events.len() + self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.record_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_collection_is_a_parse_error() {
        // "modules" key absent
        let json = r#"{"posts": [], "photos": [], "events": []}"#;
        let result: Result<Catalog, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn empty_catalog_parses_and_counts_zero() {
        let json = r#"{"posts": [], "photos": [], "events": [], "modules": []}"#;
        let catalog: Catalog = serde_json::from_str(json).unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.record_count(), 0);
    }
}
