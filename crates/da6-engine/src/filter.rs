use da6_types::{BlogPost, NightEvent, Photo};

/// Tag-filter value meaning "no tag filter". The UI surfaces it as a
/// selectable chip alongside the real tags.
pub const ALL_TAGS: &str = "all";

/// Access to a record's tags and the text fields free-text search
/// inspects.
///
/// Implemented per collection so one filter serves all of them. Text
/// matching is case-insensitive; tag matching is exact and
/// case-sensitive.
pub trait CatalogRecord {
    /// Tags in authored order. Collections without tags return an empty
    /// slice.
    fn tags(&self) -> &[String] {
        &[]
    }

    /// The designated text fields a search substring may match against.
    fn search_text(&self) -> Vec<&str>;
}

impl CatalogRecord for BlogPost {
    fn tags(&self) -> &[String] {
        &self.tags
    }

    fn search_text(&self) -> Vec<&str> {
        vec![&self.title, &self.excerpt]
    }
}

impl CatalogRecord for Photo {
    fn tags(&self) -> &[String] {
        &self.tags
    }

    fn search_text(&self) -> Vec<&str> {
        vec![&self.caption]
    }
}

impl CatalogRecord for NightEvent {
    fn search_text(&self) -> Vec<&str> {
        vec![&self.title, &self.description]
    }
}

/// Narrows a collection by free-text substring and/or selected tag.
///
/// Total over its inputs: no match produces an empty result, never an
/// error, and result order is always the collection's original order.
/// No pagination, no ranking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogFilter {
    search: Option<String>,
    tag: Option<String>,
}

impl CatalogFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Case-insensitive substring to look for in a record's designated
    /// text fields. The empty string clears the search.
    pub fn search(mut self, term: impl Into<String>) -> Self {
        let term = term.into();
        self.search = if term.is_empty() {
            None
        } else {
            Some(term.to_lowercase())
        };
        self
    }

    /// Exact tag a record must carry. [`ALL_TAGS`] and the empty string
    /// are the "no tag filter" sentinel.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        let tag = tag.into();
        self.tag = if tag.is_empty() || tag == ALL_TAGS {
            None
        } else {
            Some(tag)
        };
        self
    }

    pub fn is_unfiltered(&self) -> bool {
        self.search.is_none() && self.tag.is_none()
    }

    /// Whether a single record passes both predicates.
    pub fn matches<R: CatalogRecord>(&self, record: &R) -> bool {
        if let Some(term) = &self.search {
            let hit = record
                .search_text()
                .iter()
                .any(|field| field.to_lowercase().contains(term.as_str()));
            if !hit {
                return false;
            }
        }

        if let Some(tag) = &self.tag
            && !record.tags().iter().any(|t| t == tag)
        {
            return false;
        }

        true
    }

    /// The ordered sub-sequence of `records` passing the filter.
    pub fn apply<'a, R: CatalogRecord>(&self, records: &'a [R]) -> Vec<&'a R> {
        records.iter().filter(|record| self.matches(*record)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use da6_types::BlogMood;

    fn post(id: &str, title: &str, excerpt: &str, tags: &[&str]) -> BlogPost {
        BlogPost {
            id: id.to_string(),
            title: title.to_string(),
            excerpt: excerpt.to_string(),
            content: String::new(),
            image: String::new(),
            date: "2024-01-01".to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            read_time: "1 min".to_string(),
            likes: 0,
            comments: 0,
            mood: BlogMood::Observational,
        }
    }

    fn tagged_sample() -> Vec<BlogPost> {
        vec![
            post("1", "數位詩歌與霓虹", "在霓虹燈下書寫", &["數位詩歌"]),
            post("2", "地鐵站的時間膠囊", "月台上的記憶", &["城市記憶"]),
            post("3", "夜之實驗室", "感官的實驗場", &["夜生活"]),
        ]
    }

    #[test]
    fn tag_filter_returns_only_records_carrying_the_tag() {
        let posts = tagged_sample();

        let hits = CatalogFilter::new().tag("城市記憶").apply(&posts);

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "2");
    }

    #[test]
    fn union_of_per_tag_filters_covers_every_tagged_record() {
        let posts = tagged_sample();
        let tags = crate::tags::distinct_tags(&posts);

        let mut covered: Vec<&str> = Vec::new();
        for tag in &tags {
            for hit in CatalogFilter::new().tag(tag.clone()).apply(&posts) {
                if !covered.contains(&hit.id.as_str()) {
                    covered.push(&hit.id);
                }
            }
        }

        let tagged_ids: Vec<&str> = posts
            .iter()
            .filter(|p| !p.tags.is_empty())
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(covered, tagged_ids);
    }

    #[test]
    fn search_matches_designated_fields_case_insensitively() {
        let posts = vec![
            post("1", "Neon Evenings", "walking the wet streets", &[]),
            post("2", "Morning Light", "NEON signs switched off", &[]),
            post("3", "Quiet Rooms", "nothing glows here", &[]),
        ];

        let hits = CatalogFilter::new().search("neon").apply(&posts);

        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].id, "1");
        assert_eq!(hits[1].id, "2");
    }

    #[test]
    fn search_finds_cjk_substring_in_title() {
        let posts = tagged_sample();

        let hits = CatalogFilter::new().search("夜").apply(&posts);

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "3");
    }

    #[test]
    fn tag_matching_is_exact_and_case_sensitive() {
        let posts = vec![post("1", "t", "e", &["Night"])];

        assert_eq!(CatalogFilter::new().tag("night").apply(&posts).len(), 0);
        assert_eq!(CatalogFilter::new().tag("Night").apply(&posts).len(), 1);
    }

    #[test]
    fn all_sentinel_and_empty_string_return_the_catalog_unchanged() {
        let posts = tagged_sample();

        for sentinel in [ALL_TAGS, ""] {
            let hits = CatalogFilter::new().tag(sentinel).apply(&posts);
            let ids: Vec<&str> = hits.iter().map(|p| p.id.as_str()).collect();
            assert_eq!(ids, vec!["1", "2", "3"]);
        }
    }

    #[test]
    fn filtering_is_idempotent() {
        let posts = tagged_sample();
        let filter = CatalogFilter::new().search("夜");

        let once: Vec<BlogPost> = filter.apply(&posts).into_iter().cloned().collect();
        let twice: Vec<BlogPost> = filter.apply(&once).into_iter().cloned().collect();

        assert_eq!(once, twice);
    }

    #[test]
    fn search_and_tag_are_a_conjunction() {
        let posts = vec![
            post("1", "night walk", "first", &["street"]),
            post("2", "night bus", "second", &["transit"]),
        ];

        let hits = CatalogFilter::new().search("night").tag("transit").apply(&posts);

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "2");
    }

    #[test]
    fn no_match_yields_empty_not_error() {
        let posts = tagged_sample();

        assert!(CatalogFilter::new().search("不存在的詞").apply(&posts).is_empty());
        assert!(CatalogFilter::new().tag("missing").apply(&posts).is_empty());
        assert!(CatalogFilter::new().search("x").apply(&Vec::<BlogPost>::new()).is_empty());
    }

    #[test]
    fn events_search_title_and_description() {
        use da6_types::{NightEvent, NightMood};

        let events = vec![NightEvent {
            id: "1".to_string(),
            title: "Underground Frequencies".to_string(),
            venue: "The Bunker".to_string(),
            date: "2024.01.15".to_string(),
            description: "地下電子音樂的探索之夜".to_string(),
            image: String::new(),
            mood: NightMood::Electronic,
        }];

        assert_eq!(CatalogFilter::new().search("underground").apply(&events).len(), 1);
        assert_eq!(CatalogFilter::new().search("電子音樂").apply(&events).len(), 1);
        assert_eq!(CatalogFilter::new().search("bunker").apply(&events).len(), 0);
    }
}
