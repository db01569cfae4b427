use std::collections::HashSet;
use std::fmt;

use chrono::NaiveDate;
use da6_types::Catalog;
use serde::Serialize;

/// Severity of a validation finding. Errors fail `content check`;
/// warnings alone do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// One validation finding: which collection, which record, what is wrong.
#[derive(Debug, Clone, Serialize)]
pub struct Finding {
    pub severity: Severity,
    pub collection: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_id: Option<String>,
    pub message: String,
}

/// Outcome of checking a catalog against its invariants. Findings are
/// collected exhaustively; the check never aborts on the first problem.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CheckReport {
    pub findings: Vec<Finding>,
}

impl CheckReport {
    pub fn error_count(&self) -> usize {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Warning)
            .count()
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }

    fn error(&mut self, collection: &str, record_id: Option<&str>, message: String) {
        self.findings.push(Finding {
            severity: Severity::Error,
            collection: collection.to_string(),
            record_id: record_id.map(str::to_string),
            message,
        });
    }

    fn warning(&mut self, collection: &str, message: String) {
        self.findings.push(Finding {
            severity: Severity::Warning,
            collection: collection.to_string(),
            record_id: None,
            message,
        });
    }
}

/// Check every catalog invariant: unique IDs per collection, parseable
/// dates, resolvable module links, non-empty required text fields, and
/// (warning level) empty collections.
pub fn check_catalog(catalog: &Catalog) -> CheckReport {
    let mut report = CheckReport::default();

    check_ids(&mut report, "posts", catalog.posts.iter().map(|p| p.id.as_str()));
    check_ids(&mut report, "photos", catalog.photos.iter().map(|p| p.id.as_str()));
    check_ids(&mut report, "events", catalog.events.iter().map(|e| e.id.as_str()));
    check_ids(&mut report, "modules", catalog.modules.iter().map(|m| m.id.as_str()));

    for post in &catalog.posts {
        if post.title.trim().is_empty() {
            report.error("posts", Some(&post.id), "empty title".to_string());
        }
        check_date(&mut report, "posts", &post.id, &post.date);
    }

    for photo in &catalog.photos {
        if photo.caption.trim().is_empty() {
            report.error("photos", Some(&photo.id), "empty caption".to_string());
        }
        check_date(&mut report, "photos", &photo.id, &photo.date);
    }

    for event in &catalog.events {
        if event.title.trim().is_empty() {
            report.error("events", Some(&event.id), "empty title".to_string());
        }
        check_date(&mut report, "events", &event.id, &event.date);
    }

    for module in &catalog.modules {
        if module.title.trim().is_empty() {
            report.error("modules", Some(&module.id), "empty title".to_string());
        }
        if module.section().is_none() {
            report.error(
                "modules",
                Some(&module.id),
                format!("link target '{}' names no known section", module.link),
            );
        }
    }

    for (name, len) in [
        ("posts", catalog.posts.len()),
        ("photos", catalog.photos.len()),
        ("events", catalog.events.len()),
        ("modules", catalog.modules.len()),
    ] {
        if len == 0 {
            report.warning(name, "collection is empty".to_string());
        }
    }

    report
}

fn check_ids<'a>(report: &mut CheckReport, collection: &str, ids: impl Iterator<Item = &'a str>) {
    let mut seen: HashSet<&str> = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            report.error(collection, Some(id), "duplicate id".to_string());
        }
    }
}

// Posts and photos use dashed dates, night events dotted ones. Both forms
// are accepted everywhere.
fn check_date(report: &mut CheckReport, collection: &str, id: &str, date: &str) {
    let parses = NaiveDate::parse_from_str(date, "%Y-%m-%d").is_ok()
        || NaiveDate::parse_from_str(date, "%Y.%m.%d").is_ok();
    if !parses {
        report.error(
            collection,
            Some(id),
            format!("date '{}' is neither YYYY-MM-DD nor YYYY.MM.DD", date),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin_catalog;

    #[test]
    fn builtin_catalog_checks_clean() {
        let report = check_catalog(builtin_catalog());
        assert!(report.is_clean(), "findings: {:?}", report.findings);
    }

    #[test]
    fn duplicate_ids_are_errors() {
        let mut catalog = builtin_catalog().clone();
        let mut dup = catalog.posts[0].clone();
        dup.title = "another".to_string();
        catalog.posts.push(dup);

        let report = check_catalog(&catalog);
        assert!(report.has_errors());
        assert!(report
            .findings
            .iter()
            .any(|f| f.collection == "posts" && f.message == "duplicate id"));
    }

    #[test]
    fn unparseable_dates_are_errors() {
        let mut catalog = builtin_catalog().clone();
        catalog.photos[0].date = "yesterday".to_string();

        let report = check_catalog(&catalog);
        assert_eq!(report.error_count(), 1);
        assert!(report.findings[0].message.contains("yesterday"));
    }

    #[test]
    fn dotted_event_dates_are_accepted() {
        let catalog = builtin_catalog();
        assert!(catalog.events.iter().all(|e| e.date.contains('.')));
        assert!(check_catalog(catalog).is_clean());
    }

    #[test]
    fn unknown_module_link_is_an_error() {
        let mut catalog = builtin_catalog().clone();
        catalog.modules[0].link = "/nowhere".to_string();

        let report = check_catalog(&catalog);
        assert!(report.has_errors());
        assert!(report.findings[0].message.contains("/nowhere"));
    }

    #[test]
    fn empty_required_text_is_an_error() {
        let mut catalog = builtin_catalog().clone();
        catalog.events[0].title = "  ".to_string();

        let report = check_catalog(&catalog);
        assert!(report.has_errors());
        assert!(report
            .findings
            .iter()
            .any(|f| f.collection == "events" && f.message == "empty title"));
    }

    #[test]
    fn empty_collections_warn_but_do_not_fail() {
        let catalog = Catalog::default();

        let report = check_catalog(&catalog);
        assert!(!report.has_errors());
        assert_eq!(report.warning_count(), 4);
    }
}
