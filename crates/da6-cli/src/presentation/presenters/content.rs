use std::path::Path;

use crate::presentation::view_models::{
    CheckViewModel, ExportViewModel, FindingEntry, Guidance, GuidanceViewModel, InitViewModel,
};
use da6_content::{CheckReport, ContentSource};
use da6_types::Catalog;

pub fn present_check(
    source: &ContentSource,
    catalog: &Catalog,
    report: &CheckReport,
) -> CheckViewModel {
    let findings = report
        .findings
        .iter()
        .map(|finding| FindingEntry {
            severity: finding.severity.to_string(),
            collection: finding.collection.clone(),
            record_id: finding.record_id.clone(),
            message: finding.message.clone(),
        })
        .collect();

    CheckViewModel {
        source: source.to_string(),
        record_count: catalog.record_count(),
        findings,
        error_count: report.error_count(),
        warning_count: report.warning_count(),
    }
}

pub fn present_export(destination: &Path, catalog: &Catalog) -> ExportViewModel {
    ExportViewModel {
        destination: destination.display().to_string(),
        record_count: catalog.record_count(),
    }
}

pub fn present_init(config_path: &Path, overwritten: bool) -> InitViewModel {
    InitViewModel {
        config_path: config_path.display().to_string(),
        overwritten,
        suggestions: vec![
            Guidance::new(
                "Point the catalog at your own content",
                "da6 --content ./catalog.json content check",
            ),
            Guidance::new("Open the browser", "da6 browse"),
        ],
    }
}

pub fn present_guidance(source: &ContentSource, catalog: &Catalog) -> GuidanceViewModel {
    GuidanceViewModel {
        source: source.to_string(),
        post_count: catalog.posts.len(),
        photo_count: catalog.photos.len(),
        event_count: catalog.events.len(),
        module_count: catalog.modules.len(),
        suggestions: vec![
            Guidance::new("Open the full-screen browser", "da6 browse"),
            Guidance::new("List blog posts", "da6 blog list"),
            Guidance::new("Search the gallery", "da6 gallery list --search 雨"),
            Guidance::new("See every tag", "da6 tags"),
        ],
    }
}
