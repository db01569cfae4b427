use crate::filter::CatalogRecord;

/// Distinct tags across a collection, deduplicated, in order of first
/// appearance. Recomputed on demand; the data volumes never justify an
/// index structure.
pub fn distinct_tags<R: CatalogRecord>(records: &[R]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for record in records {
        for tag in record.tags() {
            if !seen.iter().any(|existing| existing == tag) {
                seen.push(tag.clone());
            }
        }
    }
    seen
}
