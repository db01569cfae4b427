use crate::presentation::view_models::TagSummaryViewModel;
use crate::types::SectionFilter;
use da6_engine::distinct_tags;
use da6_types::Catalog;

pub fn present_tag_summary(catalog: &Catalog, section: SectionFilter) -> TagSummaryViewModel {
    let tags = match section {
        SectionFilter::Blog => distinct_tags(&catalog.posts),
        SectionFilter::Gallery => distinct_tags(&catalog.photos),
        // Union keeps first-seen order across collections, posts first.
        SectionFilter::All => {
            let mut tags = distinct_tags(&catalog.posts);
            for tag in distinct_tags(&catalog.photos) {
                if !tags.contains(&tag) {
                    tags.push(tag);
                }
            }
            tags
        }
    };

    TagSummaryViewModel {
        section: section.to_string(),
        total: tags.len(),
        tags,
    }
}
