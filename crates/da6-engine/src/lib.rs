// Engine module - pure logic over catalog collections
// This layer sits between the content schemas (types) and CLI presentation.
// Everything here is total over its inputs: empty results and clamped
// indices are valid outcomes, never errors.

pub mod filter;
pub mod nav;
pub mod tags;

pub use filter::{CatalogFilter, CatalogRecord, ALL_TAGS};
pub use nav::{Carousel, Focus, Rotation};
pub use tags::distinct_tags;
