pub mod blog;
pub mod common;
pub mod content;
pub mod gallery;
pub mod home;
pub mod night;
pub mod tags;

pub use blog::{PostDetailViewModel, PostEntry, PostListViewModel};
pub use common::{FilterSummary, Guidance, ViewMode};
pub use content::{
    CheckViewModel, ExportViewModel, FindingEntry, GuidanceViewModel, InitViewModel,
};
pub use gallery::{PhotoDetailViewModel, PhotoEntry, PhotoListViewModel};
pub use home::{ModuleEntry, ModuleListViewModel};
pub use night::{EventDetailViewModel, EventEntry, EventListViewModel};
pub use tags::TagSummaryViewModel;
