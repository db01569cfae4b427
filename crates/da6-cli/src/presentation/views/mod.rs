//! Plain-text views: one `Display` impl per view model, dispatching on
//! [`ViewMode`](crate::presentation::view_models::ViewMode) for density.
//! TUI widget views live under [`tui`].

pub mod blog;
pub mod content;
pub mod gallery;
pub mod guidance;
pub mod home;
pub mod night;
pub mod tags;
pub mod tui;

pub use blog::{PostDetailView, PostListView};
pub use content::{CheckReportView, ExportView, InitView};
pub use gallery::{PhotoDetailView, PhotoListView};
pub use guidance::GuidanceView;
pub use home::ModuleListView;
pub use night::{EventDetailView, EventListView};
pub use tags::TagSummaryView;
