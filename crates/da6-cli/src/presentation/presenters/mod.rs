//! Presenters are pure functions from domain data to view models. No
//! I/O, no terminal access, so every shape the renderers receive can be
//! asserted in plain unit tests.

pub mod blog;
pub mod content;
pub mod gallery;
pub mod home;
pub mod night;
pub mod tags;

pub use blog::{present_post_detail, present_post_list};
pub use content::{present_check, present_export, present_guidance, present_init};
pub use gallery::{present_photo_detail, present_photo_list};
pub use home::present_module_list;
pub use night::{present_event_detail, present_event_list};
pub use tags::present_tag_summary;
