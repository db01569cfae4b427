pub mod blog;
pub mod catalog;
pub mod gallery;
pub mod home;
pub mod night;

pub use blog::{BlogMood, BlogPost};
pub use catalog::Catalog;
pub use gallery::Photo;
pub use home::{HomeModule, Section};
pub use night::{NightEvent, NightMood};
