// Content layer - where the catalog comes from and whether it is sound.
// The engine and presentation layers never touch the filesystem; this
// crate resolves a source (embedded default, or a JSON file named by
// flag, environment or config), loads it, and validates its invariants.

mod builtin;
pub mod config;
pub mod error;
pub mod source;
pub mod validate;

pub use builtin::builtin_catalog;
pub use config::{resolve_data_dir, Config, PlaybackConfig};
pub use error::{Error, Result};
pub use source::{ContentSource, CONTENT_ENV_VAR};
pub use validate::{check_catalog, CheckReport, Finding, Severity};
