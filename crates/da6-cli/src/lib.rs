// NOTE: da6 Architecture Rationale
//
// Why an embedded catalog (not fetch from the site)?
// - The binary works offline and needs zero setup on first run
// - A JSON file (flag, env var or config) replaces it wholesale when the
//   content moves on; the embedded copy is only the last fallback
// - Trade-off: shipping content in the binary means a release per content
//   update, which matches how the portfolio itself is published
//
// Why a pure state-machine engine (not state in the widgets)?
// - Filtering, focus, the event wheel and the home rotation are plain
//   data transitions; keeping them terminal-free means the CLI and the
//   TUI share one behavior and the tests never touch a terminal
// - Trade-off: the TUI re-applies filters per frame, which is cheap at
//   catalog scale (tens of records)
//
// Why no async runtime?
// - One user, one keyboard, in-memory data: the only timer (home
//   autoplay) falls out of the input poll timeout
//
// Why view-models between handlers and output?
// - `--format json` must dump exactly what the plain view renders from,
//   so scripts never lag behind the human output

mod args;
mod commands;
pub mod context;
mod handlers;
pub mod presentation;
pub mod types;

pub use args::{
    BlogCommand, Cli, Commands, ContentCommand, GalleryCommand, NightCommand, ViewModeArgs,
};
pub use commands::run;
