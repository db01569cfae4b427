//! # Presentation Layer
//!
//! This module implements the **User Interface** logic for the CLI.
//! It is designed using an adaptation of the **MVVM (Model-View-ViewModel)**
//! pattern shared between the console renderer and the interactive TUI.
//!
//! ## 🏗️ Architecture & Data Flow
//!
//! ### For Console Output (JSON/Text):
//! The data flow is strictly unidirectional.
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> [ serde_json ] --> Output
//!    (Controller)      (Converter)       (Data)          (Driver)  ==(Text)==> [ View ] --> Output
//!                                                                                 (Layout)
//! ```
//!
//! ### For the Interactive TUI:
//! The engine state machines (filter, focus, carousel, rotation) are the
//! UI state. The TUI renderer owns them, feeds key events into them, and
//! per frame hands read-only slices of the catalog plus state to Widget
//! views that only draw.
//!
//! ```text
//! [ Catalog ] + [ Engine State ] --> [ TuiRenderer (loop) ] --> [ Widget Views ]
//!                      ^                      |
//!                      +---- key events ------+
//! ```
//!
//! ---
//!
//! ## 🌟 Golden Rules
//!
//! ### 1. The JSON Test (Raw Data Strategy) 🧪
//! **ViewModel must contain "Raw Data", not "Formatted Strings".**
//! * ❌ Bad: `struct Vm { read_time: "about five minutes" }`
//! * ✅ Good: `struct Vm { read_time: "5 min" /* as authored */, likes: 89 }`
//! * **Reason:** JSON output is an API. Clients need values, not layout.
//!
//! ### 2. The Density Rule 🔍
//! `ViewMode` defines **Information Density**, not Shape.
//! * **Minimal:** IDs only. (For pipes/scripts)
//! * **Compact:** One line per item. (Default for humans)
//! * **Verbose:** All fields, including excerpts and image URLs.
//!
//! ### 3. The Schema Stability Rule 📦
//! **JSON Output is always "Full Data".**
//! * `--format json` ignores `ViewMode`. It always dumps the complete ViewModel.
//! * `ViewMode` only affects the Text/Console rendering.
//!
//! ### 4. Index Safety 🎮
//! Trust the State, but Verify against Data.
//! * Cursor and wheel positions are clamped before every render:
//!   `selected = min(state.cursor, list.len() - 1)`
//! * The engine machines already clamp on transition; the views clamp
//!   again because the filtered list may have shrunk since.

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::ConsoleRenderer;
pub use view_models::ViewMode;
