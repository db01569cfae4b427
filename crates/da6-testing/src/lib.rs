//! Testing infrastructure for da6 integration tests.
//!
//! This crate provides utilities for writing robust integration tests:
//! - `TestWorld`: Fluent interface for declarative test setup
//! - `assertions`: Custom assertions over the CLI's JSON output
//! - `fixtures`: Small catalogs with known contents

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use world::TestWorld;
