//! Service layer containing the classification core and its helpers.
//!
//! ## Service map
//! - `plans.rs` — static plan table, total lookup by risk key.
//! - `classifier.rs` — ordered Z score / status rules producing a suggested key.
//! - `zscore.rs` — free-text Z score parsing.
//! - `selection.rs` — suggestion-then-override active level.
//! - `render.rs` — plan panel, matrix rows, plain-text/markdown export.
//! - `session.rs` — line-oriented interactive shell.
//! - `config.rs` — optional TOML config discovery and loading.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Classification and rendering are pure; side effects stay in commands.
//! - Keep command handlers thin; delegate to services.

pub mod classifier;
pub mod config;
pub mod output;
pub mod plans;
pub mod render;
pub mod selection;
pub mod session;
pub mod zscore;
