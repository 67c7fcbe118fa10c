//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `runtime.rs` — classify/assess/plan/export/session.
//! - `reference.rs` — matrix/levels/config.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate classification and rendering to `services/*`.
//! - Keep behavior and output schema stable.

pub mod reference;
pub mod runtime;

pub use reference::handle_reference_commands;
pub use runtime::handle_runtime_commands;

use crate::services::config::LoadedConfig;

/// Output settings after merging flags with the config file.
pub struct Ctx {
    pub json: bool,
    pub color: bool,
    pub config: LoadedConfig,
}
