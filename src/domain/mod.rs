//! Shared data model layer (types/constants only).
//!
//! ## Purpose
//! - Keep the risk enumeration, plan record and report structs in one place.
//! - Make JSON output schema changes explicit and reviewable.
//!
//! ## Files
//! - `models.rs` — risk keys, coronary status, plan record, report/output structs.
//! - `constants.rs` — stable display strings (placeholders, footers).
//! - `error.rs` — typed parse errors for user-supplied values.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem side effects.
//!
//! ## Compatibility note
//! Changes in these structs affect `--json` outputs. Keep schema-impacting
//! changes synchronized with `docs/contracts/*`.

pub mod constants;
pub mod error;
pub mod models;
