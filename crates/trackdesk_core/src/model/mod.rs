//! Domain model for the tracker core.
//!
//! # Responsibility
//! - Define the canonical Client/Project/Task records shared by all layers.
//! - Keep wire-format decisions (serde field naming) next to the types.
//!
//! # Invariants
//! - Every entity is identified by a stable uuid generated at creation.
//! - A project's `tasks` sequence preserves insertion order.
//! - `Project::progress` is always in `0..=100`.

pub mod client;
pub mod project;
