//! Read-only queries over the entity collections.
//!
//! # Responsibility
//! - Expose filtering/search over projects and on-demand aggregates.
//! - Keep result shaping pure and store-independent.

pub mod filter;
pub mod stats;
