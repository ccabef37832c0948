//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate model mutations, progress derivation and slot persistence
//!   behind one mutation protocol.
//! - Keep UI layers decoupled from storage details.

pub mod progress;
pub mod tracker;
