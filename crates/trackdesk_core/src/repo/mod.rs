//! Persistence adapter abstractions and SQLite implementation.
//!
//! # Responsibility
//! - Define the string-keyed slot contract the tracker persists through.
//! - Isolate SQLite details from the entity store and mutation protocol.
//!
//! # Invariants
//! - Slot values are opaque blobs to this layer; (de)serialization happens
//!   above it.
//! - Repository APIs return semantic schema errors in addition to DB
//!   transport errors.

pub mod slot_repo;
