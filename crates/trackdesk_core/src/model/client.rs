//! Client domain model.
//!
//! # Responsibility
//! - Define the client record and its creation-boundary field bundle.
//!
//! # Invariants
//! - `id` is stable and never reused for another client.
//! - Clients have immutable identity; there is no update/delete operation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a client.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ClientId = Uuid;

/// A client of the service provider.
///
/// Referenced (never owned) by projects via
/// [`crate::model::project::Project::client_id`]. The reference is a tolerated
/// foreign key: it may dangle if the client was never created, and lookups
/// must treat absence as "unknown", not as an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    /// Stable global ID used for project references.
    pub id: ClientId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
}

/// Creation-boundary fields for a new client.
///
/// The presentation layer is responsible for non-emptiness validation; the
/// core accepts these fields as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
}

impl Client {
    /// Creates a new client with a generated stable ID.
    pub fn new(fields: ClientFields) -> Self {
        Self::with_id(Uuid::new_v4(), fields)
    }

    /// Creates a client with a caller-provided stable ID.
    ///
    /// Used by import paths where identity already exists externally.
    pub fn with_id(id: ClientId, fields: ClientFields) -> Self {
        Self {
            id,
            name: fields.name,
            email: fields.email,
            phone: fields.phone,
            company: fields.company,
        }
    }
}
