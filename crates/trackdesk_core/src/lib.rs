//! Core domain logic for TrackDesk.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod query;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::client::{Client, ClientFields, ClientId};
pub use model::project::{
    clamp_percent, Priority, Project, ProjectFields, ProjectId, ProjectStatus, Task, TaskId,
};
pub use query::filter::{filter_projects, StatusFilter};
pub use query::stats::{compute_stats, TrackerStats};
pub use repo::slot_repo::{RepoError, RepoResult, SlotRepository, SqliteSlotRepository};
pub use service::progress::completion_percent;
pub use service::tracker::{
    MutationEvent, MutationObserver, Tracker, TrackerError, TrackerResult, CLIENTS_SLOT,
    PROJECTS_SLOT,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
