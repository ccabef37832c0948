//! On-demand dashboard aggregates.
//!
//! # Responsibility
//! - Compute summary counts over the full client/project collections.
//!
//! # Invariants
//! - Never cached: results always reflect the collections passed in.

use crate::model::client::Client;
use crate::model::project::{Project, ProjectStatus};

/// Summary counts shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TrackerStats {
    pub total_projects: usize,
    /// Projects with status `in-progress`.
    pub active_projects: usize,
    pub completed_projects: usize,
    pub total_clients: usize,
}

/// Computes summary counts for the given collections.
pub fn compute_stats(clients: &[Client], projects: &[Project]) -> TrackerStats {
    TrackerStats {
        total_projects: projects.len(),
        active_projects: projects
            .iter()
            .filter(|project| project.status == ProjectStatus::InProgress)
            .count(),
        completed_projects: projects
            .iter()
            .filter(|project| project.status == ProjectStatus::Completed)
            .count(),
        total_clients: clients.len(),
    }
}
