//! Progress derivation.
//!
//! # Responsibility
//! - Map a project's task list to a completion percentage.
//!
//! # Invariants
//! - Pure: no store access, independently testable.
//! - Results are always integers in `0..=100`.

use crate::model::project::Task;

/// Derives the completion percentage for a task list.
///
/// Returns `None` for an empty list: no derivation applies and the caller
/// must retain the prior progress value (this is what preserves manual
/// overrides on projects without tasks). Otherwise returns
/// `round(100 * completed / total)`, rounding halves away from zero
/// (round-half-up for these non-negative ratios).
pub fn completion_percent(tasks: &[Task]) -> Option<u8> {
    if tasks.is_empty() {
        return None;
    }

    let completed = tasks.iter().filter(|task| task.completed).count();
    let percent = completed as f64 / tasks.len() as f64 * 100.0;
    Some(percent.round() as u8)
}
