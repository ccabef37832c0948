//! Project filtering and search.
//!
//! # Responsibility
//! - Match projects by free-text search and status filter.
//!
//! # Invariants
//! - Filtering is stable: relative input order is preserved, never re-sorted.
//! - Both predicates are conjunctive; the empty term and the `all` filter
//!   each match everything.

use crate::model::project::{Project, ProjectStatus};

/// Status predicate for project filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    /// Sentinel matching every status.
    #[default]
    All,
    /// Exact match on one status.
    Only(ProjectStatus),
}

impl StatusFilter {
    /// Parses the `all` sentinel or one status wire token.
    pub fn parse(value: &str) -> Option<Self> {
        if value == "all" {
            return Some(Self::All);
        }
        ProjectStatus::parse(value).map(Self::Only)
    }

    /// Returns whether the given status passes this filter.
    pub fn matches(self, status: ProjectStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == status,
        }
    }
}

/// Filters projects by case-insensitive substring search over title and
/// description, AND exact status match.
///
/// Generic over the input iterator so an already-filtered result can be
/// re-filtered; doing so with the same parameters returns the same sequence.
pub fn filter_projects<'a, I>(
    projects: I,
    search_term: &str,
    status_filter: StatusFilter,
) -> Vec<&'a Project>
where
    I: IntoIterator<Item = &'a Project>,
{
    let needle = search_term.to_lowercase();
    projects
        .into_iter()
        .filter(|project| matches_search(project, &needle) && status_filter.matches(project.status))
        .collect()
}

fn matches_search(project: &Project, lowercase_needle: &str) -> bool {
    if lowercase_needle.is_empty() {
        return true;
    }
    project.title.to_lowercase().contains(lowercase_needle)
        || project.description.to_lowercase().contains(lowercase_needle)
}
