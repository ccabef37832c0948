//! Entity store and mutation protocol.
//!
//! # Responsibility
//! - Hold the session's authoritative Client/Project collections.
//! - Provide the only mutation path for clients, projects and tasks.
//! - Persist the affected collection slot on every mutation and notify
//!   registered observers exactly once per applied mutation.
//!
//! # Invariants
//! - Every mutation fully applies in memory before its persistence write is
//!   issued; no partially-applied mutation is observable.
//! - After any task mutation, `progress` equals the derived percentage.
//!   Manual overrides survive only until the next task mutation.
//! - A failed persistence write is surfaced to the caller but never rolls
//!   back the in-memory mutation; in-memory state stays authoritative.

use crate::model::client::{Client, ClientFields, ClientId};
use crate::model::project::{
    clamp_percent, Project, ProjectFields, ProjectId, ProjectStatus, Task, TaskId,
};
use crate::repo::slot_repo::{RepoError, SlotRepository};
use crate::service::progress::completion_percent;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Slot key holding the serialized client collection.
pub const CLIENTS_SLOT: &str = "clients";
/// Slot key holding the serialized project collection (with nested tasks).
pub const PROJECTS_SLOT: &str = "projects";

pub type TrackerResult<T> = Result<T, TrackerError>;

/// Error taxonomy for the mutation protocol.
#[derive(Debug)]
pub enum TrackerError {
    /// Mutation targeted a project id absent from the store. Nothing mutated.
    ProjectNotFound(ProjectId),
    /// Mutation targeted a task id absent from its project. Nothing mutated.
    TaskNotFound { project: ProjectId, task: TaskId },
    /// The storage write failed. The in-memory mutation was kept.
    Persistence(RepoError),
    /// A slot blob could not be encoded or decoded.
    Codec {
        slot: &'static str,
        source: serde_json::Error,
    },
}

impl Display for TrackerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ProjectNotFound(id) => write!(f, "project not found: {id}"),
            Self::TaskNotFound { project, task } => {
                write!(f, "task not found: {task} in project {project}")
            }
            Self::Persistence(err) => write!(f, "{err}"),
            Self::Codec { slot, source } => write!(f, "invalid `{slot}` slot blob: {source}"),
        }
    }
}

impl Error for TrackerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Persistence(err) => Some(err),
            Self::Codec { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<RepoError> for TrackerError {
    fn from(value: RepoError) -> Self {
        Self::Persistence(value)
    }
}

/// One applied mutation, delivered synchronously to observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationEvent {
    ClientAdded(ClientId),
    ProjectAdded(ProjectId),
    StatusChanged(ProjectId),
    ProgressOverridden(ProjectId),
    TaskAdded { project: ProjectId, task: TaskId },
    TaskToggled { project: ProjectId, task: TaskId },
}

/// Presentation-side listener seam for mutation events.
///
/// Observers are notified exactly once per applied in-memory mutation,
/// after the persistence write was attempted. NotFound no-ops emit nothing.
/// Persistence itself is a built-in effect of the protocol, not an observer,
/// so the store/storage consistency guarantee cannot be detached.
pub trait MutationObserver {
    fn on_mutation(&mut self, event: &MutationEvent);
}

/// In-memory entity store mediating all mutations for one session.
pub struct Tracker<R: SlotRepository> {
    repo: R,
    clients: Vec<Client>,
    projects: Vec<Project>,
    observers: Vec<Box<dyn MutationObserver>>,
}

impl<R: SlotRepository> std::fmt::Debug for Tracker<R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tracker")
            .field("clients", &self.clients)
            .field("projects", &self.projects)
            .finish_non_exhaustive()
    }
}

impl<R: SlotRepository> Tracker<R> {
    /// Creates an empty session store on top of the given slot repository.
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            clients: Vec::new(),
            projects: Vec::new(),
            observers: Vec::new(),
        }
    }

    /// Restores a session from the persisted slots.
    ///
    /// A missing slot yields an empty collection; an undecodable slot is a
    /// [`TrackerError::Codec`] error rather than silently dropped data.
    pub fn load(repo: R) -> TrackerResult<Self> {
        let clients = match repo.load_slot(CLIENTS_SLOT)? {
            Some(blob) => decode(CLIENTS_SLOT, &blob)?,
            None => Vec::new(),
        };
        let projects: Vec<Project> = match repo.load_slot(PROJECTS_SLOT)? {
            Some(blob) => decode(PROJECTS_SLOT, &blob)?,
            None => Vec::new(),
        };

        info!(
            "event=state_load module=tracker status=ok clients={} projects={}",
            clients.len(),
            projects.len()
        );

        Ok(Self {
            repo,
            clients,
            projects,
            observers: Vec::new(),
        })
    }

    /// Registers a mutation observer for the rest of this session.
    pub fn add_observer(&mut self, observer: Box<dyn MutationObserver>) {
        self.observers.push(observer);
    }

    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn client(&self, id: ClientId) -> Option<&Client> {
        self.clients.iter().find(|client| client.id == id)
    }

    pub fn project(&self, id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|project| project.id == id)
    }

    /// Resolves a project's client reference.
    ///
    /// `None` is the explicit "unknown client" sentinel: the reference is a
    /// tolerated foreign key and may dangle without being an error.
    pub fn client_of(&self, project: &Project) -> Option<&Client> {
        self.client(project.client_id)
    }

    /// Returns the first `limit` projects in insertion order.
    pub fn recent_projects(&self, limit: usize) -> &[Project] {
        &self.projects[..self.projects.len().min(limit)]
    }

    /// Returns all projects referencing the given client, insertion order.
    pub fn projects_for_client(&self, client_id: ClientId) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|project| project.client_id == client_id)
            .collect()
    }

    /// Creates a client with a fresh id and persists the client collection.
    ///
    /// Identical field values on repeated calls still yield distinct clients.
    pub fn add_client(&mut self, fields: ClientFields) -> TrackerResult<Client> {
        let client = Client::new(fields);
        self.clients.push(client.clone());
        let persisted = self.persist_clients();
        self.notify(MutationEvent::ClientAdded(client.id));
        persisted.map(|()| client)
    }

    /// Creates a project with a fresh id, `not-started` status, zero progress
    /// and an empty task list, then persists the project collection.
    pub fn add_project(&mut self, fields: ProjectFields) -> TrackerResult<Project> {
        let project = Project::new(fields);
        self.projects.push(project.clone());
        let persisted = self.persist_projects();
        self.notify(MutationEvent::ProjectAdded(project.id));
        persisted.map(|()| project)
    }

    /// Replaces a project's status. Any status is reachable from any other.
    pub fn set_project_status(
        &mut self,
        project_id: ProjectId,
        status: ProjectStatus,
    ) -> TrackerResult<()> {
        let project = self.project_mut(project_id)?;
        project.status = status;
        let persisted = self.persist_projects();
        self.notify(MutationEvent::StatusChanged(project_id));
        persisted
    }

    /// Manually overrides a project's progress, bypassing derivation.
    ///
    /// Out-of-range input is clamped to `0..=100`, never rejected. The
    /// override holds until the next task mutation recomputes progress.
    pub fn set_project_progress(
        &mut self,
        project_id: ProjectId,
        percent: i64,
    ) -> TrackerResult<()> {
        let project = self.project_mut(project_id)?;
        project.progress = clamp_percent(percent);
        let persisted = self.persist_projects();
        self.notify(MutationEvent::ProgressOverridden(project_id));
        persisted
    }

    /// Appends an open task to a project and recomputes its progress.
    pub fn add_task(
        &mut self,
        project_id: ProjectId,
        title: impl Into<String>,
        due_date: impl Into<String>,
    ) -> TrackerResult<Task> {
        let task = Task::new(title, due_date);
        let project = self.project_mut(project_id)?;
        project.tasks.push(task.clone());
        if let Some(percent) = completion_percent(&project.tasks) {
            project.progress = percent;
        }
        let persisted = self.persist_projects();
        self.notify(MutationEvent::TaskAdded {
            project: project_id,
            task: task.id,
        });
        persisted.map(|()| task)
    }

    /// Flips a task's completed flag and recomputes the project's progress.
    ///
    /// Leaves the store untouched when either id is absent.
    pub fn toggle_task(&mut self, project_id: ProjectId, task_id: TaskId) -> TrackerResult<()> {
        let project = self.project_mut(project_id)?;
        let task = project
            .tasks
            .iter_mut()
            .find(|task| task.id == task_id)
            .ok_or(TrackerError::TaskNotFound {
                project: project_id,
                task: task_id,
            })?;
        task.completed = !task.completed;
        if let Some(percent) = completion_percent(&project.tasks) {
            project.progress = percent;
        }
        let persisted = self.persist_projects();
        self.notify(MutationEvent::TaskToggled {
            project: project_id,
            task: task_id,
        });
        persisted
    }

    /// Writes both collection slots. Teardown path for session shutdown.
    pub fn flush(&self) -> TrackerResult<()> {
        self.persist_clients()?;
        self.persist_projects()?;
        Ok(())
    }

    fn project_mut(&mut self, project_id: ProjectId) -> TrackerResult<&mut Project> {
        self.projects
            .iter_mut()
            .find(|project| project.id == project_id)
            .ok_or(TrackerError::ProjectNotFound(project_id))
    }

    fn persist_clients(&self) -> TrackerResult<()> {
        let blob = encode(CLIENTS_SLOT, &self.clients)?;
        self.save_slot(CLIENTS_SLOT, &blob)
    }

    fn persist_projects(&self) -> TrackerResult<()> {
        let blob = encode(PROJECTS_SLOT, &self.projects)?;
        self.save_slot(PROJECTS_SLOT, &blob)
    }

    fn save_slot(&self, slot: &'static str, blob: &str) -> TrackerResult<()> {
        if let Err(err) = self.repo.save_slot(slot, blob) {
            warn!("event=state_save module=tracker status=error slot={slot} error={err}");
            return Err(err.into());
        }
        Ok(())
    }

    fn notify(&mut self, event: MutationEvent) {
        for observer in &mut self.observers {
            observer.on_mutation(&event);
        }
    }
}

fn encode<T: serde::Serialize>(slot: &'static str, value: &T) -> TrackerResult<String> {
    serde_json::to_string(value).map_err(|source| TrackerError::Codec { slot, source })
}

fn decode<T: serde::de::DeserializeOwned>(slot: &'static str, blob: &str) -> TrackerResult<T> {
    serde_json::from_str(blob).map_err(|source| TrackerError::Codec { slot, source })
}
