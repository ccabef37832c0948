use rusqlite::Connection;
use trackdesk_core::db::migrations::latest_version;
use trackdesk_core::db::{open_db, open_db_in_memory};
use trackdesk_core::{
    ClientFields, Priority, ProjectFields, RepoError, SlotRepository, SqliteSlotRepository,
    Tracker, TrackerError, CLIENTS_SLOT, PROJECTS_SLOT,
};
use uuid::Uuid;

fn client_fields() -> ClientFields {
    ClientFields {
        name: "Ada North".to_string(),
        email: "ada@north.example".to_string(),
        phone: "555-0100".to_string(),
        company: "Northwind".to_string(),
    }
}

fn project_fields(client_id: Uuid) -> ProjectFields {
    ProjectFields {
        client_id,
        title: "Brand refresh".to_string(),
        description: "Logo and style guide".to_string(),
        priority: Priority::Medium,
        start_date: "2026-08-01".to_string(),
        due_date: "2026-11-30".to_string(),
    }
}

#[test]
fn save_then_load_returns_the_saved_blob() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSlotRepository::try_new(&conn).unwrap();

    repo.save_slot("clients", "[]").unwrap();
    assert_eq!(repo.load_slot("clients").unwrap().as_deref(), Some("[]"));
}

#[test]
fn save_replaces_the_previous_value() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSlotRepository::try_new(&conn).unwrap();

    repo.save_slot("projects", "first").unwrap();
    repo.save_slot("projects", "second").unwrap();

    assert_eq!(
        repo.load_slot("projects").unwrap().as_deref(),
        Some("second")
    );
}

#[test]
fn loading_a_missing_slot_returns_none() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSlotRepository::try_new(&conn).unwrap();

    assert_eq!(repo.load_slot("unknown").unwrap(), None);
}

#[test]
fn tracker_session_round_trips_through_a_database_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("trackdesk.db");

    let (client_id, project_id, task_id);
    {
        let conn = open_db(&path).unwrap();
        let mut tracker = Tracker::load(SqliteSlotRepository::try_new(&conn).unwrap()).unwrap();
        assert!(tracker.clients().is_empty());
        assert!(tracker.projects().is_empty());

        let client = tracker.add_client(client_fields()).unwrap();
        let project = tracker.add_project(project_fields(client.id)).unwrap();
        let task = tracker.add_task(project.id, "kickoff", "2026-08-15").unwrap();
        tracker.toggle_task(project.id, task.id).unwrap();
        tracker.set_project_progress(project.id, 90).unwrap();

        client_id = client.id;
        project_id = project.id;
        task_id = task.id;
    }

    let conn = open_db(&path).unwrap();
    let restored = Tracker::load(SqliteSlotRepository::try_new(&conn).unwrap()).unwrap();

    assert_eq!(restored.clients().len(), 1);
    assert_eq!(restored.clients()[0].id, client_id);

    let project = restored.project(project_id).unwrap();
    assert_eq!(project.progress, 90);
    assert_eq!(project.tasks.len(), 1);
    let task = project.task(task_id).unwrap();
    assert!(task.completed);
    assert_eq!(task.due_date, "2026-08-15");
}

#[test]
fn flush_writes_both_slots() {
    let conn = open_db_in_memory().unwrap();
    let tracker = Tracker::new(SqliteSlotRepository::try_new(&conn).unwrap());
    tracker.flush().unwrap();

    let repo = SqliteSlotRepository::try_new(&conn).unwrap();
    assert_eq!(repo.load_slot(CLIENTS_SLOT).unwrap().as_deref(), Some("[]"));
    assert_eq!(repo.load_slot(PROJECTS_SLOT).unwrap().as_deref(), Some("[]"));
}

#[test]
fn undecodable_slot_blob_is_a_codec_error() {
    let conn = open_db_in_memory().unwrap();
    {
        let repo = SqliteSlotRepository::try_new(&conn).unwrap();
        repo.save_slot(PROJECTS_SLOT, "not json").unwrap();
    }

    let err = Tracker::load(SqliteSlotRepository::try_new(&conn).unwrap()).unwrap_err();
    assert!(matches!(
        err,
        TrackerError::Codec {
            slot: "projects",
            ..
        }
    ));
}

#[test]
fn repository_rejects_uninitialized_connection() {
    let conn = Connection::open_in_memory().unwrap();

    match SqliteSlotRepository::try_new(&conn) {
        Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version: 0,
        }) => assert!(expected_version > 0),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected uninitialized connection error"),
    }
}

#[test]
fn repository_rejects_connection_without_required_table() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    let result = SqliteSlotRepository::try_new(&conn);
    assert!(matches!(
        result,
        Err(RepoError::MissingRequiredTable("state_slots"))
    ));
}

#[test]
fn repository_rejects_connection_missing_required_column() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE state_slots (
            key TEXT PRIMARY KEY NOT NULL,
            value TEXT NOT NULL
        );",
    )
    .unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    let result = SqliteSlotRepository::try_new(&conn);
    assert!(matches!(
        result,
        Err(RepoError::MissingRequiredColumn {
            table: "state_slots",
            column: "updated_at"
        })
    ));
}
