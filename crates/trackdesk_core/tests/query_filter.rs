use trackdesk_core::{
    compute_stats, filter_projects, Client, ClientFields, Priority, Project, ProjectFields,
    ProjectStatus, StatusFilter,
};
use uuid::Uuid;

fn project(title: &str, description: &str, status: ProjectStatus) -> Project {
    let mut project = Project::new(ProjectFields {
        client_id: Uuid::new_v4(),
        title: title.to_string(),
        description: description.to_string(),
        priority: Priority::Low,
        start_date: "2026-08-01".to_string(),
        due_date: "2026-12-01".to_string(),
    });
    project.status = status;
    project
}

fn sample_projects() -> Vec<Project> {
    vec![
        project(
            "Website redesign",
            "Marketing site refresh",
            ProjectStatus::InProgress,
        ),
        project(
            "Mobile app",
            "Customer portal for iOS",
            ProjectStatus::NotStarted,
        ),
        project(
            "SEO audit",
            "Search ranking for the website",
            ProjectStatus::Completed,
        ),
        project("Brand kit", "Logo and colors", ProjectStatus::InProgress),
    ]
}

#[test]
fn empty_term_and_all_filter_return_everything_in_order() {
    let projects = sample_projects();
    let filtered = filter_projects(&projects, "", StatusFilter::All);

    assert_eq!(filtered.len(), projects.len());
    for (kept, original) in filtered.iter().zip(&projects) {
        assert_eq!(*kept, original);
    }
}

#[test]
fn search_matches_title_or_description_case_insensitively() {
    let projects = sample_projects();

    let by_title = filter_projects(&projects, "WEBSITE", StatusFilter::All);
    let titles: Vec<_> = by_title.iter().map(|p| p.title.as_str()).collect();
    // "Website redesign" by title, "SEO audit" by description.
    assert_eq!(titles, vec!["Website redesign", "SEO audit"]);

    let by_description = filter_projects(&projects, "ios", StatusFilter::All);
    assert_eq!(by_description.len(), 1);
    assert_eq!(by_description[0].title, "Mobile app");
}

#[test]
fn predicates_are_conjunctive() {
    let projects = sample_projects();

    let filtered = filter_projects(
        &projects,
        "website",
        StatusFilter::Only(ProjectStatus::InProgress),
    );
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].title, "Website redesign");
}

#[test]
fn status_filter_alone_is_exact_and_order_preserving() {
    let projects = sample_projects();

    let filtered = filter_projects(&projects, "", StatusFilter::Only(ProjectStatus::InProgress));
    let titles: Vec<_> = filtered.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["Website redesign", "Brand kit"]);
}

#[test]
fn filtering_is_idempotent() {
    let projects = sample_projects();
    let filter = StatusFilter::Only(ProjectStatus::InProgress);

    let once = filter_projects(&projects, "brand", filter);
    let twice = filter_projects(once.iter().copied(), "brand", filter);

    assert_eq!(once, twice);
}

#[test]
fn no_match_returns_empty() {
    let projects = sample_projects();
    assert!(filter_projects(&projects, "nonexistent term", StatusFilter::All).is_empty());
}

#[test]
fn stats_reflect_current_collections() {
    let projects = sample_projects();
    let clients = vec![
        Client::new(ClientFields {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            phone: "555-0100".to_string(),
            company: "Northwind".to_string(),
        }),
        Client::new(ClientFields {
            name: "Grace".to_string(),
            email: "grace@example.com".to_string(),
            phone: "555-0101".to_string(),
            company: "Contoso".to_string(),
        }),
    ];

    let stats = compute_stats(&clients, &projects);
    assert_eq!(stats.total_projects, 4);
    assert_eq!(stats.active_projects, 2);
    assert_eq!(stats.completed_projects, 1);
    assert_eq!(stats.total_clients, 2);

    let empty = compute_stats(&[], &[]);
    assert_eq!(empty.total_projects, 0);
    assert_eq!(empty.total_clients, 0);
}
