use clap::Parser;
use osctl_client::cli::Cli;
use osctl_client::commands::{self, Context};
use osctl_client::inmemory::InMemoryCloud;
use osctl_client::output::{Console, SharedBuffer};
use osctl_client::{ClientError, Result};
use osctl_core::compute::Server;
use osctl_core::identity::{AssignmentTarget, Domain, Project, Role, User};
use osctl_core::ServiceError;
use serde_json::{json, Value};

const SERVER_ID: &str = "9e5b8ad2-4d4b-4f4f-a4c5-1b0a3f3c6d11";

fn beatles() -> InMemoryCloud {
    InMemoryCloud::new()
        .with_users([
            User::new("a1", "paul").with_enabled(true),
            User::new("b2", "john").with_email("john@applecorps.com"),
        ])
        .with_roles([Role::new("r1", "admin"), Role::new("r2", "member")])
        .with_projects([Project::new("p1", "beatles")])
        .with_domains([Domain::new("default", "Default"), Domain::new("d2", "wings")])
        .with_servers([Server::new(SERVER_ID, "web-01")
            .with_status("ACTIVE")
            .with_address("private", "10.0.0.3")
            .with_address("public", "172.24.4.10")])
}

struct Output {
    result: Result<()>,
    stdout: String,
    stderr: String,
}

impl Output {
    fn json(&self) -> Value {
        serde_json::from_str(&self.stdout).unwrap()
    }
}

async fn osctl(cloud: &InMemoryCloud, args: &[&str]) -> Output {
    let cli = Cli::try_parse_from(std::iter::once("osctl").chain(args.iter().copied())).unwrap();
    let stdout = SharedBuffer::new();
    let stderr = SharedBuffer::new();
    let console = Console::new(
        cli.global.format,
        cli.global.quiet,
        Box::new(stdout.clone()),
        Box::new(stderr.clone()),
    );
    let mut ctx = Context::new(cloud, cli.global.os_default_domain.clone(), console);

    let result = commands::run(cli.command, &mut ctx).await;

    Output {
        result,
        stdout: stdout.contents(),
        stderr: stderr.contents(),
    }
}

fn service_error(output: Output) -> ServiceError {
    match output.result {
        Err(ClientError::Service(e)) => e,
        other => panic!("expected service error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_user_show_by_name() {
    let cloud = beatles();

    let output = osctl(&cloud, &["user", "show", "paul", "--format", "json"]).await;

    output.result.as_ref().unwrap();
    assert_eq!(
        output.json(),
        json!({"enabled": true, "id": "a1", "name": "paul"})
    );
}

#[tokio::test]
async fn test_user_list_long_as_table() {
    let cloud = beatles();

    let output = osctl(&cloud, &["user", "list", "--long"]).await;

    output.result.as_ref().unwrap();
    assert!(output.stdout.contains("Project Id"));
    assert!(output.stdout.contains("john@applecorps.com"));
    assert!(output.stdout.contains("True"));
}

#[tokio::test]
async fn test_user_set_without_flags_makes_no_calls() {
    let cloud = beatles();

    let output = osctl(&cloud, &["user", "set", "paul"]).await;

    output.result.as_ref().unwrap();
    assert_eq!(output.stderr, "User not updated, no arguments present\n");
    assert!(cloud.calls().await.is_empty());
}

#[tokio::test]
async fn test_user_set_updates_resolved_user() {
    let cloud = beatles();

    let output = osctl(
        &cloud,
        &["user", "set", "paul", "--email", "paul@applecorps.com", "--project", "beatles"],
    )
    .await;

    output.result.as_ref().unwrap();
    assert_eq!(output.stdout, "Updated user a1\n");
    let user = cloud.user("a1").await.unwrap();
    assert_eq!(user.email.as_deref(), Some("paul@applecorps.com"));
    assert_eq!(user.project_id.as_deref(), Some("p1"));
}

#[tokio::test]
async fn test_user_set_disable() {
    let cloud = beatles();

    osctl(&cloud, &["user", "set", "a1", "--disable"])
        .await
        .result
        .unwrap();

    assert_eq!(cloud.user("a1").await.unwrap().enabled, Some(false));
}

#[tokio::test]
async fn test_user_create_resolves_project() {
    let cloud = beatles();

    let output = osctl(
        &cloud,
        &["user", "create", "ringo", "--project", "beatles", "--format", "json"],
    )
    .await;

    output.result.as_ref().unwrap();
    let created = output.json();
    assert_eq!(created["name"], "ringo");
    assert_eq!(created["project_id"], "p1");
    assert_eq!(created["enabled"], true);
}

#[tokio::test]
async fn test_user_create_with_unknown_project_creates_nothing() {
    let cloud = beatles();

    let output = osctl(&cloud, &["user", "create", "ringo", "--project", "wings"]).await;

    assert_eq!(
        service_error(output).to_string(),
        "No project with a name or ID of 'wings' exists."
    );
    assert!(!cloud
        .calls()
        .await
        .iter()
        .any(|call| call.starts_with("create user")));
}

#[tokio::test]
async fn test_user_delete_quiet() {
    let cloud = beatles();

    let output = osctl(&cloud, &["user", "delete", "john", "--quiet"]).await;

    output.result.as_ref().unwrap();
    assert_eq!(output.stdout, "");
    assert_eq!(cloud.user("b2").await, None);
}

#[tokio::test]
async fn test_unknown_user_is_not_found() {
    let cloud = beatles();

    let output = osctl(&cloud, &["user", "show", "ringo"]).await;

    assert_eq!(
        service_error(output),
        ServiceError::NotFound {
            kind: "user",
            token: "ringo".to_string()
        }
    );
}

#[tokio::test]
async fn test_duplicate_names_are_ambiguous() {
    let cloud = InMemoryCloud::new().with_users([User::new("a1", "paul"), User::new("c3", "paul")]);

    let output = osctl(&cloud, &["user", "show", "paul"]).await;

    assert!(matches!(
        service_error(output),
        ServiceError::Ambiguous { kind: "user", .. }
    ));
}

#[tokio::test]
async fn test_user_list_role_requires_user() {
    let cloud = beatles();

    let output = osctl(&cloud, &["user", "list", "--role"]).await;

    assert!(matches!(service_error(output), ServiceError::Validation(_)));
    assert!(cloud.calls().await.is_empty());
}

#[tokio::test]
async fn test_user_roles_default_to_configured_domain() {
    let cloud = beatles().with_assignments([(
        "r1",
        "a1",
        AssignmentTarget::Domain("default".into()),
    )]);

    let output = osctl(
        &cloud,
        &["user", "list", "paul", "--role", "--format", "json"],
    )
    .await;

    output.result.as_ref().unwrap();
    assert_eq!(
        output.json(),
        json!([{"ID": "r1", "Name": "admin", "Domain": "Default", "User": "paul"}])
    );
}

#[tokio::test]
async fn test_default_domain_option_changes_scope() {
    let cloud = beatles().with_assignments([(
        "r2",
        "a1",
        AssignmentTarget::Domain("d2".into()),
    )]);

    let output = osctl(
        &cloud,
        &[
            "role",
            "list",
            "--user",
            "paul",
            "--os-default-domain",
            "wings",
            "--format",
            "json",
        ],
    )
    .await;

    output.result.as_ref().unwrap();
    assert_eq!(output.json()[0]["Name"], "member");
    assert_eq!(output.json()[0]["Domain"], "wings");
}

#[tokio::test]
async fn test_role_add_and_list_on_project() {
    let cloud = beatles();
    let target = AssignmentTarget::Project("p1".to_string());

    osctl(&cloud, &["role", "add", "admin", "--user", "paul", "--project", "beatles"])
        .await
        .result
        .unwrap();
    assert!(cloud.is_granted("r1", "a1", &target).await);

    let output = osctl(
        &cloud,
        &["role", "list", "--user", "paul", "--project", "beatles", "--format", "json"],
    )
    .await;

    output.result.as_ref().unwrap();
    assert_eq!(
        output.json(),
        json!([{"ID": "r1", "Name": "admin", "Project": "beatles", "User": "paul"}])
    );
}

#[tokio::test]
async fn test_role_remove_on_domain() {
    let target = AssignmentTarget::Domain("d2".to_string());
    let cloud = beatles().with_assignments([("r2", "b2", target.clone())]);

    let output = osctl(&cloud, &["role", "remove", "member", "--user", "john", "--domain", "wings"]).await;

    output.result.as_ref().unwrap();
    assert_eq!(output.stdout, "Removed role member from user john\n");
    assert!(!cloud.is_granted("r2", "b2", &target).await);
}

#[tokio::test]
async fn test_role_create_and_delete() {
    let cloud = beatles();

    let output = osctl(&cloud, &["role", "create", "reader", "--format", "json"]).await;
    output.result.as_ref().unwrap();
    let id = output.json()["id"].as_str().unwrap().to_string();

    let output = osctl(&cloud, &["role", "delete", "reader"]).await;
    output.result.as_ref().unwrap();
    assert_eq!(output.stdout, format!("Deleted role {}\n", id));
}

#[tokio::test]
async fn test_project_and_domain_listings() {
    let cloud = beatles();

    let projects = osctl(&cloud, &["project", "list", "--format", "json"]).await;
    projects.result.as_ref().unwrap();
    assert_eq!(projects.json(), json!([{"ID": "p1", "Name": "beatles"}]));

    let domains = osctl(&cloud, &["domain", "show", "wings", "--format", "json"]).await;
    domains.result.as_ref().unwrap();
    assert_eq!(domains.json(), json!({"id": "d2", "name": "wings"}));
}

#[tokio::test]
async fn test_server_list_formats_networks() {
    let cloud = beatles();

    let output = osctl(&cloud, &["server", "list", "--format", "json"]).await;

    output.result.as_ref().unwrap();
    assert_eq!(
        output.json(),
        json!([{
            "ID": SERVER_ID,
            "Name": "web-01",
            "Status": "ACTIVE",
            "Networks": "private=10.0.0.3; public=172.24.4.10"
        }])
    );
}

#[tokio::test]
async fn test_server_show_by_name_skips_get() {
    let cloud = beatles();

    let output = osctl(&cloud, &["server", "show", "web-01", "--format", "json"]).await;

    output.result.as_ref().unwrap();
    assert_eq!(output.json()["id"], SERVER_ID);
    assert_eq!(cloud.calls().await, vec!["list servers"]);
}
