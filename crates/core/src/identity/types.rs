use serde::{Deserialize, Serialize};

use crate::resource::{FieldValue, Fields, Resource};
use crate::serde::deserialize_optional_string;

/// An identity service user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain_id: Option<String>,
    /// Default project of the user.
    #[serde(
        rename = "default_project_id",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_optional_string"
    )]
    pub project_id: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_optional_string"
    )]
    pub email: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_optional_string"
    )]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

impl User {
    /// Creates a user with only an ID and a name.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            domain_id: None,
            project_id: None,
            email: None,
            description: None,
            enabled: None,
        }
    }

    /// Sets the owning domain.
    pub fn with_domain_id(mut self, domain_id: impl Into<String>) -> Self {
        self.domain_id = Some(domain_id.into());
        self
    }

    /// Sets the default project.
    pub fn with_project_id(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }

    /// Sets the email address.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the enabled flag.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }
}

impl Resource for User {
    const KIND: &'static str = "user";

    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Fields for User {
    const FIELDS: &'static [&'static str] = &[
        "id",
        "name",
        "domain_id",
        "project_id",
        "email",
        "description",
        "enabled",
    ];

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "id" => Some(self.id.as_str().into()),
            "name" => Some(self.name.as_str().into()),
            "domain_id" => FieldValue::text(self.domain_id.as_deref()),
            "project_id" => FieldValue::text(self.project_id.as_deref()),
            "email" => FieldValue::text(self.email.as_deref()),
            "description" => FieldValue::text(self.description.as_deref()),
            "enabled" => self.enabled.map(FieldValue::from),
            _ => None,
        }
    }
}

/// A role that can be granted to a user on a project or domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain_id: Option<String>,
}

impl Role {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            domain_id: None,
        }
    }
}

impl Resource for Role {
    const KIND: &'static str = "role";

    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Fields for Role {
    const FIELDS: &'static [&'static str] = &["id", "name", "domain_id"];

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "id" => Some(self.id.as_str().into()),
            "name" => Some(self.name.as_str().into()),
            "domain_id" => FieldValue::text(self.domain_id.as_deref()),
            _ => None,
        }
    }
}

/// A project (tenant) owning resources and role assignments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain_id: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_optional_string"
    )]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

impl Project {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            domain_id: None,
            description: None,
            enabled: None,
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the enabled flag.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }
}

impl Resource for Project {
    const KIND: &'static str = "project";

    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Fields for Project {
    const FIELDS: &'static [&'static str] =
        &["id", "name", "domain_id", "description", "enabled"];

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "id" => Some(self.id.as_str().into()),
            "name" => Some(self.name.as_str().into()),
            "domain_id" => FieldValue::text(self.domain_id.as_deref()),
            "description" => FieldValue::text(self.description.as_deref()),
            "enabled" => self.enabled.map(FieldValue::from),
            _ => None,
        }
    }
}

/// A domain: the top-level namespace for users, projects and roles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Domain {
    pub id: String,
    pub name: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_optional_string"
    )]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

impl Domain {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            enabled: None,
        }
    }
}

impl Resource for Domain {
    const KIND: &'static str = "domain";

    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Fields for Domain {
    const FIELDS: &'static [&'static str] = &["id", "name", "description", "enabled"];

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "id" => Some(self.id.as_str().into()),
            "name" => Some(self.name.as_str().into()),
            "description" => FieldValue::text(self.description.as_deref()),
            "enabled" => self.enabled.map(FieldValue::from),
            _ => None,
        }
    }
}

/// A role as listed for one user on one project or domain.
///
/// Carries the user and scope names next to the role so that listings can
/// show them as columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleAssignment {
    #[serde(flatten)]
    pub role: Role,
    pub user: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
}

impl RoleAssignment {
    /// Builds assignments for every role a user holds on a project.
    pub fn on_project(roles: Vec<Role>, user: &User, project: &Project) -> Vec<Self> {
        roles
            .into_iter()
            .map(|role| Self {
                role,
                user: user.name.clone(),
                project: Some(project.name.clone()),
                domain: None,
            })
            .collect()
    }

    /// Builds assignments for every role a user holds on a domain.
    pub fn on_domain(roles: Vec<Role>, user: &User, domain: &Domain) -> Vec<Self> {
        roles
            .into_iter()
            .map(|role| Self {
                role,
                user: user.name.clone(),
                project: None,
                domain: Some(domain.name.clone()),
            })
            .collect()
    }
}

impl Fields for RoleAssignment {
    const FIELDS: &'static [&'static str] = &["id", "name", "user", "project", "domain"];

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "user" => Some(self.user.as_str().into()),
            "project" => FieldValue::text(self.project.as_deref()),
            "domain" => FieldValue::text(self.domain.as_deref()),
            other => self.role.field(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{project, show_fields, Formatters};

    fn paul() -> User {
        User::new("aaaaaaaa-aaaa-aaaa-aaaa-aaaaaaaaaaaa", "paul")
            .with_project_id("8-9-64")
            .with_email("paul@applecorps.com")
            .with_enabled(true)
    }

    #[test]
    fn test_user_deserializes_default_project_id() {
        let user: User = serde_json::from_str(
            r#"{
                "id": "aaaaaaaa-aaaa-aaaa-aaaa-aaaaaaaaaaaa",
                "name": "paul",
                "default_project_id": "8-9-64",
                "email": "paul@applecorps.com",
                "enabled": true,
                "links": {"self": "http://localhost:5000/v3/users/aaaaaaaa"}
            }"#,
        )
        .unwrap();

        assert_eq!(user, paul());
    }

    #[test]
    fn test_user_empty_email_is_none() {
        let user: User =
            serde_json::from_str(r#"{"id": "u1", "name": "ringo", "email": ""}"#).unwrap();
        assert_eq!(user.email, None);
    }

    #[test]
    fn test_user_long_listing_columns() {
        let users = vec![paul()];
        let formatters = Formatters::new();
        let columns = [
            "ID",
            "Name",
            "Project Id",
            "Domain Id",
            "Description",
            "Email",
            "Enabled",
        ];

        let data: Vec<Vec<String>> = project(&users, &columns, &formatters).rows.collect();

        assert_eq!(
            data[0],
            vec![
                "aaaaaaaa-aaaa-aaaa-aaaa-aaaaaaaaaaaa",
                "paul",
                "8-9-64",
                "",
                "",
                "paul@applecorps.com",
                "True",
            ]
        );
    }

    #[test]
    fn test_user_show_fields() {
        let fields = show_fields(&paul());
        let names: Vec<&str> = fields.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec!["email", "enabled", "id", "name", "project_id"]);
    }

    #[test]
    fn test_role_assignment_columns() {
        let user = paul();
        let project = Project::new("8-9-64", "beatles");
        let roles = vec![Role::new("r1", "admin"), Role::new("r2", "member")];

        let assignments = RoleAssignment::on_project(roles, &user, &project);
        let formatters = Formatters::new();
        let data: Vec<Vec<String>> =
            crate::table::project(&assignments, &["ID", "Name", "Project", "User"], &formatters)
                .rows
                .collect();

        assert_eq!(
            data,
            vec![
                vec!["r1", "admin", "beatles", "paul"],
                vec!["r2", "member", "beatles", "paul"],
            ]
        );
    }

    #[test]
    fn test_role_assignment_on_domain_has_no_project() {
        let user = paul();
        let domain = Domain::new("default", "Default");
        let assignments = RoleAssignment::on_domain(vec![Role::new("r1", "admin")], &user, &domain);

        assert_eq!(assignments[0].field("project"), None);
        assert_eq!(
            assignments[0].field("domain"),
            Some(FieldValue::Text("Default".to_string()))
        );
    }
}
