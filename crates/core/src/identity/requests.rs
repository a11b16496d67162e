//! Request payloads for identity mutations.
//!
//! Only populated fields are serialized, so an update carries exactly the
//! attributes the user asked to change.

use serde::{Deserialize, Serialize};

/// Request payload for creating a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain_id: Option<String>,
    #[serde(
        rename = "default_project_id",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub project_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub enabled: bool,
}

impl CreateUserRequest {
    /// Create a new, enabled user request with just a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            domain_id: None,
            project_id: None,
            password: None,
            email: None,
            description: None,
            enabled: true,
        }
    }
}

/// Request payload for updating a user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain_id: Option<String>,
    #[serde(
        rename = "default_project_id",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub project_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

impl UpdateUserRequest {
    /// True when no attribute would change.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.domain_id.is_none()
            && self.project_id.is_none()
            && self.password.is_none()
            && self.email.is_none()
            && self.description.is_none()
            && self.enabled.is_none()
    }
}

/// Request payload for creating a role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateRoleRequest {
    pub name: String,
}

impl CreateRoleRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Scope a role is granted on, by identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssignmentTarget {
    Project(String),
    Domain(String),
}

impl AssignmentTarget {
    /// Path segment of the scope collection ("projects" or "domains").
    pub fn collection(&self) -> &'static str {
        match self {
            AssignmentTarget::Project(_) => "projects",
            AssignmentTarget::Domain(_) => "domains",
        }
    }

    /// Identifier of the scope.
    pub fn id(&self) -> &str {
        match self {
            AssignmentTarget::Project(id) | AssignmentTarget::Domain(id) => id,
        }
    }
}
