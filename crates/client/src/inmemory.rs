//! In-memory identity and compute services.
//!
//! Backs command handlers without a network, recording every call so tests
//! can assert what was (and was not) sent.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use osctl_core::compute::{is_server_id, ComputeApi, Server};
use osctl_core::identity::{
    AssignmentTarget, CreateRoleRequest, CreateUserRequest, Domain, IdentityApi, Project, Role,
    RoleManager, UpdateUserRequest, User, UserManager,
};
use osctl_core::{Collection, Resource, Result, ServiceError};

use crate::commands::Services;

type Store<T> = Arc<RwLock<BTreeMap<String, T>>>;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Assignment {
    role_id: String,
    user_id: String,
    target: AssignmentTarget,
}

/// Identity and compute collections held in memory, keyed by ID.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCloud {
    users: Store<User>,
    roles: Store<Role>,
    projects: Store<Project>,
    domains: Store<Domain>,
    servers: Store<Server>,
    assignments: Arc<RwLock<Vec<Assignment>>>,
    calls: Arc<RwLock<Vec<String>>>,
    next_id: Arc<AtomicUsize>,
}

fn seeded<T: Resource>(items: impl IntoIterator<Item = T>) -> Store<T> {
    let map = items
        .into_iter()
        .map(|item| (item.id().to_string(), item))
        .collect();
    Arc::new(RwLock::new(map))
}

fn not_found(kind: &str, id: &str) -> ServiceError {
    ServiceError::Remote {
        status: 404,
        message: format!("Could not find {}: {}.", kind, id),
    }
}

impl InMemoryCloud {
    /// Creates an empty cloud.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(self, users: impl IntoIterator<Item = User>) -> Self {
        Self {
            users: seeded(users),
            ..self
        }
    }

    pub fn with_roles(self, roles: impl IntoIterator<Item = Role>) -> Self {
        Self {
            roles: seeded(roles),
            ..self
        }
    }

    pub fn with_projects(self, projects: impl IntoIterator<Item = Project>) -> Self {
        Self {
            projects: seeded(projects),
            ..self
        }
    }

    pub fn with_domains(self, domains: impl IntoIterator<Item = Domain>) -> Self {
        Self {
            domains: seeded(domains),
            ..self
        }
    }

    pub fn with_servers(self, servers: impl IntoIterator<Item = Server>) -> Self {
        Self {
            servers: seeded(servers),
            ..self
        }
    }

    /// Seeds role grants as `(role_id, user_id, target)`.
    pub fn with_assignments<'a>(
        self,
        assignments: impl IntoIterator<Item = (&'a str, &'a str, AssignmentTarget)>,
    ) -> Self {
        let assignments = assignments
            .into_iter()
            .map(|(role_id, user_id, target)| Assignment {
                role_id: role_id.to_string(),
                user_id: user_id.to_string(),
                target,
            })
            .collect();
        Self {
            assignments: Arc::new(RwLock::new(assignments)),
            ..self
        }
    }

    /// Every call received so far, as `"<operation> <argument>"`.
    pub async fn calls(&self) -> Vec<String> {
        self.calls.read().await.clone()
    }

    /// Whether the role is granted to the user on the target.
    pub async fn is_granted(&self, role_id: &str, user_id: &str, target: &AssignmentTarget) -> bool {
        self.assignments
            .read()
            .await
            .iter()
            .any(|a| a.role_id == role_id && a.user_id == user_id && &a.target == target)
    }

    /// Current state of a user.
    pub async fn user(&self, id: &str) -> Option<User> {
        self.users.read().await.get(id).cloned()
    }

    async fn record(&self, call: String) {
        tracing::debug!(%call, "in-memory call");
        self.calls.write().await.push(call);
    }

    fn generate_id(&self) -> String {
        format!("{:032x}", self.next_id.fetch_add(1, Ordering::SeqCst) + 1)
    }

    async fn get_from<T: Clone>(&self, store: &Store<T>, kind: &str, id: &str) -> Option<T> {
        self.record(format!("get {} {}", kind, id)).await;
        store.read().await.get(id).cloned()
    }

    async fn list_from<T: Clone>(&self, store: &Store<T>, kind: &str) -> Vec<T> {
        self.record(format!("list {}", kind)).await;
        store.read().await.values().cloned().collect()
    }

    async fn require_target(&self, target: &AssignmentTarget) -> Result<()> {
        let exists = match target {
            AssignmentTarget::Project(id) => self.projects.read().await.contains_key(id),
            AssignmentTarget::Domain(id) => self.domains.read().await.contains_key(id),
        };
        if exists {
            Ok(())
        } else {
            let kind = match target {
                AssignmentTarget::Project(_) => "project",
                AssignmentTarget::Domain(_) => "domain",
            };
            Err(not_found(kind, target.id()))
        }
    }
}

impl Services for InMemoryCloud {
    fn identity(&self) -> crate::error::Result<&dyn IdentityApi> {
        Ok(self)
    }

    fn compute(&self) -> crate::error::Result<&dyn ComputeApi> {
        Ok(self)
    }
}

impl IdentityApi for InMemoryCloud {
    fn users(&self) -> &dyn UserManager {
        self
    }

    fn roles(&self) -> &dyn RoleManager {
        self
    }

    fn projects(&self) -> &dyn Collection<Project> {
        self
    }

    fn domains(&self) -> &dyn Collection<Domain> {
        self
    }
}

impl ComputeApi for InMemoryCloud {
    fn servers(&self) -> &dyn Collection<Server> {
        self
    }
}

#[async_trait]
impl Collection<User> for InMemoryCloud {
    async fn get(&self, id: &str) -> Result<Option<User>> {
        Ok(self.get_from(&self.users, "user", id).await)
    }

    async fn list(&self) -> Result<Vec<User>> {
        Ok(self.list_from(&self.users, "users").await)
    }
}

#[async_trait]
impl UserManager for InMemoryCloud {
    async fn create_user(&self, request: &CreateUserRequest) -> Result<User> {
        self.record(format!("create user {}", request.name)).await;
        let mut users = self.users.write().await;
        if users
            .values()
            .any(|u| u.name == request.name && u.domain_id == request.domain_id)
        {
            return Err(ServiceError::Remote {
                status: 409,
                message: format!("Duplicate entry found with name {}.", request.name),
            });
        }

        let user = User {
            id: self.generate_id(),
            name: request.name.clone(),
            domain_id: request.domain_id.clone(),
            project_id: request.project_id.clone(),
            email: request.email.clone(),
            description: request.description.clone(),
            enabled: Some(request.enabled),
        };
        users.insert(user.id.clone(), user.clone());
        Ok(user)
    }

    async fn update_user(&self, id: &str, request: &UpdateUserRequest) -> Result<User> {
        self.record(format!("update user {}", id)).await;
        let mut users = self.users.write().await;
        let user = users.get_mut(id).ok_or_else(|| not_found("user", id))?;

        if let Some(name) = &request.name {
            user.name = name.clone();
        }
        if request.domain_id.is_some() {
            user.domain_id = request.domain_id.clone();
        }
        if request.project_id.is_some() {
            user.project_id = request.project_id.clone();
        }
        if request.email.is_some() {
            user.email = request.email.clone();
        }
        if request.description.is_some() {
            user.description = request.description.clone();
        }
        if request.enabled.is_some() {
            user.enabled = request.enabled;
        }
        Ok(user.clone())
    }

    async fn delete_user(&self, id: &str) -> Result<()> {
        self.record(format!("delete user {}", id)).await;
        self.users
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| not_found("user", id))
    }
}

#[async_trait]
impl Collection<Role> for InMemoryCloud {
    async fn get(&self, id: &str) -> Result<Option<Role>> {
        Ok(self.get_from(&self.roles, "role", id).await)
    }

    async fn list(&self) -> Result<Vec<Role>> {
        Ok(self.list_from(&self.roles, "roles").await)
    }
}

#[async_trait]
impl RoleManager for InMemoryCloud {
    async fn create_role(&self, request: &CreateRoleRequest) -> Result<Role> {
        self.record(format!("create role {}", request.name)).await;
        let role = Role::new(self.generate_id(), request.name.clone());
        self.roles
            .write()
            .await
            .insert(role.id.clone(), role.clone());
        Ok(role)
    }

    async fn delete_role(&self, id: &str) -> Result<()> {
        self.record(format!("delete role {}", id)).await;
        self.roles
            .write()
            .await
            .remove(id)
            .ok_or_else(|| not_found("role", id))?;
        self.assignments.write().await.retain(|a| a.role_id != id);
        Ok(())
    }

    async fn grant_role(
        &self,
        role_id: &str,
        user_id: &str,
        target: &AssignmentTarget,
    ) -> Result<()> {
        self.record(format!("grant role {} {} {}", role_id, user_id, target.id()))
            .await;
        if !self.roles.read().await.contains_key(role_id) {
            return Err(not_found("role", role_id));
        }
        if !self.users.read().await.contains_key(user_id) {
            return Err(not_found("user", user_id));
        }
        self.require_target(target).await?;

        let assignment = Assignment {
            role_id: role_id.to_string(),
            user_id: user_id.to_string(),
            target: target.clone(),
        };
        let mut assignments = self.assignments.write().await;
        if !assignments.contains(&assignment) {
            assignments.push(assignment);
        }
        Ok(())
    }

    async fn revoke_role(
        &self,
        role_id: &str,
        user_id: &str,
        target: &AssignmentTarget,
    ) -> Result<()> {
        self.record(format!("revoke role {} {} {}", role_id, user_id, target.id()))
            .await;
        let mut assignments = self.assignments.write().await;
        let before = assignments.len();
        assignments
            .retain(|a| !(a.role_id == role_id && a.user_id == user_id && &a.target == target));
        if assignments.len() == before {
            return Err(ServiceError::Remote {
                status: 404,
                message: format!("Could not find role assignment: {}.", role_id),
            });
        }
        Ok(())
    }

    async fn roles_for_user(&self, user_id: &str, target: &AssignmentTarget) -> Result<Vec<Role>> {
        self.record(format!("roles for user {} {}", user_id, target.id()))
            .await;
        self.require_target(target).await?;

        let assignments = self.assignments.read().await;
        let roles = self.roles.read().await;
        Ok(assignments
            .iter()
            .filter(|a| a.user_id == user_id && &a.target == target)
            .filter_map(|a| roles.get(&a.role_id).cloned())
            .collect())
    }
}

#[async_trait]
impl Collection<Project> for InMemoryCloud {
    async fn get(&self, id: &str) -> Result<Option<Project>> {
        Ok(self.get_from(&self.projects, "project", id).await)
    }

    async fn list(&self) -> Result<Vec<Project>> {
        Ok(self.list_from(&self.projects, "projects").await)
    }
}

#[async_trait]
impl Collection<Domain> for InMemoryCloud {
    async fn get(&self, id: &str) -> Result<Option<Domain>> {
        Ok(self.get_from(&self.domains, "domain", id).await)
    }

    async fn list(&self) -> Result<Vec<Domain>> {
        Ok(self.list_from(&self.domains, "domains").await)
    }
}

#[async_trait]
impl Collection<Server> for InMemoryCloud {
    async fn get(&self, id: &str) -> Result<Option<Server>> {
        Ok(self.get_from(&self.servers, "server", id).await)
    }

    async fn list(&self) -> Result<Vec<Server>> {
        Ok(self.list_from(&self.servers, "servers").await)
    }

    fn accepts_id(&self, token: &str) -> bool {
        is_server_id(token)
    }
}
