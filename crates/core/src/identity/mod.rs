//! Identity service resources, request payloads and client traits.

mod requests;
mod traits;
mod types;

pub use requests::{AssignmentTarget, CreateRoleRequest, CreateUserRequest, UpdateUserRequest};
pub use traits::{IdentityApi, RoleManager, UserManager};
pub use types::{Domain, Project, Role, RoleAssignment, User};
