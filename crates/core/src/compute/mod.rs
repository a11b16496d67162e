//! Compute service resources and client trait.

mod types;

pub use types::{Address, Server};

use crate::resource::{Collection, FieldValue};

/// Entry point to the compute collections.
pub trait ComputeApi: Send + Sync {
    fn servers(&self) -> &dyn Collection<Server>;
}

/// Whether `token` is a well-formed server identifier (a UUID).
pub fn is_server_id(token: &str) -> bool {
    uuid::Uuid::parse_str(token).is_ok()
}

/// Joins per-network address strings with semicolons.
pub fn format_networks(value: &FieldValue) -> String {
    match value {
        FieldValue::List(networks) => networks.join("; "),
        other => other.to_string(),
    }
}
