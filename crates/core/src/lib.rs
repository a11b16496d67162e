//! osctl_core - functional core for the osctl command-line client.
//!
//! Holds the resource types returned by the identity and compute services,
//! the collection traits the HTTP layer implements, name-or-ID resolution
//! and column projection. Nothing in here performs I/O directly.

pub mod compute;
pub mod error;
pub mod identity;
pub mod resolve;
pub mod resource;
pub mod serde;
pub mod table;

pub use error::{Result, ServiceError};
pub use resolve::find_resource;
pub use resource::{Collection, FieldValue, Fields, Resource};
pub use table::{project, show_fields, Formatter, Formatters, Projection};
