//! Output formatting functions.

pub mod console;
pub mod json;
pub mod table;

pub use console::{Console, SharedBuffer};
