//! osctl_client - command-line client for cloud identity and compute APIs.

pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod error;
#[cfg(feature = "inmemory")]
pub mod inmemory;
pub mod logging;
pub mod output;

pub use client::ClientManager;
pub use error::{ClientError, Result};
