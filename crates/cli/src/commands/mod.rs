//! CLI command implementations.

pub mod endpoints;
pub mod resources;

use backoffice_admin::api::RequestError;
use backoffice_admin::config::ConfigError;
use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The backend call failed.
    #[error("Request failed: {0}")]
    Request(#[from] RequestError),

    /// The `--json` argument did not match the resource input.
    #[error("Invalid --json input: {0}")]
    InvalidInput(serde_json::Error),

    /// The response could not be rendered.
    #[error("Failed to render output: {0}")]
    Output(serde_json::Error),
}
