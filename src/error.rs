// Error handling for baasic-profile-client

use thiserror::Error;

use crate::transport::TransportError;

/// Crate-wide error taxonomy.
///
/// `Parse` is fatal at route-table construction; everything else is
/// surfaced to the caller of the failing service method. No variant is
/// ever swallowed or downgraded on the way out.
#[derive(Error, Debug)]
pub enum Error {
    #[error("malformed URI template at position {position}: {message}")]
    Parse { position: usize, message: String },

    #[error("no value supplied for template variable '{name}'")]
    MissingVariable { name: String },

    /// The backend did not grant this caller the operation; links are
    /// populated per the caller's access rights.
    #[error("resource {} does not expose a '{rel}' link", .id.as_deref().unwrap_or("<no id>"))]
    LinkNotFound { rel: String, id: Option<String> },

    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
