//! Custom error types for release-exists.

use thiserror::Error;

/// Main error type for release-exists operations.
#[derive(Error, Debug)]
pub enum ReleaseExistsError {
    // Configuration errors
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid repository '{0}': expected \"owner/name\"")]
    InvalidRepository(String),

    // Forge errors
    #[error("no release found for tag: {0}")]
    ReleaseNotFound(String),

    #[error("Forge operation failed: {0}")]
    ForgeError(String),

    // Network/API errors
    #[error("Network request failed: {0}")]
    NetworkError(String),

    // Output channel errors
    #[error("Failed to write output: {0}")]
    OutputError(#[from] std::io::Error),

    #[error("URL parse error: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] log::SetLoggerError),

    // Generic wrapper for other errors
    #[error(transparent)]
    Other(#[from] color_eyre::Report),
}

/// Result type alias using ReleaseExistsError
pub type Result<T> = std::result::Result<T, ReleaseExistsError>;

impl ReleaseExistsError {
    /// Create a forge error with context
    pub fn forge(msg: impl Into<String>) -> Self {
        Self::ForgeError(msg.into())
    }

    /// Create an invalid config error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// True when the remote confirmed the release does not exist, as opposed
    /// to the lookup itself breaking.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ReleaseNotFound(_))
    }
}

// Implement From for octocrab errors (GitHub API)
impl From<octocrab::Error> for ReleaseExistsError {
    fn from(err: octocrab::Error) -> Self {
        match &err {
            octocrab::Error::GitHub { source, .. } => Self::ForgeError(format!(
                "GitHub API error: status {}: {}",
                source.status_code, source.message
            )),
            octocrab::Error::Hyper { .. } | octocrab::Error::Service { .. } => {
                Self::NetworkError(err.to_string())
            }
            _ => Self::ForgeError(format!("GitHub API error: {}", err)),
        }
    }
}
