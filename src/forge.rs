//! Interface to the source hosting platform's release API.

/// GitHub API client implementation for GitHub.com and Enterprise.
pub mod github;

/// Shared data types for release lookups.
pub mod request;

/// Common traits for forge platform abstraction.
pub mod traits;
