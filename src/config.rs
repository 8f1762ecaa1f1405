//! Immutable run configuration resolved once at startup.
use secrecy::SecretString;
use std::{fmt, time::Duration};
use url::Url;

use crate::error::{ReleaseExistsError, Result};

/// Public GitHub REST API endpoint.
pub const DEFAULT_API_URL: &str = "https://api.github.com";
/// Default bound, in seconds, on connecting to and reading from the API.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Repository identifier in "owner/name" form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoId {
    pub owner: String,
    pub repo: String,
}

impl RepoId {
    /// Split on the first `/`. Both halves must be non-empty and the name
    /// may not contain another separator.
    pub fn parse(repository: &str) -> Result<Self> {
        let invalid =
            || ReleaseExistsError::InvalidRepository(repository.to_string());

        let (owner, repo) = repository.split_once('/').ok_or_else(invalid)?;

        if owner.is_empty() || repo.is_empty() || repo.contains('/') {
            return Err(invalid());
        }

        Ok(Self {
            owner: owner.to_string(),
            repo: repo.to_string(),
        })
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// Remote repository connection configuration for authenticating and
/// interacting with the GitHub API.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// Base URL of the REST API (e.g. "https://api.github.com").
    pub api_url: Url,
    /// Repository owner.
    pub owner: String,
    /// Repository name.
    pub repo: String,
    /// Access token for authentication.
    pub token: SecretString,
    /// Connect and read timeout for the lookup. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl RemoteConfig {
    pub fn new(
        api_url: Url,
        repo_id: RepoId,
        token: SecretString,
        timeout: Option<Duration>,
    ) -> Self {
        Self {
            api_url,
            owner: repo_id.owner,
            repo: repo_id.repo,
            token,
            timeout,
        }
    }

    /// "owner/name" path of the configured repository.
    pub fn path(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }

    /// Builds `{api}/repos/{owner}/{repo}/releases/tags/{tag}`, percent
    /// encoding each segment.
    pub fn release_by_tag_url(&self, tag: &str) -> Result<Url> {
        let mut url = self.api_url.clone();

        url.path_segments_mut()
            .map_err(|_| {
                ReleaseExistsError::invalid_config(format!(
                    "api url cannot be used as a base: {}",
                    self.api_url
                ))
            })?
            .pop_if_empty()
            .extend([
                "repos",
                self.owner.as_str(),
                self.repo.as_str(),
                "releases",
                "tags",
                tag,
            ]);

        Ok(url)
    }
}

/// Everything a single check needs. Built once and never mutated.
#[derive(Debug, Clone)]
pub struct CheckConfig {
    /// Release tag to search for.
    pub tag: String,
    /// Where to search.
    pub remote: RemoteConfig,
}
