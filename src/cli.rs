//! CLI argument parsing and run configuration resolution.
use clap::Parser;
use secrecy::SecretString;
use std::{env, time::Duration};
use url::Url;

use crate::{
    config::{
        CheckConfig, DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS, RemoteConfig,
        RepoId,
    },
    error::{ReleaseExistsError, Result},
};

/// Reports whether a GitHub release exists for a tag. Inputs may be passed
/// as flags or through the `INPUT_*` variables set by the Actions runner.
#[derive(Parser, Debug, Default)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(long, env = "INPUT_TAG")]
    /// Release tag to search for.
    pub tag: Option<String>,

    #[arg(long, env = "INPUT_REPOSITORY")]
    /// Repository to search in ("owner/name"). Falls back to
    /// GITHUB_REPOSITORY.
    pub repository: Option<String>,

    #[arg(long, env = "INPUT_TOKEN", hide_env_values = true)]
    /// GitHub access token. Falls back to GITHUB_TOKEN env var.
    pub token: Option<String>,

    #[arg(long, env = "GITHUB_API_URL")]
    /// GitHub REST API base URL.
    pub api_url: Option<String>,

    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    /// Request timeout in seconds. Use 0 to wait indefinitely.
    pub timeout: u64,

    #[arg(long, default_value_t = false)]
    /// Enable debug logging.
    pub debug: bool,
}

impl Args {
    /// Resolve the run configuration. The tag is validated first so a run
    /// without one fails before anything else is looked at.
    pub fn get_check_config(&self) -> Result<CheckConfig> {
        let tag = non_empty(self.tag.as_deref()).ok_or_else(|| {
            ReleaseExistsError::invalid_config(
                "Input required and not supplied: tag",
            )
        })?;

        let repository = non_empty(self.repository.as_deref())
            .or_else(|| env_non_empty("GITHUB_REPOSITORY"))
            .ok_or_else(|| {
                ReleaseExistsError::invalid_config(
                    "must configure a repository: set --repository or GITHUB_REPOSITORY",
                )
            })?;

        let repo_id = RepoId::parse(&repository)?;

        let token = non_empty(self.token.as_deref())
            .or_else(|| env_non_empty("GITHUB_TOKEN"))
            .ok_or_else(|| {
                ReleaseExistsError::invalid_config("must set github token")
            })?;

        let api_url = non_empty(self.api_url.as_deref())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let api_url = Url::parse(&api_url)?;

        validate_scheme(&api_url)?;

        let timeout = match self.timeout {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        };

        Ok(CheckConfig {
            tag,
            remote: RemoteConfig::new(
                api_url,
                repo_id,
                SecretString::from(token),
                timeout,
            ),
        })
    }
}

/// Validate API URL uses HTTP or HTTPS scheme.
fn validate_scheme(url: &Url) -> Result<()> {
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(ReleaseExistsError::invalid_config(format!(
            "only http and https schemes are supported for api urls, got: {other}"
        ))),
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
}

fn env_non_empty(key: &str) -> Option<String> {
    env::var(key).ok().as_deref().and_then(|v| non_empty(Some(v)))
}
