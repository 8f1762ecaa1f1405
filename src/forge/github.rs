//! Implements the Forge trait for Github
use async_trait::async_trait;
use log::*;
use octocrab::{Octocrab, service::middleware::retry::RetryConfig};
use reqwest::StatusCode;

use crate::{
    config::RemoteConfig,
    error::{ReleaseExistsError, Result},
    forge::{request::ReleaseByTagResponse, traits::Forge},
};

/// GitHub forge implementation using Octocrab for release lookups.
pub struct Github {
    config: RemoteConfig,
    instance: Octocrab,
}

impl Github {
    /// Create GitHub client with personal access token authentication and API
    /// base URL configuration. Requests are never retried.
    pub async fn new(config: RemoteConfig) -> Result<Self> {
        let mut builder = Octocrab::builder()
            .personal_token(config.token.clone())
            .add_retry_config(RetryConfig::None)
            .base_uri(config.api_url.as_str())?;

        if let Some(timeout) = config.timeout {
            builder = builder
                .set_connect_timeout(Some(timeout))
                .set_read_timeout(Some(timeout));
        }

        let instance = builder.build()?;

        Ok(Self { config, instance })
    }
}

#[async_trait]
impl Forge for Github {
    fn remote_config(&self) -> RemoteConfig {
        self.config.clone()
    }

    async fn get_release_by_tag(
        &self,
        tag: &str,
    ) -> Result<ReleaseByTagResponse> {
        let endpoint = self.config.release_by_tag_url(tag)?;

        debug!("requesting release: GET {endpoint}");

        let result: std::result::Result<ReleaseByTagResponse, octocrab::Error> =
            self.instance.get(endpoint.as_str(), None::<&()>).await;

        match result {
            Ok(release) => Ok(release),
            Err(octocrab::Error::GitHub { source, .. })
                if source.status_code == StatusCode::NOT_FOUND =>
            {
                debug!("no release found for tag: {tag}");
                Err(ReleaseExistsError::ReleaseNotFound(tag.to_string()))
            }
            Err(err) => {
                debug!("release lookup failed for tag: {tag}: {err}");
                Err(err.into())
            }
        }
    }
}
