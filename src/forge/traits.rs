//! Traits related to remote git forges
use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::{
    config::RemoteConfig, error::Result, forge::request::ReleaseByTagResponse,
};

#[cfg_attr(test, automock)]
#[async_trait]
pub trait Forge: Send + Sync {
    fn remote_config(&self) -> RemoteConfig;

    /// Look up the release published for `tag`. A release that does not
    /// exist is reported as [`crate::ReleaseExistsError::ReleaseNotFound`].
    async fn get_release_by_tag(
        &self,
        tag: &str,
    ) -> Result<ReleaseByTagResponse>;
}
