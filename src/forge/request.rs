//! Request and response types shared by forge implementations.
use serde::{Deserialize, Serialize};

/// Release data returned when looking up a release by its tag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseByTagResponse {
    /// Tag the release is attached to.
    #[serde(rename = "tag_name")]
    pub tag: String,
    /// Display name of the release.
    #[serde(default)]
    pub name: Option<String>,
    /// Web link to the release page.
    #[serde(default)]
    pub html_url: Option<String>,
    #[serde(default)]
    pub draft: bool,
    #[serde(default)]
    pub prerelease: bool,
}
