//! Decides whether a tagged release exists and reports it to the pipeline.
use log::*;

use crate::{
    error::Result,
    forge::traits::Forge,
    output::{ActionOutput, EXISTS_OUTPUT},
};

/// Performs exactly one lookup. Every failure, including a broken request,
/// is reported as "not found".
pub async fn check_release_exists(forge: &dyn Forge, tag: &str) -> bool {
    let remote = forge.remote_config();

    info!("Searching release with tag {tag} in {}", remote.path());

    match forge.get_release_by_tag(tag).await {
        Ok(release) => {
            debug!("release: {release:#?}");
            info!("Release {tag} found");
            true
        }
        Err(err) => {
            if !err.is_not_found() {
                warn!("release lookup for {tag} did not complete: {err}");
            }
            info!("Release {tag} not found");
            false
        }
    }
}

/// Check for the release and publish the result under [`EXISTS_OUTPUT`].
pub async fn run(
    forge: &dyn Forge,
    tag: &str,
    output: &ActionOutput,
) -> Result<bool> {
    let exists = check_release_exists(forge, tag).await;
    output.set_output(EXISTS_OUTPUT, exists).await?;
    Ok(exists)
}
