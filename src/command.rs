//! Entry point tying configuration, forge and output together.
use log::*;

use crate::{
    checker, cli::Args, error::Result, forge::github::Github,
    output::ActionOutput,
};

/// Resolve configuration from `args`, look up the release and publish the
/// `exists` output. Configuration problems abort before any request is made
/// and leave the output untouched.
pub async fn execute(args: &Args, output: &ActionOutput) -> Result<bool> {
    let config = args.get_check_config()?;

    debug!(
        "checking {} against {}",
        config.remote.path(),
        config.remote.api_url
    );

    let forge = Github::new(config.remote.clone()).await?;

    checker::run(&forge, &config.tag, output).await
}
