use clap::Parser;

use release_exists::{
    Result, cli::Args, command,
    output::{self, ActionOutput},
};

fn initialize_logger(debug: bool) -> Result<()> {
    let filter = if debug {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Info
    };

    let config = simplelog::ConfigBuilder::new()
        .add_filter_allow_str("release_exists")
        .build();

    simplelog::TermLogger::init(
        filter,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    Ok(())
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    initialize_logger(args.debug)?;

    let output = ActionOutput::from_env();

    if let Err(err) = command::execute(&args, &output).await {
        output::set_failed(&err.to_string());
        return Err(err.into());
    }

    Ok(())
}
