use anyhow::Context;
use clap::Parser;
use ds_adt::{
    cli::{self, Cli},
    config::Settings,
    logger,
};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings =
        Settings::load_or_default(cli.config.as_deref()).context("failed to load settings")?;

    let level = if cli.verbose {
        "debug"
    } else {
        settings.log.level.as_str()
    };
    logger::init_logger(level, settings.log.json);

    tracing::debug!(?settings, "settings loaded");

    let stdout = std::io::stdout();
    cli::run(&cli, &settings, &mut stdout.lock())
}
