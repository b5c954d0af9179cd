mod cli;
mod commands;
mod render;

use clap::Parser;
use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();
    let config = commands::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Classify { text, json } => commands::classify::run(config, &text.join(" "), json),
        Commands::Session { seed } => commands::session::run(config, seed),
        Commands::Library => commands::library::run(),
        Commands::Version => commands::version::run(),
    }
}
