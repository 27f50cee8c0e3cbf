//! Routemap CLI - route listings from annotated source models.

use clap::Parser;
use routemap::cli::{routes, Cli, Commands};
use routemap::MapperConfig;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = MapperConfig::load(&cli.config);

    match cli.command {
        Commands::Routes {
            model,
            format,
            method,
        } => routes::routes(&model, &config, format, method.as_deref())?,

        Commands::Stats { model } => routes::stats(&model, &config)?,
    }

    Ok(())
}
