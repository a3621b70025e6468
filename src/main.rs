use anyhow::Result;
use clap::Parser;

use dirtree::cli::{Cli, Command};
use dirtree::commands;
use dirtree::config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbose, cli.quiet);

    // Load configuration
    let config = Config::load(cli.config.as_deref())?;

    tracing::debug!(?config, "Loaded configuration");

    // Dispatch to subcommand
    match cli.command {
        Command::Render(args) => {
            tracing::info!(?args, "Starting render");
            commands::render::run(args, &config)?;
        }
        Command::Interactive => {
            tracing::info!("Starting interactive mode");
            commands::interactive::run(&config)?;
        }
        Command::Completions(args) => {
            commands::completions::run_completions(args.shell);
        }
        Command::Man => {
            commands::completions::run_man()?;
        }
    }

    Ok(())
}

fn init_logging(verbosity: u8, quiet: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let level = if quiet {
        "warn"
    } else {
        match verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("dirtree={}", level)));

    // Logs go to stderr; stdout carries the tree
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
