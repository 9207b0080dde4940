use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use singleplexer::config::Config;

mod cli;

#[derive(Parser)]
#[command(name = "singleplexer")]
#[command(about = "Terminal singleplexer - run commands in a single-pane GUI")]
#[command(version)]
struct Cli {
    /// Directory commands run in (defaults to the current directory)
    #[arg(short, long, global = true)]
    path: Option<PathBuf>,

    /// Path to the config file (defaults to ~/.singleplexer/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the GUI
    Gui,

    /// Run a single command without the GUI and print its output
    Run {
        /// The command line; words are joined with single spaces
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
    },

    /// Write a default configuration file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    match cli.command {
        Some(Commands::Run { command }) => {
            let config = Config::resolve(cli.config.as_deref())?;
            let code = cli::run::run_command(cli.path.as_deref(), &config, &command).await?;
            std::process::exit(code);
        }
        Some(Commands::Init { force }) => {
            cli::init::init_command(cli.config.as_deref(), force).await?;
        }
        Some(Commands::Gui) | None => {
            let config = Config::resolve(cli.config.as_deref())?;
            singleplexer::gui::run_gui(cli.path, config)?;
        }
    }

    Ok(())
}
