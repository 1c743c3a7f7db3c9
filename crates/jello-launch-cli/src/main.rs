//! jello-launch - resolve and spawn the Jello VM as a DAP debug adapter
//!
//! The binary is a thin front-end over the `jello-launch` crate: it reads a
//! launch request from flags or a launch-configuration JSON file, resolves
//! it, and either prints the process descriptor or spawns the adapter.
//!
//! Logs go to stderr; stdout carries descriptor JSON and, once the adapter
//! is spawned, is free for DAP framing.

mod commands;

use clap::{Parser, Subcommand};
use commands::RequestArgs;
use std::io::IsTerminal;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "jello-launch",
    about = "Launch the Jello VM as a DAP debug adapter",
    version
)]
struct Cli {
    /// Settings file path (default: ~/jello/debugger.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a launch request and print the process descriptor as JSON
    Resolve(RequestArgs),
    /// Resolve a launch request and spawn the VM as a debug adapter
    Launch(RequestArgs),
    /// Create the default settings file
    Init {
        /// Overwrite an existing settings file
        #[arg(long)]
        force: bool,
    },
}

fn init_logging(debug: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let result = match cli.command {
        Commands::Resolve(args) => commands::resolve::run(cli.config.as_deref(), args),
        Commands::Launch(args) => commands::launch::run(cli.config.as_deref(), args),
        Commands::Init { force } => commands::init::run(cli.config.as_deref(), force).map(|_| 0),
    };

    match result {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(1);
        }
    }
}
