//! PortLaunch CLI - Start the web UI on a free local port
//!
//! A command-line tool for finding available ports and launching
//! the web interface bound to one of them.

mod commands;
mod logging;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use portlaunch_core::LauncherConfig;

#[derive(Parser)]
#[command(name = "portlaunch")]
#[command(author, version, about = "Launch the web UI on a free local port")]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the configuration file
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web UI
    #[command(alias = "ui")]
    Webui {
        /// Port to bind (default: first free port from the configured start)
        #[arg(short, long, value_parser = clap::value_parser!(u16).range(1..))]
        port: Option<u16>,

        /// Wait for the web UI process to exit
        #[arg(long)]
        wait: bool,
    },

    /// Print the first free port
    FindPort {
        /// Port to start scanning from
        #[arg(short, long, value_parser = clap::value_parser!(u16).range(1..))]
        start: Option<u16>,

        /// Number of consecutive ports to try
        #[arg(short = 'n', long, value_parser = clap::value_parser!(u32).range(1..))]
        max_attempts: Option<u32>,
    },

    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show the effective configuration
    Show,
    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let store = commands::store(cli.config)?;
    let mut out = std::io::stdout();

    if let Commands::Config {
        action: Some(ConfigAction::Init { force }),
    } = cli.command
    {
        return commands::config::init(&store, force, &mut out).await;
    }

    let config: LauncherConfig = store.load().await?;

    match cli.command {
        Commands::Webui { port, wait } => {
            commands::webui::run(config, port, wait, cli.json, &mut out).await?;
        }
        Commands::FindPort {
            start,
            max_attempts,
        } => {
            commands::find_port::run(&config, start, max_attempts, cli.json, &mut out)?;
        }
        Commands::Config { .. } => {
            commands::config::show(&store, &config, cli.json, &mut out)?;
        }
    }

    Ok(())
}
