//! cto-layout - CLI wrapper around the access probe
//!
//! Wires config, transport, and notifier together and runs one probe. The
//! library stays UI-free; this binary is the terminal-facing caller.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cto_layout::{
    ConsoleNotifier, HttpTransport, LayoutConfig, LayoutManager, Notifier, NullNotifier,
};

#[derive(Parser, Debug)]
#[clap(
    name = "cto-layout",
    about = "Probe the CTO layout access-check endpoint",
    version
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,

    /// Directory containing config.json (defaults apply when omitted)
    #[clap(long, global = true)]
    config_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run one access check and surface the server's message
    TestAccess {
        /// Override the configured base URL
        #[clap(long)]
        base_url: Option<String>,

        /// Suppress the user-facing message; diagnostics still go to the log
        #[clap(long)]
        quiet: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::TestAccess { base_url, quiet } => {
            let mut config = LayoutConfig::load_from_dir(cli.config_dir.as_deref());
            if let Some(url) = base_url {
                config.base_url = url;
            }

            let transport = HttpTransport::new(&config)?;
            let notifier: Arc<dyn Notifier> = if quiet {
                Arc::new(NullNotifier)
            } else {
                Arc::new(ConsoleNotifier)
            };

            let manager = LayoutManager::new(Box::new(transport), notifier);
            manager.test_access().await;
        }
    }

    Ok(())
}
