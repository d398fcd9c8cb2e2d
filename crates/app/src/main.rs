//! DuProprio - property listings in the terminal
//!
//! Create an account, log in, browse and filter listings, add your own.

use std::io;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod menu;
mod prompts;
mod render;

use duproprio_core::Portal;

fn main() {
    // Logs go to stderr so they never interleave with the menu
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = cli::Cli::parse();

    let config = match cli.load_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let mut portal = match Portal::open(&config) {
        Ok(portal) => portal,
        Err(e) => {
            tracing::error!("Failed to open storage: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!(user = ?portal.current_user(), "Starting DuProprio");

    let stdin = io::stdin();
    let mut console = prompts::Console::new(stdin.lock(), io::stdout());
    if let Err(e) = menu::run(&mut portal, &mut console, !cli.no_banner) {
        tracing::error!("Terminal error: {}", e);
        std::process::exit(1);
    }
}
