//! piwalk - command-line walker for the PI Web API.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Drive the hypermedia traversal via the shared client library.
//! - Print results as JSON on stdout; logs go to stderr.
//!
//! Invariants:
//! - `.env` is loaded BEFORE CLI parsing so clap env defaults can read it.
//! - Connection settings always come from flags or the environment, never
//!   from literals.

mod args;
mod commands;

use clap::Parser;
use piwalk_config::ConfigLoader;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() {
    // Load .env before clap sees the environment.
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(1);
    }

    let cli = args::Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = commands::run(cli).await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
