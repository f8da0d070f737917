use anyhow::Result;
use clap::{Parser, Subcommand};
use std::env;

pub mod serve;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: &str = "8081";

#[derive(Subcommand)]
enum Command {
    /// Run the API server
    Serve {
        /// Set the server host address
        #[arg(long, default_value = DEFAULT_HOST)]
        host: String,

        /// Set the server port, overriding the PORT environment variable
        #[arg(long)]
        port: Option<String>,
    },
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

/// Port from the PORT env var. An unset or empty value falls back to
/// the default.
fn port_from_env() -> String {
    env::var("PORT")
        .ok()
        .filter(|port| !port.is_empty())
        .unwrap_or_else(|| DEFAULT_PORT.to_string())
}

pub async fn run() -> Result<()> {
    let args = Cli::parse();

    // Handle each sub command. Running without one starts the server
    // with defaults.
    match args.command {
        Some(Command::Serve { host, port }) => {
            serve::run(host, port.unwrap_or_else(port_from_env)).await;
        }
        None => {
            serve::run(DEFAULT_HOST.to_string(), port_from_env()).await;
        }
    }

    Ok(())
}
