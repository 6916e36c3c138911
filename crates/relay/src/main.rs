//! Crowd-safety alert relay CLI.

use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use relay::server::{self, ServerState};
use servicenow::{Alert, ServiceNowClient, ServiceNowConfig};

/// Crowd-safety alert relay - receives alerts and posts them to ServiceNow
#[derive(Parser)]
#[command(name = "relay")]
#[command(about = "Crowd-safety alert relay - receives alerts and posts them to ServiceNow")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the alert relay HTTP server
    Serve {
        /// Address to bind to
        #[arg(long, env = "RELAY_ADDR", default_value = "0.0.0.0:5001")]
        addr: String,
    },
    /// Forward a single alert from the command line
    Send {
        /// How long the critical event lasted (e.g. "3 seconds")
        #[arg(long, default_value = "Unknown")]
        timeframe: String,

        /// Severity label (e.g. "CRITICAL RISK")
        #[arg(long, default_value = "CRITICAL RISK")]
        status: String,

        /// Location coordinates or address (e.g. "40.7128,-74.0060")
        #[arg(long, default_value = "Unknown")]
        location: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "relay=debug,servicenow=debug,tower_http=debug"
    } else {
        "relay=info,servicenow=info"
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Commands::Serve { addr } => {
            let forwarder = ServiceNowClient::new(ServiceNowConfig::from_env())?;
            let state = Arc::new(ServerState::new(forwarder));
            server::run_server(state, &addr).await?;
        }
        Commands::Send {
            timeframe,
            status,
            location,
        } => {
            let forwarder = ServiceNowClient::new(ServiceNowConfig::from_env())?;
            let alert = Alert::new(timeframe, status, location);
            let outcome = forwarder.forward(&alert).await;
            println!("{}", serde_json::to_string_pretty(&outcome)?);
            if !outcome.is_delivered() {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
