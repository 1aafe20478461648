mod cmd;
mod output;
mod setup;

use clap::{Parser, Subcommand};
use cmd::{customer::CustomerSubcommand, order::OrderSubcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "orderdesk",
    about = "Read-only HTTP API over in-memory customer and order records",
    version,
    propagate_version = true
)]
struct Cli {
    /// YAML config file (server address, seed file)
    #[arg(long, global = true, env = "ORDERDESK_CONFIG")]
    config: Option<PathBuf>,

    /// Seed file with customers and orders (default: built-in sample records)
    #[arg(long, global = true, env = "ORDERDESK_SEED")]
    seed: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Address to bind (overrides server.host)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on, 0 = OS-assigned (overrides server.port)
        #[arg(long, env = "ORDERDESK_PORT")]
        port: Option<u16>,
    },

    /// Inspect orders
    Order {
        #[command(subcommand)]
        subcommand: OrderSubcommand,
    },

    /// Inspect customers
    Customer {
        #[command(subcommand)]
        subcommand: CustomerSubcommand,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = match &cli.command {
        Commands::Serve { .. } => tracing::Level::INFO,
        _ => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .init();

    if let Err(e) = run(cli) {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = setup::resolve_config(cli.config.as_deref(), cli.seed)?;
    let store = setup::load_store(&config)?;

    match cli.command {
        Commands::Serve { host, port } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            cmd::serve::run(&config, store)
        }
        Commands::Order { subcommand } => cmd::order::run(&store, subcommand, cli.json),
        Commands::Customer { subcommand } => cmd::customer::run(&store, subcommand, cli.json),
    }
}
