//! Crypto data adapter CLI
//!
//! Runs one adapter as a stdio tool server, or calls a single operation from
//! the command line.

use clap::{Parser, Subcommand};
use crypto_data_adapters::{Adapter, AdapterKind, Config, Error, Result, Server};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "data-adapter")]
#[command(about = "Tool servers for crypto market, on-chain and social data APIs")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve an adapter over stdio until input closes
    Serve {
        #[arg(value_enum)]
        adapter: AdapterKind,
    },

    /// List an adapter's operations
    List {
        #[arg(value_enum)]
        adapter: AdapterKind,
    },

    /// Call one operation and print the result
    Call {
        #[arg(value_enum)]
        adapter: AdapterKind,

        /// Operation name (e.g. get_coin_markets)
        operation: String,

        /// Arguments as a JSON object
        #[arg(short, long)]
        args: Option<String>,
    },

    /// Show current configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (ignore if not found)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(cli.verbose, cli.json_logs);

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    match cli.command {
        Commands::Serve { adapter } => {
            let adapter = Adapter::from_config(adapter, &config)?;
            Server::new(adapter).run().await?;
        }
        Commands::List { adapter } => list_operations(adapter),
        Commands::Call {
            adapter,
            operation,
            args,
        } => {
            run_call(adapter, &config, &operation, args.as_deref()).await?;
        }
        Commands::Config => {
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
    }

    Ok(())
}

/// Logs go to stderr; stdout carries the protocol
fn init_logging(verbose: bool, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn list_operations(kind: AdapterKind) {
    for op in crypto_data_adapters::tools::catalogue(kind) {
        println!("{:<48} {}", op.name, op.description);
    }
}

async fn run_call(
    kind: AdapterKind,
    config: &Config,
    operation: &str,
    args: Option<&str>,
) -> Result<()> {
    let arguments = match args {
        Some(raw) => match serde_json::from_str(raw)? {
            serde_json::Value::Object(map) => map,
            _ => {
                return Err(Error::InvalidArgument(
                    "--args must be a JSON object".to_string(),
                ))
            }
        },
        None => serde_json::Map::new(),
    };

    let adapter = Adapter::from_config(kind, config)?;
    let (text, is_error) = adapter.call_text(operation, &arguments).await;
    println!("{}", text);
    if is_error {
        tracing::warn!(operation = operation, "Call failed");
    }
    Ok(())
}
