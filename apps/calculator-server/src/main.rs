mod config;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use calc_bootstrap::{cancel_on_shutdown, init_logging, to_yaml};
use calculator::Service;
use clap::Parser;
use tokio_util::sync::CancellationToken;

use crate::config::AppConfig;

/// Calculator gRPC server
#[derive(Parser)]
#[command(name = "calculator-server")]
#[command(about = "Calculator gRPC server - serves demo.calculator.Calculator")]
#[command(version)]
struct Cli {
    /// Address to listen on (host:port), overrides config
    listen_addr: Option<String>,

    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Maximum number of handlers executing at the same time
    #[arg(long)]
    max_workers: Option<usize>,

    /// Print effective configuration (YAML) and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Layered config:
    // 1) defaults -> 2) YAML (if provided) -> 3) env (CALC__*) -> 4) CLI overrides
    let mut config = AppConfig::load(cli.config.as_deref())?;
    config.apply_cli_overrides(cli.listen_addr.as_deref(), cli.max_workers);

    if cli.print_config {
        println!("Effective configuration:\n{}", to_yaml(&config)?);
        return Ok(());
    }

    init_logging(&config.logging, cli.verbose)?;

    // Hook OS signals to the root token before announcing readiness;
    // serving stops when it is cancelled.
    let cancel = CancellationToken::new();
    let _signals = cancel_on_shutdown(cancel.clone());

    let server = calculator::bind(&config.calculator).await?;
    println!("Calculator server started on {}", server.local_addr());

    server.serve(Arc::new(Service::new()), cancel).await?;

    tracing::info!("Calculator server shut down");
    Ok(())
}
