use std::time::Duration;

use anyhow::{Context, Result};
use calc_bootstrap::{LoggingConfig, init_logging};
use calculator_sdk::{CalculatorClientV1, CalculatorGrpcClient, DEFAULT_TARGET, GrpcClientConfig};
use clap::Parser;

/// Calculator gRPC client
#[derive(Parser)]
#[command(name = "calculator-client")]
#[command(about = "Calculator gRPC client - issues a single Add or Ping call")]
#[command(version)]
struct Cli {
    /// Server address (host:port or URI)
    #[arg(default_value = DEFAULT_TARGET)]
    target: String,

    /// First addend
    #[arg(short = 'a', default_value_t = 3.5, allow_negative_numbers = true)]
    a: f64,

    /// Second addend
    #[arg(short = 'b', default_value_t = 2.5, allow_negative_numbers = true)]
    b: f64,

    /// How long to wait for the response (e.g. 5s, 250ms)
    #[arg(long, default_value = "5s", value_parser = humantime::parse_duration)]
    deadline: Duration,

    /// Send a liveness probe instead of Add
    #[arg(long)]
    ping: bool,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Quiet by default so stdout carries only the result.
    let logging = LoggingConfig {
        level: "warn".to_owned(),
        ..LoggingConfig::default()
    };
    init_logging(&logging, cli.verbose)?;

    let cfg = GrpcClientConfig::new("calculator").with_rpc_timeout(cli.deadline);
    let client = CalculatorGrpcClient::connect_lazy(&cli.target, &cfg).context("RPC failed")?;
    tracing::debug!(target = %cli.target, deadline = ?cli.deadline, "client ready");

    if cli.ping {
        client.ping().await.context("RPC failed")?;
        println!("Ping ok");
    } else {
        let result = client.add(cli.a, cli.b).await.context("RPC failed")?;
        println!("Add result: {result}");
    }

    Ok(())
}
