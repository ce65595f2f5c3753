//! Limit Order Agent - demo binary
//!
//! Replays the canonical scenario against a logging execution client:
//! a threshold tick, a resting sell order, and the tick that fills it.
//!
//! ```bash
//! RUST_LOG=debug cargo run -- --config agent.toml
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use limit_order_agent::types::price::SCALE;
use limit_order_agent::{AgentConfig, AgentError, LimitOrderAgent, LoggingClient, OrderStore, PriceTick, Side};

#[derive(Parser, Debug)]
#[command(name = "limit-order-agent", about = "Limit order agent demo")]
struct Args {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::level_filters::LevelFilter::INFO.into()),
        )
        .init();

    let args = Args::parse();

    let config = match args.config {
        Some(path) => match AgentConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                error!("{}", e);
                return ExitCode::FAILURE;
            }
        },
        None => AgentConfig::default(),
    };

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(config: &AgentConfig) -> Result<(), AgentError> {
    let mut agent = LimitOrderAgent::with_config(LoggingClient::new(), config);

    info!("Testing threshold policy");
    let fired = agent.handle_market_data(&PriceTick::new("IBM", 95 * SCALE))?;
    info!(fired, "threshold tick processed");

    agent.add_order(Side::Sell, "IBM", 500, 105 * SCALE)?;
    log_orders("Orders before price tick", agent.store());

    info!("Testing price tick");
    let outcome = agent.price_tick(&PriceTick::new("IBM", 105 * SCALE))?;
    info!(
        tick_seq = outcome.receipt.tick_seq,
        executed = outcome.receipt.orders_executed,
        state_root = %outcome.receipt.state_root_hex(),
        "tick processed"
    );
    log_orders("Orders after price tick", agent.store());

    info!(total = agent.client().executed(), "executions reported");
    Ok(())
}

fn log_orders(label: &str, store: &OrderStore) {
    info!("{}: {} pending", label, store.len());
    for order in store.iter() {
        info!("  {}", order);
    }
}
