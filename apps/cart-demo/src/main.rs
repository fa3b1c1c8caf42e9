//! # cart-demo Entry Point
//!
//! ## Startup Sequence
//! 1. Parse command line
//! 2. Initialize tracing (logging, to stderr)
//! 3. Load config: defaults → TOML file → environment → command line
//! 4. Run the demo, report to stdout
//!
//! ## Usage
//! ```bash
//! cargo run -p cart-demo
//! cargo run -p cart-demo -- --tax-rate 0.0825
//! RUST_LOG=cart_demo=debug cargo run -p cart-demo -- --config ./cart.toml
//! ```

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use cart_demo::{DemoConfig, DemoResult};
use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "cart-demo", version, about = "Shopping cart demo for money-core")]
struct Cli {
    /// Path to a TOML config file
    #[arg(long, env = "CART_DEMO_CONFIG")]
    config: Option<PathBuf>,

    /// Sales tax rate as a fraction (0.08 = 8%); overrides the config file
    #[arg(long)]
    tax_rate: Option<f64>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    match try_main(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "Cart demo failed");
            ExitCode::FAILURE
        }
    }
}

fn try_main(cli: Cli) -> DemoResult<()> {
    let mut config = DemoConfig::load(cli.config)?;

    if let Some(rate) = cli.tax_rate {
        config.tax_rate = rate;
        config.validate()?;
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    cart_demo::run(&config, &mut out)
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=cart_demo=trace` - Show trace for the demo crate only
/// - Default: INFO, DEBUG for cart_demo
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,cart_demo=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
