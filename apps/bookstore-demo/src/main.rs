//! # Bookstore Demo
//!
//! Runs the store scenarios end to end and prints the results.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Initialize tracing (stderr, RUST_LOG, default INFO)                 │
//! │  2. Load DemoConfig from BOOKSTORE_* environment variables              │
//! │  3. Build the five-book catalog                                         │
//! │  4. Run the selected scenarios: cart → order → invoice                  │
//! │  5. Write text or JSON to stdout                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```bash
//! cargo run -p bookstore-demo
//! BOOKSTORE_OUTPUT=json BOOKSTORE_SCENARIO=1 cargo run -p bookstore-demo
//! RUST_LOG=bookstore_core=debug cargo run -p bookstore-demo
//! ```

mod config;
mod scenarios;

use std::io::{self, Write};

use bookstore_core::Renderer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::{DemoConfig, OutputFormat};
use crate::scenarios::{run, store_catalog, write_text, SCENARIOS};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config = DemoConfig::load()?;
    info!(
        currency = %config.currency,
        output = ?config.output,
        scenarios = ?config.scenarios,
        "Configuration loaded"
    );

    let catalog = store_catalog()?;
    info!(items = catalog.len(), "Catalog ready");

    let reports = SCENARIOS
        .iter()
        .filter(|scenario| config.scenarios.includes(scenario.number))
        .map(|scenario| run(scenario, &catalog))
        .collect::<Result<Vec<_>, _>>()?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match config.output {
        OutputFormat::Text => {
            let renderer = Renderer::new(config.currency.as_str());
            write_text(&mut handle, &renderer, &catalog, &reports)?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut handle, &reports)?;
            writeln!(handle)?;
        }
    }

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so stdout carries only the rendered documents.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show each discount step
/// - Default: INFO level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .init();
}
