//! SalesDash CLI - Interactive sales performance dashboard
//!
//! Usage:
//!   salesdash dashboard --region East --product Widget   Render one dashboard pass
//!   salesdash filters                                    List filter options
//!   salesdash forecast                                   Six-month revenue forecast
//!   salesdash explore                                    Interactive filter session

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    // Logs go to stderr so JSON output on stdout stays machine-readable
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .compact()
                .with_writer(std::io::stderr),
        )
        .init();

    match cli.command {
        Commands::Dashboard {
            regions,
            products,
            json,
        } => commands::cmd_dashboard(&cli.data, &regions, &products, json),
        Commands::Filters { json } => commands::cmd_filters(&cli.data, json),
        Commands::Forecast { json } => commands::cmd_forecast(&cli.data, json),
        Commands::Explore => commands::cmd_explore(&cli.data),
    }
}
