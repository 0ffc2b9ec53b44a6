//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// SalesDash - Interactive sales performance dashboard
#[derive(Parser)]
#[command(name = "salesdash")]
#[command(about = "Sales KPIs, chart data and a six-month revenue forecast")]
#[command(long_about = None)]
#[command(version)]
pub struct Cli {
    /// Sales CSV file with columns OrderDate,Region,Product,UnitsSold,SalePrice
    #[arg(long, default_value = "sales_data.csv", global = true)]
    pub data: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the dashboard once for a region/product selection
    Dashboard {
        /// Regions to include (repeat or comma-separate; defaults to all)
        #[arg(short, long = "region", value_delimiter = ',')]
        regions: Vec<String>,

        /// Products to include (repeat or comma-separate; defaults to all)
        #[arg(short, long = "product", value_delimiter = ',')]
        products: Vec<String>,

        /// Output the dashboard as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the regions and products available for filtering
    Filters {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the six-month revenue forecast (always over the full dataset)
    Forecast {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Explore interactively: change filters line by line and re-render
    ///
    /// The sales file is loaded once; every command re-runs the dashboard
    /// against the loaded data. Type `help` inside the session for commands.
    Explore,
}
