//! Filter options command implementation

use std::io::{self, Write};
use std::path::Path;

use anyhow::Result;
use salesdash_core::{DatasetCache, FilterOptions};

use super::{open_dashboard, RULE};

pub fn cmd_filters(data_path: &Path, json: bool) -> Result<()> {
    let mut cache = DatasetCache::new();
    let dashboard = open_dashboard(&mut cache, data_path)?;
    let options = dashboard.filter_options();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if json {
        serde_json::to_writer_pretty(&mut out, &options)?;
        writeln!(out)?;
    } else {
        write_filter_options(&mut out, &options)?;
    }

    Ok(())
}

pub fn write_filter_options<W: Write>(out: &mut W, options: &FilterOptions) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "🎛️  Dashboard Filters")?;
    writeln!(out, "{}", RULE)?;

    if options.regions.is_empty() {
        writeln!(out, "   No transactions loaded.")?;
        return Ok(());
    }

    writeln!(out, "   Regions ({}):", options.regions.len())?;
    for region in &options.regions {
        writeln!(out, "     • {}", region)?;
    }
    writeln!(out, "   Products ({}):", options.products.len())?;
    for product in &options.products {
        writeln!(out, "     • {}", product)?;
    }
    Ok(())
}
