//! Interactive explore session
//!
//! Each input line is one interaction. Filter changes build a new selection
//! and re-render the whole dashboard against the dataset loaded at startup.

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::Result;
use salesdash_core::{Dashboard, DatasetCache, FilterSelection};

use super::{open_dashboard, write_dashboard, write_filter_options, write_forecast_section};

const HELP: &str = "   Commands:
     regions <a,b,...>    Select regions (`all` for every region, `none` to clear)
     products <a,b,...>   Select products (`all` for every product, `none` to clear)
     reset                Select everything again
     show                 Re-render the dashboard
     options              List available regions and products
     forecast             Show the forecast section only
     help                 Show this help
     quit                 Leave the session";

/// Values given to a `regions`/`products` command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueList {
    All,
    Values(Vec<String>),
}

/// A parsed explore command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExploreCommand {
    Regions(ValueList),
    Products(ValueList),
    Reset,
    Show,
    Options,
    Forecast,
    Help,
    Quit,
}

impl std::str::FromStr for ExploreCommand {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        let (verb, rest) = match s.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (s, ""),
        };

        match verb.to_lowercase().as_str() {
            "regions" | "region" => Ok(Self::Regions(parse_values(rest))),
            "products" | "product" => Ok(Self::Products(parse_values(rest))),
            "reset" => Ok(Self::Reset),
            "show" => Ok(Self::Show),
            "options" | "filters" => Ok(Self::Options),
            "forecast" => Ok(Self::Forecast),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            _ => Err(format!("Unknown command: {}. Type `help` for commands.", verb)),
        }
    }
}

fn parse_values(rest: &str) -> ValueList {
    if rest.eq_ignore_ascii_case("all") {
        return ValueList::All;
    }
    if rest.is_empty() || rest.eq_ignore_ascii_case("none") {
        return ValueList::Values(Vec::new());
    }
    ValueList::Values(
        rest.split(',')
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .collect(),
    )
}

/// Filter state carried across interactions
pub struct ExploreSession<'d> {
    dashboard: &'d Dashboard,
    selection: FilterSelection,
}

impl<'d> ExploreSession<'d> {
    pub fn new(dashboard: &'d Dashboard) -> Self {
        Self {
            dashboard,
            selection: dashboard.default_selection(),
        }
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    /// Apply one command; returns false when the session should end
    pub fn handle<W: Write>(&mut self, command: ExploreCommand, out: &mut W) -> io::Result<bool> {
        match command {
            ExploreCommand::Regions(values) => {
                let regions = match values {
                    ValueList::All => self.dashboard.dataset().regions(),
                    ValueList::Values(values) => values,
                };
                self.selection = self.selection.clone().with_regions(regions);
                self.render(out)?;
            }
            ExploreCommand::Products(values) => {
                let products = match values {
                    ValueList::All => self.dashboard.dataset().products(),
                    ValueList::Values(values) => values,
                };
                self.selection = self.selection.clone().with_products(products);
                self.render(out)?;
            }
            ExploreCommand::Reset => {
                self.selection = self.dashboard.default_selection();
                self.render(out)?;
            }
            ExploreCommand::Show => self.render(out)?,
            ExploreCommand::Options => {
                write_filter_options(out, &self.dashboard.filter_options())?
            }
            ExploreCommand::Forecast => {
                write_forecast_section(out, &self.dashboard.forecast_section())?
            }
            ExploreCommand::Help => writeln!(out, "{}", HELP)?,
            ExploreCommand::Quit => return Ok(false),
        }
        Ok(true)
    }

    fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let state = self.dashboard.render(&self.selection);
        write_dashboard(out, self.dashboard, &self.selection, &state)
    }
}

pub fn cmd_explore(data_path: &Path) -> Result<()> {
    let mut cache = DatasetCache::new();
    let dashboard = open_dashboard(&mut cache, data_path)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_explore(&dashboard, stdin.lock(), &mut stdout.lock())
}

/// Drive a session from `input` until `quit` or end of input
pub fn run_explore<R: BufRead, W: Write>(
    dashboard: &Dashboard,
    input: R,
    out: &mut W,
) -> Result<()> {
    let mut session = ExploreSession::new(dashboard);
    session.render(out)?;
    writeln!(out)?;
    writeln!(out, "   Type `help` for commands.")?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<ExploreCommand>() {
            Ok(command) => {
                if !session.handle(command, out)? {
                    break;
                }
            }
            Err(message) => writeln!(out, "   {}", message)?,
        }
        out.flush()?;
    }

    Ok(())
}
