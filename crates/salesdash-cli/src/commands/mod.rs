//! CLI command implementations
//!
//! Commands are organized by dashboard section:
//! - `dashboard` - Full dashboard render (KPIs, charts data, forecast, insight)
//! - `explore` - Interactive filter session over a loaded dataset
//! - `filters` - Region/product option listing
//! - `forecast` - Six-month revenue forecast
//! - `shared` - Shared utilities (open_dashboard, build_selection)

pub mod dashboard;
pub mod explore;
pub mod filters;
pub mod forecast;
pub mod shared;

// Re-export command functions for main.rs
pub use dashboard::*;
pub use explore::*;
pub use filters::*;
pub use forecast::*;
pub use shared::*;

/// Horizontal rule used under section headings
pub const RULE: &str = "   ─────────────────────────────────────────────────────────────";

/// Truncate a string to a maximum length, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
