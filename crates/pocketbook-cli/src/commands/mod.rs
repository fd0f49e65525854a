//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `core` - Shared utilities (load_config, load_dataset, reference_time) and `config`
//! - `reports` - Report commands (dashboard, summary, categories, monthly, budgets, insights, goals)

pub mod core;
pub mod reports;

// Re-export command functions for main.rs
pub use core::*;
pub use reports::*;

/// Truncate a string to a maximum length, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
