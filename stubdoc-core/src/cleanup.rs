//! Post-render textual cleanup.
//!
//! Operates on the printer's output text, not the tree. Both passes are
//! idempotent and independent of each other.

use crate::config::RunConfig;

/// Strip trailing horizontal whitespace per line and collapse excess blank
/// lines down to a single blank line.
pub fn clean_text(text: &str, cfg: &RunConfig) -> String {
    let stripped = cfg.trailing_ws.replace_all(text, "");
    cfg.blank_runs.replace_all(&stripped, "\n\n").into_owned()
}
