//! Per-run immutable configuration.
//!
//! One `RunConfig` is constructed per invocation and threaded as a parameter
//! into the synthesizer and the post-processor, so there is no process-wide
//! mutable state shared between files.

use regex::Regex;

/// Placeholder text used when the user supplies no template.
pub const DEFAULT_TEMPLATE: &str = "...";

/// Immutable configuration for one run of the tool.
pub struct RunConfig {
    /// Text appended after the declaration name in synthesized comments.
    pub template: String,
    /// Matches runs of trailing horizontal whitespace, per line.
    pub(crate) trailing_ws: Regex,
    /// Matches newline runs that amount to more than one blank line.
    pub(crate) blank_runs: Regex,
}

impl RunConfig {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            trailing_ws: Regex::new(r"(?m)[ \t]+$").expect("invalid trailing-whitespace pattern"),
            blank_runs: Regex::new(r"\n{3,}").expect("invalid blank-line pattern"),
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::new(DEFAULT_TEMPLATE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_template_is_placeholder() {
        let cfg = RunConfig::default();
        assert_eq!(cfg.template, "...");
    }

    #[test]
    fn custom_template_is_kept() {
        let cfg = RunConfig::new("TODO: document");
        assert_eq!(cfg.template, "TODO: document");
    }
}
