//! Whole-text transform: parse, scan, synthesize, print, clean.

use crate::cleanup::clean_text;
use crate::comment::synthesize;
use crate::config::RunConfig;
use crate::parse::{parse_source, ParseError};
use crate::render::render;
use crate::scan::scan;
use crate::stubdoc_debug;

/// Run the full transform over one file's text.
///
/// Pure function of `(source, cfg)`: no state survives the call. The caller
/// compares the result against the original bytes to detect "no changes".
pub fn annotate_source(source: &str, cfg: &RunConfig) -> Result<String, ParseError> {
    let mut file = parse_source(source)?;
    let flagged = scan(&file);
    stubdoc_debug!(
        "{} of {} declarations need comments",
        flagged.len(),
        file.decls.len()
    );
    for idx in flagged {
        synthesize(&mut file, idx, cfg);
    }
    let rendered = render(&file);
    Ok(clean_text(&rendered, cfg))
}
