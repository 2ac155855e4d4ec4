// stubdoc/src/process.rs

use std::fs;
use std::io;
use std::path::Path;

use stubdoc_core::{annotate_source, ParseError, RunConfig};

/// Suffix marking Go test files, which are never processed.
const TEST_FILE_SUFFIX: &str = "_test.go";

/// Permission mode for files rewritten in place.
#[cfg(unix)]
const WRITE_MODE: u32 = 0o644;

/// What happened to one file.
#[derive(Debug)]
pub enum Outcome {
    /// The file name ends in `_test.go`; nothing was done.
    SkippedTestFile,
    /// The transform produced bytes identical to the input.
    Unchanged,
    /// New content was written back to the file (in-place mode).
    WrittenInPlace,
    /// New content was produced for the caller to stream to stdout.
    Rewritten(String),
}

/// Errors that can occur while processing one file.
#[derive(Debug)]
pub enum ProcessError {
    Io(io::Error),
    Parse(ParseError),
}

impl From<io::Error> for ProcessError {
    fn from(err: io::Error) -> Self {
        ProcessError::Io(err)
    }
}

impl From<ParseError> for ProcessError {
    fn from(err: ParseError) -> Self {
        ProcessError::Parse(err)
    }
}

impl std::fmt::Display for ProcessError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProcessError::Io(e) => write!(f, "{}", e),
            ProcessError::Parse(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ProcessError {}

/// Run the full pipeline over one file: read, transform, compare, and either
/// write in place or hand the new text back for streaming.
pub fn process_file(
    path: &Path,
    cfg: &RunConfig,
    in_place: bool,
) -> Result<Outcome, ProcessError> {
    if is_test_file(path) {
        return Ok(Outcome::SkippedTestFile);
    }

    let original = fs::read_to_string(path)?;
    let new_text = annotate_source(&original, cfg)?;

    if new_text == original {
        return Ok(Outcome::Unchanged);
    }

    if in_place {
        write_file(path, &new_text)?;
        return Ok(Outcome::WrittenInPlace);
    }

    Ok(Outcome::Rewritten(new_text))
}

fn is_test_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(TEST_FILE_SUFFIX))
}

fn write_file(path: &Path, contents: &str) -> io::Result<()> {
    fs::write(path, contents)?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(WRITE_MODE))?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/process.rs"]
mod tests;
