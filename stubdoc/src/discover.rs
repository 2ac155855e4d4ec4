// stubdoc/src/discover.rs

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Recursively discover all Go source files under a directory.
///
/// Returns a sorted vector of paths for deterministic processing order.
/// Test files are included here; the per-file pipeline skips them.
pub fn discover_go_files(source_dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut go_files = Vec::new();
    discover_go_files_recursive(source_dir, &mut go_files)?;
    go_files.sort();
    Ok(go_files)
}

fn discover_go_files_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            discover_go_files_recursive(&path, files)?;
        } else if path.extension() == Some(std::ffi::OsStr::new("go")) {
            files.push(path);
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/discover.rs"]
mod tests;
