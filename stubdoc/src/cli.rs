//! Command-line interface for stubdoc.
//!
//! Inserts a placeholder doc comment above every exported top-level Go
//! declaration that lacks one, then re-emits the file to stdout or rewrites
//! it in place. Exit code 0 on success (including "no changes"); 1 when any
//! file fails to read, parse, or write.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use stubdoc::{discover_go_files, process_file, Outcome, ProcessError};
use stubdoc_core::{RunConfig, DEFAULT_TEMPLATE};

#[derive(Parser)]
#[command(name = "stubdoc")]
#[command(about = "Add placeholder doc comments above exported Go declarations")]
struct Args {
    /// Make in-place editing
    #[arg(short = 'i')]
    in_place: bool,

    /// Comment template
    #[arg(short = 't', value_name = "text", default_value = DEFAULT_TEMPLATE)]
    template: String,

    /// Directory to process recursively
    #[arg(short = 'd', value_name = "path")]
    dir: Option<PathBuf>,

    /// Go source files to process
    #[arg(value_name = "file")]
    files: Vec<PathBuf>,
}

fn print_usage() {
    eprintln!("usage: stubdoc [flags] [file ...]");
    eprintln!("  -d <path>  Directory to process recursively");
    eprintln!("  -i         Make in-place editing");
    eprintln!("  -t <text>  Comment template (default \"{DEFAULT_TEMPLATE}\")");
}

fn main() -> ExitCode {
    ExitCode::from(run(Args::parse()))
}

fn run(args: Args) -> u8 {
    let Args {
        in_place,
        template,
        dir,
        files,
    } = args;
    let cfg = RunConfig::new(template);

    if let Some(dir) = dir {
        return match run_directory(&dir, &cfg, in_place) {
            Ok(()) => 0,
            Err(e) => {
                eprintln!("stubdoc: {e}");
                1
            }
        };
    }

    if files.is_empty() {
        print_usage();
        return 0;
    }

    let mut failed = false;
    for path in &files {
        if path.is_dir() {
            eprintln!("stubdoc: {} is a directory", path.display());
            failed = true;
            continue;
        }
        match process_file(path, &cfg, in_place) {
            Ok(outcome) => report(path, outcome),
            Err(e) => {
                eprintln!("stubdoc: {}: {e}", path.display());
                failed = true;
            }
        }
    }

    u8::from(failed)
}

/// Directory mode applies the identical per-file pipeline to every `.go`
/// file under the root, aborting the whole walk on the first error.
fn run_directory(dir: &Path, cfg: &RunConfig, in_place: bool) -> Result<(), ProcessError> {
    for path in discover_go_files(dir)? {
        let outcome = process_file(&path, cfg, in_place)?;
        report(&path, outcome);
    }
    Ok(())
}

fn report(path: &Path, outcome: Outcome) {
    match outcome {
        Outcome::Unchanged => eprintln!("{} no changes", path.display()),
        Outcome::Rewritten(text) => print!("{text}"),
        Outcome::SkippedTestFile | Outcome::WrittenInPlace => {}
    }
}
