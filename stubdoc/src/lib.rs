//! stubdoc: insert placeholder doc comments above exported Go declarations.
//!
//! The library half of the CLI: per-file orchestration (read, transform,
//! compare, write or emit) and recursive discovery of `.go` files. Each file
//! is an independent unit of work; nothing is shared across files except the
//! immutable per-run configuration.

pub mod discover;
pub mod process;

pub use discover::discover_go_files;
pub use process::{process_file, Outcome, ProcessError};

// Re-export core's debug macro.
pub use stubdoc_core::stubdoc_debug;
