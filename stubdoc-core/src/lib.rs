//! stubdoc-core: declaration scanning and comment synthesis for Go source files.
//!
//! The core walks a parsed Go file's top-level declarations (descending one
//! level into grouped `const`/`var`/`type` blocks and interface method sets),
//! flags every exported declaration that lacks a leading comment, and splices
//! a placeholder doc comment above each one.
mod cleanup;
mod comment;
mod config;
mod parse;
mod render;
mod rewrite;
mod scan;

pub mod debug;

pub use cleanup::clean_text;
pub use comment::synthesize;
pub use config::{RunConfig, DEFAULT_TEMPLATE};
pub use parse::{parse_source, CommentGroup, DeclKind, Declaration, Depth, ParseError, SourceFile};
pub use render::render;
pub use rewrite::annotate_source;
pub use scan::{is_exported, scan};
