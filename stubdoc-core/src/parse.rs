//! Go source parsing and the declaration arena.
//!
//! Wraps tree-sitter with the Go grammar and flattens the parse tree into an
//! ordered arena of [`Declaration`]s. Grouped `const`/`var`/`type` blocks and
//! interface bodies contribute one arena entry per member, so each member is
//! documented or skipped individually.

use std::fmt;

use crate::scan::is_exported;

/// Error returned when source text is not syntactically valid Go.
#[derive(Debug)]
pub struct ParseError {
    message: String,
}

impl ParseError {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "parse failed: {}", self.message)
    }
}

impl std::error::Error for ParseError {}

/// The kind of a scanned declaration. Closed set: nothing else at the top
/// level of a Go file can carry a doc comment that this tool synthesizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclKind {
    /// `func` declarations, including methods with receivers.
    Func,
    /// A `type` spec, grouped or single.
    TypeSpec,
    /// A `const` or `var` spec, grouped or single.
    ValueSpec,
    /// A named method inside an interface body.
    InterfaceMethod,
}

/// Nesting depth of a declaration's insertion anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Depth {
    /// File scope. Synthesized comments must start on their own line.
    TopLevel,
    /// One level inside a grouped block or interface body. Synthesized
    /// comments reuse the ambient indentation.
    Grouped,
}

/// Comment lines immediately preceding a declaration, with no blank line
/// between the last comment line and the declaration itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentGroup(pub Vec<String>);

impl CommentGroup {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One entry in the declaration arena.
#[derive(Debug, Clone)]
pub struct Declaration {
    pub kind: DeclKind,
    /// Identifier the declaration introduces (first name for multi-name specs).
    pub name: String,
    /// Lexical export test on `name`; see [`is_exported`].
    pub exported: bool,
    pub depth: Depth,
    /// Byte offset of the declaration's first token in the original source.
    pub anchor: usize,
    /// Leading comment group present in the input, possibly empty.
    pub doc: CommentGroup,
    /// Comment line synthesized for this declaration, if any.
    pub pending: Option<String>,
}

/// A parsed Go file: the original text plus its declaration arena, in source
/// order. Constructed fresh per input file, mutated by the synthesizer,
/// consumed once by the printer.
#[derive(Debug)]
pub struct SourceFile {
    pub source: String,
    pub decls: Vec<Declaration>,
}

/// Parse Go source text and build the declaration arena.
///
/// tree-sitter recovers from syntax errors, but the original `go/parser`
/// rejects invalid files outright, so any error or missing node in the tree
/// is reported as a [`ParseError`].
pub fn parse_source(source: &str) -> Result<SourceFile, ParseError> {
    let mut parser = tree_sitter::Parser::new();
    parser
        .set_language(&tree_sitter_go::LANGUAGE.into())
        .expect("Go grammar incompatible with linked tree-sitter");
    let tree = parser
        .parse(source, None)
        .ok_or_else(|| ParseError::new("parser produced no tree"))?;

    let root = tree.root_node();
    if root.has_error() {
        return Err(syntax_error(&root));
    }

    let mut decls = Vec::new();
    let mut cursor = root.walk();
    for child in root.named_children(&mut cursor) {
        match child.kind() {
            "function_declaration" | "method_declaration" => {
                if let Some(name_node) = child.child_by_field_name("name") {
                    decls.push(declaration(
                        DeclKind::Func,
                        node_text(&name_node, source),
                        Depth::TopLevel,
                        &child,
                        source,
                    ));
                }
            }
            "type_declaration" => walk_type_decl(&mut decls, &child, source),
            "const_declaration" | "var_declaration" => walk_value_decl(&mut decls, &child, source),
            _ => {}
        }
    }

    Ok(SourceFile {
        source: source.to_string(),
        decls,
    })
}

/// Walk a `type` declaration: one entry per spec, plus one entry per named
/// method when a spec defines an interface.
fn walk_type_decl(decls: &mut Vec<Declaration>, node: &tree_sitter::Node, source: &str) {
    let grouped = is_grouped(node);
    let mut cursor = node.walk();
    for spec in node.named_children(&mut cursor) {
        if !matches!(spec.kind(), "type_spec" | "type_alias") {
            continue;
        }
        let Some(name_node) = spec.child_by_field_name("name") else {
            continue;
        };
        let (depth, anchor_node) = if grouped {
            (Depth::Grouped, spec)
        } else {
            (Depth::TopLevel, *node)
        };
        decls.push(declaration(
            DeclKind::TypeSpec,
            node_text(&name_node, source),
            depth,
            &anchor_node,
            source,
        ));
        if let Some(ty) = spec.child_by_field_name("type") {
            if ty.kind() == "interface_type" {
                walk_interface(decls, &ty, source);
            }
        }
    }
}

/// Walk a `const` or `var` declaration: one entry per spec. Multi-name specs
/// (`var A, B int`) are keyed on the first name.
fn walk_value_decl(decls: &mut Vec<Declaration>, node: &tree_sitter::Node, source: &str) {
    let grouped = is_grouped(node);
    let mut cursor = node.walk();
    for spec in node.named_children(&mut cursor) {
        if !matches!(spec.kind(), "const_spec" | "var_spec") {
            continue;
        }
        let Some(name_node) = spec.child_by_field_name("name") else {
            continue;
        };
        let (depth, anchor_node) = if grouped {
            (Depth::Grouped, spec)
        } else {
            (Depth::TopLevel, *node)
        };
        decls.push(declaration(
            DeclKind::ValueSpec,
            node_text(&name_node, source),
            depth,
            &anchor_node,
            source,
        ));
    }
}

/// Walk an interface body, one entry per named method.
// The grammar node kind was renamed from method_spec to method_elem upstream;
// match both so either grammar revision works.
fn walk_interface(decls: &mut Vec<Declaration>, node: &tree_sitter::Node, source: &str) {
    let mut cursor = node.walk();
    for member in node.named_children(&mut cursor) {
        if !matches!(member.kind(), "method_spec" | "method_elem") {
            continue;
        }
        if let Some(name_node) = member.child_by_field_name("name") {
            decls.push(declaration(
                DeclKind::InterfaceMethod,
                node_text(&name_node, source),
                Depth::Grouped,
                &member,
                source,
            ));
        }
    }
}

fn declaration(
    kind: DeclKind,
    name: &str,
    depth: Depth,
    anchor_node: &tree_sitter::Node,
    source: &str,
) -> Declaration {
    Declaration {
        kind,
        name: name.to_string(),
        exported: is_exported(name),
        depth,
        anchor: anchor_node.start_byte(),
        doc: leading_comments(anchor_node, source),
        pending: None,
    }
}

/// Collect the comment siblings directly above a node, stopping at the first
/// blank line or non-comment node. Lines are returned in source order.
fn leading_comments(node: &tree_sitter::Node, source: &str) -> CommentGroup {
    let mut lines = Vec::new();
    let mut row = node.start_position().row;
    let mut prev = node.prev_named_sibling();
    while let Some(p) = prev {
        if p.kind() != "comment"
            || p.end_position().row + 1 != row
            || !starts_own_line(&p, source)
        {
            break;
        }
        lines.push(node_text(&p, source).to_string());
        row = p.start_position().row;
        prev = p.prev_named_sibling();
    }
    lines.reverse();
    CommentGroup(lines)
}

/// A comment that trails code on its own line belongs to that code, not to
/// the declaration below it.
fn starts_own_line(node: &tree_sitter::Node, source: &str) -> bool {
    let start = node.start_byte();
    let line_start = source[..start].rfind('\n').map_or(0, |i| i + 1);
    source[line_start..start]
        .chars()
        .all(|c| c == ' ' || c == '\t')
}

/// A declaration block is grouped when its specs sit inside parentheses.
fn is_grouped(node: &tree_sitter::Node) -> bool {
    let mut cursor = node.walk();
    let grouped = node.children(&mut cursor).any(|c| c.kind() == "(");
    grouped
}

fn node_text<'a>(node: &tree_sitter::Node, source: &'a str) -> &'a str {
    &source[node.byte_range()]
}

/// Locate the first error or missing node and report its position.
fn syntax_error(root: &tree_sitter::Node) -> ParseError {
    let mut stack = vec![*root];
    while let Some(node) = stack.pop() {
        if node.is_error() || node.is_missing() {
            let pos = node.start_position();
            return ParseError::new(format!(
                "syntax error at line {}, column {}",
                pos.row + 1,
                pos.column + 1
            ));
        }
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            if child.has_error() {
                stack.push(child);
            }
        }
    }
    ParseError::new("syntax error")
}
