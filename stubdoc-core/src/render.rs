//! Splice printer: re-emits the source text with synthesized comments
//! inserted at their anchors.
//!
//! The printer never reformats: every byte of the input survives except where
//! a comment line is spliced in, so rendering is deterministic and the output
//! of an unchanged file is byte-identical to its input.

use ropey::Rope;

use crate::parse::{Depth, SourceFile};

/// Render the mutated file back to text.
///
/// # Panics
///
/// Panics when the arena violates its invariants (anchors out of bounds or
/// out of source order). That is an internal defect, not a user-facing
/// error, and the run must abort rather than emit corrupt output.
pub fn render(file: &SourceFile) -> String {
    check_anchors(file);

    let mut rope = Rope::from_str(&file.source);
    // Highest anchor first, so earlier byte offsets stay valid as text grows.
    for decl in file.decls.iter().rev() {
        let Some(line) = &decl.pending else {
            continue;
        };
        let insert = match decl.depth {
            Depth::TopLevel => {
                // Guard against the anchor sharing a line with the previous
                // declaration's closing brace: the comment must start on its
                // own line or the printer would attach it to the wrong code.
                let own_line =
                    decl.anchor == 0 || file.source.as_bytes()[decl.anchor - 1] == b'\n';
                if own_line {
                    format!("{line}\n")
                } else {
                    format!("\n{line}\n")
                }
            }
            Depth::Grouped => {
                let prefix = line_prefix(&file.source, decl.anchor);
                if is_horizontal_ws(prefix) {
                    format!("{line}\n{prefix}")
                } else {
                    // The member shares its line with other code (for
                    // example a one-line interface body). Break the line so
                    // the comment still lands directly above the member and
                    // the existing text survives untouched.
                    let indent: String = prefix
                        .chars()
                        .take_while(|c| *c == ' ' || *c == '\t')
                        .collect();
                    format!("\n{indent}{line}\n{indent}")
                }
            }
        };
        rope.insert(rope.byte_to_char(decl.anchor), &insert);
    }
    rope.to_string()
}

/// Text between the start of the anchor's line and the anchor itself. Pure
/// indentation for members laid out one per line, but can contain code when
/// a member shares its line with the enclosing block.
fn line_prefix(source: &str, anchor: usize) -> &str {
    let line_start = source[..anchor].rfind('\n').map_or(0, |i| i + 1);
    &source[line_start..anchor]
}

fn is_horizontal_ws(text: &str) -> bool {
    text.chars().all(|c| c == ' ' || c == '\t')
}

fn check_anchors(file: &SourceFile) {
    let mut last = None;
    for decl in &file.decls {
        assert!(
            decl.anchor <= file.source.len(),
            "declaration anchor {} out of bounds for {} byte source",
            decl.anchor,
            file.source.len()
        );
        if let Some(prev) = last {
            assert!(
                decl.anchor > prev,
                "declaration anchors out of source order: {} after {}",
                decl.anchor,
                prev
            );
        }
        last = Some(decl.anchor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comment::synthesize;
    use crate::config::RunConfig;
    use crate::parse::parse_source;
    use crate::scan::scan;

    fn annotate(src: &str) -> String {
        let cfg = RunConfig::default();
        let mut file = parse_source(src).unwrap();
        for idx in scan(&file) {
            synthesize(&mut file, idx, &cfg);
        }
        render(&file)
    }

    #[test]
    fn no_pending_comments_renders_input_unchanged() {
        let src = "package p\n\nfunc internal() {}\n";
        assert_eq!(annotate(src), src);
    }

    #[test]
    fn top_level_comment_lands_on_its_own_line() {
        let src = "package p\n\nfunc Hello() {}\n";
        assert_eq!(annotate(src), "package p\n\n// Hello ...\nfunc Hello() {}\n");
    }

    #[test]
    fn grouped_member_reuses_ambient_indentation() {
        let src = "package p\n\nconst (\n\tMaxRetries = 3\n)\n";
        assert_eq!(
            annotate(src),
            "package p\n\nconst (\n\t// MaxRetries ...\n\tMaxRetries = 3\n)\n"
        );
    }

    #[test]
    fn multiple_insertions_keep_source_order() {
        let src = "package p\n\nfunc A() {}\n\nfunc B() {}\n";
        assert_eq!(
            annotate(src),
            "package p\n\n// A ...\nfunc A() {}\n\n// B ...\nfunc B() {}\n"
        );
    }

    #[test]
    fn member_sharing_a_line_breaks_the_line_for_its_comment() {
        let src = "package p\n\ntype Greeter interface{ Hello() string }\n";
        assert_eq!(
            annotate(src),
            "package p\n\n// Greeter ...\ntype Greeter interface{ \n// Hello ...\nHello() string }\n"
        );
    }

    #[test]
    #[should_panic(expected = "out of source order")]
    fn unsorted_anchors_are_a_defect() {
        let src = "package p\n\nfunc A() {}\n\nfunc B() {}\n";
        let mut file = parse_source(src).unwrap();
        file.decls.swap(0, 1);
        render(&file);
    }
}
