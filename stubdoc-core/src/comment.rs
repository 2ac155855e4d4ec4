//! Comment synthesizer: builds the placeholder line for a flagged declaration
//! and attaches it to the declaration's comment group.

use crate::config::RunConfig;
use crate::parse::SourceFile;
use crate::stubdoc_debug;

/// Synthesize the comment for the declaration at `idx` and record it in the
/// arena. The line reads `// <Name> <template>`. Declarations that already
/// carry a comment group are left untouched: synthesis is never destructive.
pub fn synthesize(file: &mut SourceFile, idx: usize, cfg: &RunConfig) {
    let decl = &mut file.decls[idx];
    if !decl.doc.is_empty() || decl.pending.is_some() {
        return;
    }
    let line = format!("// {} {}", decl.name, cfg.template);
    stubdoc_debug!("synthesized for {:?} {}: {}", decl.kind, decl.name, line);
    decl.doc.0.push(line.clone());
    decl.pending = Some(line);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_source;
    use crate::scan::scan;
    use insta::assert_snapshot;

    fn synthesized_line(src: &str, template: &str) -> String {
        let cfg = RunConfig::new(template);
        let mut file = parse_source(src).unwrap();
        let flagged = scan(&file);
        assert_eq!(flagged.len(), 1);
        synthesize(&mut file, flagged[0], &cfg);
        file.decls[flagged[0]].pending.clone().unwrap()
    }

    #[test]
    fn comment_line_puts_name_before_template() {
        let line = synthesized_line("package p\n\nfunc Hello() {}\n", "...");
        assert_snapshot!(line, @"// Hello ...");
    }

    #[test]
    fn comment_line_uses_custom_template() {
        let line = synthesized_line("package p\n\ntype Widget struct{}\n", "is not documented yet.");
        assert_snapshot!(line, @"// Widget is not documented yet.");
    }

    #[test]
    fn existing_comment_group_is_never_modified() {
        let src = "package p\n\n// Hello greets.\nfunc Hello() {}\n";
        let cfg = RunConfig::default();
        let mut file = parse_source(src).unwrap();
        let before = file.decls[0].doc.clone();
        synthesize(&mut file, 0, &cfg);
        assert_eq!(file.decls[0].doc, before);
        assert!(file.decls[0].pending.is_none());
    }
}
