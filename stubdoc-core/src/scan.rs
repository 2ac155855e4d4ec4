//! Declaration scanner: decides which declarations need a synthesized comment.

use crate::parse::SourceFile;

/// Go's lexical export rule: a name is externally visible iff its first
/// character is in the Unicode uppercase class. The blank identifier and
/// empty names never qualify.
pub fn is_exported(name: &str) -> bool {
    name.chars().next().is_some_and(char::is_uppercase)
}

/// Arena indices of declarations requiring comment synthesis, in source
/// order. A declaration qualifies iff it is exported and carries no leading
/// comment group. Source order is preserved so re-rendering is deterministic.
pub fn scan(file: &SourceFile) -> Vec<usize> {
    file.decls
        .iter()
        .enumerate()
        .filter(|(_, decl)| decl.exported && decl.doc.is_empty() && decl.pending.is_none())
        .map(|(idx, _)| idx)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_source;

    #[test]
    fn exported_requires_leading_uppercase() {
        assert!(is_exported("Foo"));
        assert!(is_exported("F"));
        assert!(!is_exported("foo"));
        assert!(!is_exported("_Foo"));
        assert!(!is_exported("_"));
        assert!(!is_exported(""));
    }

    #[test]
    fn exported_uses_unicode_case_classes() {
        // Go's unicode.IsUpper, not ASCII-only.
        assert!(is_exported("Über"));
        assert!(is_exported("Δelta"));
        assert!(!is_exported("über"));
        assert!(!is_exported("δelta"));
    }

    #[test]
    fn scan_flags_only_undocumented_exported_decls() {
        let src = "package p\n\n// Documented does things.\nfunc Documented() {}\n\nfunc Bare() {}\n\nfunc internal() {}\n";
        let file = parse_source(src).unwrap();
        let flagged = scan(&file);
        assert_eq!(flagged.len(), 1);
        assert_eq!(file.decls[flagged[0]].name, "Bare");
    }

    #[test]
    fn scan_preserves_source_order() {
        let src = "package p\n\nfunc B() {}\n\nfunc A() {}\n\nfunc C() {}\n";
        let file = parse_source(src).unwrap();
        let names: Vec<&str> = scan(&file)
            .into_iter()
            .map(|i| file.decls[i].name.as_str())
            .collect();
        assert_eq!(names, ["B", "A", "C"]);
    }
}
