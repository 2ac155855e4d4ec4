use super::*;
use tempfile::TempDir;

#[test]
fn finds_go_files_recursively_and_sorted() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("pkg/inner")).unwrap();
    fs::write(dir.path().join("zeta.go"), "package p\n").unwrap();
    fs::write(dir.path().join("pkg/alpha.go"), "package pkg\n").unwrap();
    fs::write(dir.path().join("pkg/inner/beta.go"), "package inner\n").unwrap();
    fs::write(dir.path().join("README.md"), "docs\n").unwrap();

    let files = discover_go_files(dir.path()).unwrap();
    let names: Vec<_> = files
        .iter()
        .map(|p| p.strip_prefix(dir.path()).unwrap().to_str().unwrap())
        .collect();
    assert_eq!(names, ["pkg/alpha.go", "pkg/inner/beta.go", "zeta.go"]);
}

#[test]
fn test_files_are_listed_but_left_to_the_pipeline() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a_test.go"), "package p\n").unwrap();

    let files = discover_go_files(dir.path()).unwrap();
    assert_eq!(files.len(), 1);
}

#[test]
fn missing_directory_is_an_error() {
    let dir = TempDir::new().unwrap();
    assert!(discover_go_files(&dir.path().join("absent")).is_err());
}
