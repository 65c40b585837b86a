//! Tests for [`crate::graphql_files`].

use crate::graphql_files::find_graphql_files;
use crate::graphql_files::normalize_exts;
use crate::tests::utils::temp_dir;
use crate::tests::utils::write_file;
use std::collections::HashSet;

/// Verifies that extensions with and without a leading dot normalize alike.
#[test]
fn test_normalize_exts() {
    assert_eq!(
        normalize_exts(&["graphql".to_string(), ".gql".to_string()]),
        HashSet::from([".graphql".to_string(), ".gql".to_string()]),
    );
}

/// Verifies that directories are walked recursively and non-matching files
/// are counted as skipped.
#[test]
fn test_find_in_directory() {
    let dir = temp_dir("find-in-directory");
    let a = write_file(&dir, "a.graphql", "{ a }");
    let b = write_file(&dir, "nested/b.graphqls", "type B { id: ID }");
    write_file(&dir, "nested/readme.md", "# readme");

    let found = find_graphql_files(
        &[dir.clone()],
        &["graphql".to_string(), "graphqls".to_string()],
    ).unwrap();
    let mut files = found.graphql_files;
    files.sort();
    assert_eq!(files, vec![a, b]);
    assert_eq!(found.num_skipped_files, 1);

    std::fs::remove_dir_all(dir).unwrap();
}

/// Verifies that a single explicitly named file is used even when its
/// extension doesn't match.
#[test]
fn test_single_file_with_other_extension() {
    let dir = temp_dir("single-file");
    let query = write_file(&dir, "query.txt", "{ a }");

    let found = find_graphql_files(&[query.clone()], &["graphql".to_string()]).unwrap();
    assert_eq!(found.graphql_files, vec![query]);
    assert_eq!(found.num_skipped_files, 0);

    std::fs::remove_dir_all(dir).unwrap();
}

/// Verifies that a missing path is an error.
#[test]
fn test_missing_path() {
    let dir = temp_dir("missing-path");
    let result = find_graphql_files(&[dir.join("nope")], &["graphql".to_string()]);
    assert!(result.is_err());
    std::fs::remove_dir_all(dir).unwrap();
}
