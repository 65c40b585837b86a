use anyhow::Context;
use std::collections::HashSet;
use std::path::PathBuf;
use walkdir::WalkDir;

/// The files found by [`find_graphql_files`].
#[derive(Debug, Default)]
pub(crate) struct FoundFiles {
    pub graphql_files: Vec<PathBuf>,
    pub num_skipped_files: usize,
}

/// Normalizes extensions given as `graphql` or `.graphql` to the latter.
pub(crate) fn normalize_exts(exts: &[String]) -> HashSet<String> {
    exts.iter()
        .map(|ext| {
            if !ext.starts_with('.') {
                format!(".{ext}")
            } else {
                ext.to_owned()
            }
        })
        .collect()
}

/// Finds every file at or under `paths` whose extension is in `exts`.
///
/// A single file path that matches no extension is still returned: naming
/// one file explicitly means it should be treated as GraphQL.
pub(crate) fn find_graphql_files(
    paths: &[PathBuf],
    exts: &[String],
) -> anyhow::Result<FoundFiles> {
    let exts = normalize_exts(exts);
    let mut found = FoundFiles::default();

    log::debug!("Scanning {} input paths...", paths.len());
    for path in paths {
        for entry in WalkDir::new(path.as_path()).follow_links(true) {
            let entry = entry.with_context(|| {
                format!("Failed to read filesystem entries at/under {path:#?}")
            })?;
            let entry_path = entry.path();
            if !entry.file_type().is_file() {
                log::trace!("Skipping non-file: {entry_path:#?}.");
                continue;
            }
            let matches_ext = entry_path.extension()
                .map(|ext| format!(".{}", ext.to_string_lossy()))
                .is_some_and(|ext| exts.contains(&ext));
            if matches_ext {
                log::trace!("Found GraphQL file at {entry_path:#?}.");
                found.graphql_files.push(entry_path.to_path_buf());
            } else {
                found.num_skipped_files += 1;
            }
        }
    }

    if found.graphql_files.is_empty()
        && let [only_path] = paths
        && only_path.is_file()
    {
        log::warn!(
            "Proceeding with {only_path:#?} even though it doesn't match any of \
            the --graphql-file-exts ({}).",
            exts.iter()
                .map(|ext| format!("`{ext}`"))
                .collect::<Vec<_>>()
                .join(", "),
        );
        found.num_skipped_files = found.num_skipped_files.saturating_sub(1);
        found.graphql_files.push(only_path.to_path_buf());
    }

    log::debug!("Found {} GraphQL files.", found.graphql_files.len());
    Ok(found)
}
