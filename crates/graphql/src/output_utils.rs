use anyhow::Context;
use graphql_web::Source;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

pub(crate) const GREEN_CHECK: &str = "\u{2705}";
pub(crate) const RED_X: &str = "\u{274C}";

/// GraphQL files found under a set of paths.
#[derive(Debug, Default)]
pub(crate) struct FoundFiles {
    pub paths: Vec<PathBuf>,
    pub num_skipped: usize,
    pub errors: Vec<walkdir::Error>,
}

/// Recursively collects files under `roots` whose extension is in
/// `file_exts` (with or without a leading `.`).
///
/// A single root naming a file is always included, whatever its extension.
pub(crate) fn find_graphql_files(roots: &[PathBuf], file_exts: &[String]) -> FoundFiles {
    let file_exts: HashSet<&str> =
        file_exts.iter()
            .map(|ext| ext.trim_start_matches('.'))
            .collect();

    log::debug!("Scanning {} input paths...", roots.len());
    let mut found = FoundFiles::default();
    for root in roots {
        for entry in WalkDir::new(root).follow_links(true) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    log::trace!(
                        "Encountered an error while iterating recursive \
                        filesystem entities at/under {root:#?}."
                    );
                    found.errors.push(e);
                    continue
                },
            };

            let path = entry.path();
            if !entry.file_type().is_file() {
                log::trace!("Skipping non-file: {path:#?}.");
                continue
            }
            let matches_ext = path.extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| file_exts.contains(ext));
            if matches_ext {
                log::trace!("Found file at {path:#?}.");
                found.paths.push(path.to_path_buf());
            } else {
                found.num_skipped += 1;
            }
        }
    }

    if found.paths.is_empty()
        && let [only_root] = roots
        && only_root.is_file() {
        log::warn!(
            "Proceeding to check {only_root:#?} even though it doesn't match \
            any of the --graphql-file-exts ({}).",
            file_exts.iter()
                .map(|ext| format!("`.{ext}`"))
                .collect::<Vec<_>>()
                .join(", "),
        );
        found.num_skipped = found.num_skipped.saturating_sub(1);
        found.paths.push(only_root.clone());
    }

    found
}

/// Reads `path` into a [`Source`] named after it, so errors point at the
/// file.
pub(crate) async fn read_source(path: &Path) -> anyhow::Result<Source> {
    let body = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;
    Ok(Source::new(body).with_name(path.display().to_string()))
}
