//! Candidate file discovery and selection.

use std::path::{Path, PathBuf};

use crate::error::{IngestError, Result};

/// List the CSV files in a directory, sorted by filename.
///
/// The extension match is case-insensitive; subdirectories are not
/// entered.
pub fn list_csv_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let entries = std::fs::read_dir(dir).map_err(|source| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.is_file() && has_csv_extension(&path) {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

fn has_csv_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
}

/// Resolve a 1-based menu choice against a candidate list.
///
/// This is the pure half of the interactive selector; prompting lives in
/// the CLI adapter.
pub fn resolve_selection(files: &[PathBuf], choice: usize) -> Result<&Path> {
    if files.is_empty() {
        return Err(IngestError::NoCandidates);
    }
    if choice == 0 || choice > files.len() {
        return Err(IngestError::InvalidSelection {
            choice,
            available: files.len(),
        });
    }
    Ok(&files[choice - 1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_match_is_case_insensitive() {
        assert!(has_csv_extension(Path::new("a.csv")));
        assert!(has_csv_extension(Path::new("a.CSV")));
        assert!(!has_csv_extension(Path::new("a.tsv")));
        assert!(!has_csv_extension(Path::new("csv")));
    }

    #[test]
    fn selection_is_one_based() {
        let files = vec![PathBuf::from("a.csv"), PathBuf::from("b.csv")];
        assert_eq!(resolve_selection(&files, 1).unwrap(), Path::new("a.csv"));
        assert_eq!(resolve_selection(&files, 2).unwrap(), Path::new("b.csv"));
        assert!(matches!(
            resolve_selection(&files, 0),
            Err(IngestError::InvalidSelection { .. })
        ));
        assert!(matches!(
            resolve_selection(&files, 3),
            Err(IngestError::InvalidSelection { .. })
        ));
    }

    #[test]
    fn empty_candidate_list_is_its_own_error() {
        assert!(matches!(
            resolve_selection(&[], 1),
            Err(IngestError::NoCandidates)
        ));
    }
}
