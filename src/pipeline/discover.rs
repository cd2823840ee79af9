//! GPX file discovery for directory-scan merges

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;

use super::error::MergeError;

pub const GPX_EXTENSION: &str = "gpx";

/// True when the file name ends in `.gpx`, ignoring ASCII case.
pub fn has_gpx_name(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().to_ascii_lowercase().ends_with(".gpx"))
        .unwrap_or(false)
}

/// List the `.gpx` files directly inside `dir`, sorted by full path.
///
/// Subdirectories are not descended into. A missing directory yields an empty
/// list so the caller can report it as having no input files.
pub fn find_gpx_files(dir: &Path) -> Result<Vec<PathBuf>, MergeError> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            debug!("Input directory {} does not exist", dir.display());
            return Ok(Vec::new());
        }
        Err(source) => {
            return Err(MergeError::Read {
                path: dir.to_path_buf(),
                source,
            })
        }
    };

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| MergeError::Read {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.is_file() && has_gpx_name(&path) {
            files.push(path);
        }
    }
    files.sort();

    debug!("Found {} GPX file(s) in {}", files.len(), dir.display());
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_has_gpx_name_is_case_insensitive() {
        assert!(has_gpx_name(Path::new("a.gpx")));
        assert!(has_gpx_name(Path::new("dir/B.GPX")));
        assert!(has_gpx_name(Path::new("c.Gpx")));
        assert!(!has_gpx_name(Path::new("d.gpx.bak")));
        assert!(!has_gpx_name(Path::new("gpx")));
    }

    #[test]
    fn test_find_sorted_and_filtered() {
        let dir = TempDir::new().unwrap();
        for name in ["b.gpx", "a.GPX", "notes.txt", "c.gpx"] {
            fs::write(dir.path().join(name), "<trk>").unwrap();
        }
        fs::create_dir(dir.path().join("nested.gpx")).unwrap();

        let files = find_gpx_files(dir.path()).unwrap();
        let names: Vec<String> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.GPX", "b.gpx", "c.gpx"]);
    }

    #[test]
    fn test_missing_directory_is_empty() {
        let dir = TempDir::new().unwrap();
        let files = find_gpx_files(&dir.path().join("nope")).unwrap();
        assert!(files.is_empty());
    }
}
