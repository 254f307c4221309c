//! Pre-flight checks run before a pass reads its first row.

use std::path::Path;

use baac_model::{DatasetPaths, RecordKind};
use tracing::debug;

use crate::error::{IngestError, Result};

/// Ensure `path` names an existing regular file.
pub fn check_input_file(path: &Path) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    if !metadata.is_file() {
        return Err(IngestError::NotAFile {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

/// Ensure the directory that will hold `path` exists.
///
/// The output file itself is created (or truncated) by the writer.
pub fn check_output_path(path: &Path) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => return Ok(()),
    };
    if parent.is_dir() {
        Ok(())
    } else {
        Err(IngestError::OutputDirectoryNotFound {
            path: parent.to_path_buf(),
        })
    }
}

/// Check both ends of one dataset.
pub fn check_dataset(kind: RecordKind, paths: &DatasetPaths) -> Result<()> {
    debug!(
        kind = %kind,
        input = %paths.input.display(),
        output = %paths.output.display(),
        "pre-flight check"
    );
    check_input_file(&paths.input)?;
    check_output_path(&paths.output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let err = check_input_file(&dir.path().join("usagers_2009.csv")).unwrap_err();
        assert!(matches!(err, IngestError::FileNotFound { .. }));
    }

    #[test]
    fn test_directory_is_not_an_input() {
        let dir = tempfile::tempdir().unwrap();
        let err = check_input_file(dir.path()).unwrap_err();
        assert!(matches!(err, IngestError::NotAFile { .. }));
    }

    #[test]
    fn test_existing_input() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lieux_2009.csv");
        fs::write(&path, "Num_Acc\n").unwrap();
        assert!(check_input_file(&path).is_ok());
    }

    #[test]
    fn test_output_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(check_output_path(&dir.path().join("NEW_lieux_2009.csv")).is_ok());
        assert!(check_output_path(Path::new("NEW_lieux_2009.csv")).is_ok());
        let err = check_output_path(&dir.path().join("missing/NEW_lieux_2009.csv")).unwrap_err();
        assert!(matches!(err, IngestError::OutputDirectoryNotFound { .. }));
    }
}
