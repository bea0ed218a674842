//! Target directory classification

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{Result, StarterError};

/// Version-control metadata entry that does not count as content
const VCS_METADATA: &str = ".git";

/// What currently sits at the target path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryState {
    /// Nothing exists at the path
    Missing,
    /// A directory with no entries, or only `.git`
    Empty,
    /// A directory with real content; overwriting needs confirmation
    NonEmpty,
    /// Something other than a directory exists at the path
    NotADirectory,
}

impl DirectoryState {
    /// Inspect `path`
    ///
    /// # Errors
    ///
    /// Returns [`StarterError::Inspect`] if the path exists but its metadata or
    /// entries cannot be read.
    pub fn of(path: &Path) -> Result<Self> {
        let metadata = match fs::metadata(path) {
            Ok(metadata) => metadata,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Self::Missing),
            Err(source) => {
                return Err(StarterError::Inspect {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        if !metadata.is_dir() {
            return Ok(Self::NotADirectory);
        }

        if is_empty_dir(path).map_err(|source| StarterError::Inspect {
            path: path.to_path_buf(),
            source,
        })? {
            Ok(Self::Empty)
        } else {
            Ok(Self::NonEmpty)
        }
    }

    /// Whether the generator can write here without asking
    #[must_use]
    pub const fn is_ready(self) -> bool {
        matches!(self, Self::Missing | Self::Empty)
    }
}

/// A directory counts as empty when it has no entries or only `.git`
fn is_empty_dir(path: &Path) -> io::Result<bool> {
    let mut entries = fs::read_dir(path)?;

    match entries.next().transpose()? {
        None => Ok(true),
        Some(first) => Ok(first.file_name() == VCS_METADATA && entries.next().is_none()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_path() {
        let temp = TempDir::new().unwrap();
        let state = DirectoryState::of(&temp.path().join("nope")).unwrap();
        assert_eq!(state, DirectoryState::Missing);
        assert!(state.is_ready());
    }

    #[test]
    fn test_empty_directory() {
        let temp = TempDir::new().unwrap();
        assert_eq!(DirectoryState::of(temp.path()).unwrap(), DirectoryState::Empty);
    }

    #[test]
    fn test_git_only_directory_counts_as_empty() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".git")).unwrap();

        let state = DirectoryState::of(temp.path()).unwrap();
        assert_eq!(state, DirectoryState::Empty);
        assert!(state.is_ready());
    }

    #[test]
    fn test_single_other_file_is_non_empty() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("README.md"), "hi").unwrap();

        let state = DirectoryState::of(temp.path()).unwrap();
        assert_eq!(state, DirectoryState::NonEmpty);
        assert!(!state.is_ready());
    }

    #[test]
    fn test_git_plus_another_entry_is_non_empty() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".git")).unwrap();
        fs::write(temp.path().join("index.ts"), "").unwrap();

        assert_eq!(DirectoryState::of(temp.path()).unwrap(), DirectoryState::NonEmpty);
    }

    #[test]
    fn test_file_at_target_path() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("demo");
        fs::write(&file, "not a dir").unwrap();

        let state = DirectoryState::of(&file).unwrap();
        assert_eq!(state, DirectoryState::NotADirectory);
        assert!(!state.is_ready());
    }
}
