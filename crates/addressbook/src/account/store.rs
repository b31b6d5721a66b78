//! Flat-file persistence for account records.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};

/// Reads and writes the raw lines of the accounts file.
#[derive(Debug, Clone)]
pub struct AccountStore {
    path: PathBuf,
}

impl AccountStore {
    /// Create a store backed by the file at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path to the accounts file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every line of the accounts file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read, including when it
    /// does not exist. Callers decide how to degrade.
    pub fn load(&self) -> Result<Vec<String>> {
        let content = std::fs::read_to_string(&self.path)?;
        debug!("Read accounts file {}", self.path.display());
        Ok(content.lines().map(str::to_string).collect())
    }

    /// Overwrite the accounts file with the given lines.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created or the file
    /// cannot be written.
    pub fn save<S: AsRef<str>>(&self, lines: &[S]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|source| Error::DirectoryCreate {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        let mut content = String::new();
        for line in lines {
            content.push_str(line.as_ref());
            content.push('\n');
        }

        std::fs::write(&self.path, content).map_err(|source| Error::DataSaving {
            path: self.path.clone(),
            source,
        })?;
        debug!(
            "Wrote {} account records to {}",
            lines.len(),
            self.path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = AccountStore::new(dir.path().join("accounts.txt"));

        let err = store.load().unwrap_err();
        assert!(matches!(err, Error::Io(e) if e.kind() == std::io::ErrorKind::NotFound));
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = AccountStore::new(dir.path().join("accounts.txt"));

        let lines = ["username: a | passwordHash: 1", "username: b | passwordHash: 2"];
        store.save(&lines).unwrap();

        assert_eq!(store.load().unwrap(), lines);
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = AccountStore::new(dir.path().join("nested").join("accounts.txt"));

        store.save(&["username: a | passwordHash: 1"]).unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn test_load_handles_crlf() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("accounts.txt");
        std::fs::write(&path, "username: a | passwordHash: 1\r\n").unwrap();

        let lines = AccountStore::new(path).load().unwrap();
        assert_eq!(lines, ["username: a | passwordHash: 1"]);
    }
}
