//! Filesystem folder store
//!
//! Layout: `<root>/<folder>/<name>.json`, one pretty-printed [`StoredFile`]
//! per file.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use diwan_core::FolderStore;
use diwan_domain::constants::STORED_FILE_EXTENSION;
use diwan_domain::{DiwanError, Result, StoredFile};

#[derive(Debug, Clone)]
pub struct JsonFolderStore {
    root: PathBuf,
}

impl JsonFolderStore {
    /// Store rooted at `root`; the directory is created on first write
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn folder_path(&self, folder: &str) -> Result<PathBuf> {
        check_name(folder)?;
        Ok(self.root.join(folder))
    }

    fn file_path(&self, folder: &str, name: &str) -> Result<PathBuf> {
        check_name(name)?;
        Ok(self.folder_path(folder)?.join(format!("{name}.{STORED_FILE_EXTENSION}")))
    }
}

/// Folder and file names are single path components
fn check_name(name: &str) -> Result<()> {
    if name.is_empty() || name.contains(['/', '\\']) || name.contains("..") {
        return Err(DiwanError::InvalidInput(format!("invalid folder store name: {name:?}")));
    }
    Ok(())
}

/// Entries of `dir` accepted by `keep`, sorted; a missing directory is empty
fn sorted_entries(
    dir: &Path,
    keep: impl Fn(&std::fs::DirEntry) -> Option<String>,
) -> Result<Vec<String>> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(err) => return Err(err.into()),
    };

    let mut names = Vec::new();
    for entry in entries {
        if let Some(name) = keep(&entry?) {
            names.push(name);
        }
    }
    names.sort();
    Ok(names)
}

impl FolderStore for JsonFolderStore {
    fn create_folder(&self, folder: &str) -> Result<()> {
        std::fs::create_dir_all(self.folder_path(folder)?)?;
        Ok(())
    }

    fn list_folders(&self) -> Result<Vec<String>> {
        sorted_entries(&self.root, |entry| {
            let is_dir = entry.file_type().is_ok_and(|t| t.is_dir());
            is_dir.then(|| entry.file_name().to_string_lossy().into_owned())
        })
    }

    fn write_file(&self, folder: &str, name: &str, file: &StoredFile) -> Result<()> {
        let dir = self.folder_path(folder)?;
        if !dir.is_dir() {
            return Err(DiwanError::NotFound(format!("folder {folder}")));
        }
        let bytes = serde_json::to_vec_pretty(file)?;
        std::fs::write(self.file_path(folder, name)?, bytes)?;
        Ok(())
    }

    fn read_file(&self, folder: &str, name: &str) -> Result<Option<StoredFile>> {
        let path = self.file_path(folder, name)?;
        let bytes = match std::fs::read(&path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        Ok(Some(serde_json::from_slice(&bytes)?))
    }

    fn list_files(&self, folder: &str) -> Result<Vec<String>> {
        sorted_entries(&self.folder_path(folder)?, |entry| {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some(STORED_FILE_EXTENSION) {
                return None;
            }
            path.file_stem().map(|stem| stem.to_string_lossy().into_owned())
        })
    }

    fn delete_file(&self, folder: &str, name: &str) -> Result<()> {
        match std::fs::remove_file(self.file_path(folder, name)?) {
            Err(err) if err.kind() != ErrorKind::NotFound => Err(err.into()),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_must_be_single_components() {
        for bad in ["", "a/b", "a\\b", "..", "up..", "../etc"] {
            assert!(matches!(check_name(bad), Err(DiwanError::InvalidInput(_))), "{bad:?}");
        }
        assert!(check_name("report-2025.v2").is_ok());
    }

    #[test]
    fn test_missing_root_lists_nothing() {
        let store = JsonFolderStore::new("/nonexistent/diwan-files");
        assert!(store.list_folders().unwrap().is_empty());
        assert!(store.list_files("exports").unwrap().is_empty());
    }
}
