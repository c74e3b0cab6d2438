//! Port interface for the named-folder document store

use diwan_domain::{Result, StoredFile};

/// Backing storage for [`FolderService`](super::FolderService)
///
/// Synchronous; adapters are expected to be local and fast.
pub trait FolderStore: Send + Sync {
    /// Create `folder` if it does not exist yet
    fn create_folder(&self, folder: &str) -> Result<()>;

    fn list_folders(&self) -> Result<Vec<String>>;

    /// Write `file` under `folder/name`, replacing any previous content.
    /// `folder` must already exist.
    fn write_file(&self, folder: &str, name: &str, file: &StoredFile) -> Result<()>;

    /// `None` when the folder or the file is missing
    fn read_file(&self, folder: &str, name: &str) -> Result<Option<StoredFile>>;

    /// File names in `folder`; empty when the folder is missing
    fn list_files(&self, folder: &str) -> Result<Vec<String>>;

    /// Remove `folder/name`; a missing file is not an error
    fn delete_file(&self, folder: &str, name: &str) -> Result<()>;
}
