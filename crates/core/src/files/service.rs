//! Named folders of JSON documents (exports, backups, reports, ...)

use std::sync::Arc;

use chrono::Utc;
use diwan_domain::constants::SYSTEM_FOLDERS;
use diwan_domain::{Result, StoredFile};
use serde_json::Value;
use tracing::{debug, info};

use super::ports::FolderStore;

/// Document operations over a [`FolderStore`]
pub struct FolderService {
    store: Arc<dyn FolderStore>,
}

impl FolderService {
    /// Wrap `store`
    pub fn new(store: Arc<dyn FolderStore>) -> Self {
        Self { store }
    }

    /// Create `folder`; idempotent
    ///
    /// # Errors
    /// The store failure, e.g. `InvalidInput` for an unsafe name.
    pub fn create_folder(&self, folder: &str) -> Result<()> {
        self.store.create_folder(folder)
    }

    /// Names of existing folders
    ///
    /// # Errors
    /// The store failure.
    pub fn list_folders(&self) -> Result<Vec<String>> {
        self.store.list_folders()
    }

    /// Store `data` as `folder/name`, creating the folder when needed.
    /// Overwrites an existing file of the same name.
    ///
    /// # Errors
    /// The store failure while creating the folder or writing the file.
    pub fn save_file(&self, folder: &str, name: &str, data: Value) -> Result<StoredFile> {
        self.store.create_folder(folder)?;
        let file = StoredFile::new(data, Utc::now());
        self.store.write_file(folder, name, &file)?;
        debug!(folder, name, size = file.size, "file saved");
        Ok(file)
    }

    /// Payload of `folder/name`; `None` when the folder or file is missing
    ///
    /// # Errors
    /// The store failure, e.g. unreadable or malformed content.
    pub fn read_file(&self, folder: &str, name: &str) -> Result<Option<Value>> {
        Ok(self.store.read_file(folder, name)?.map(|file| file.data))
    }

    /// Full record including timestamp and size
    ///
    /// # Errors
    /// The store failure.
    pub fn file_info(&self, folder: &str, name: &str) -> Result<Option<StoredFile>> {
        self.store.read_file(folder, name)
    }

    /// File names in `folder`; empty when the folder is missing
    ///
    /// # Errors
    /// The store failure.
    pub fn list_files(&self, folder: &str) -> Result<Vec<String>> {
        self.store.list_files(folder)
    }

    /// Remove `folder/name`; a missing file is not an error
    ///
    /// # Errors
    /// The store failure.
    pub fn delete_file(&self, folder: &str, name: &str) -> Result<()> {
        self.store.delete_file(folder, name)?;
        debug!(folder, name, "file deleted");
        Ok(())
    }

    /// Create the fixed set of system folders
    ///
    /// # Errors
    /// The first folder the store fails to create.
    pub fn initialize_system_folders(&self) -> Result<()> {
        for folder in SYSTEM_FOLDERS {
            self.store.create_folder(folder)?;
        }
        info!(count = SYSTEM_FOLDERS.len(), "system folders ready");
        Ok(())
    }
}
