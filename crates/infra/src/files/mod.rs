//! Folder store adapters

pub mod json_folder_store;

pub use json_folder_store::JsonFolderStore;
