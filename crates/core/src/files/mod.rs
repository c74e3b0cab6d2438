//! Folder store

pub mod ports;
pub mod service;

pub use ports::FolderStore;
pub use service::FolderService;
