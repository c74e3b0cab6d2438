//! In-memory adapters for the core ports

pub mod correspondence;
pub mod directory;
pub mod notifications;

pub use correspondence::InMemoryCorrespondenceStore;
pub use directory::InMemoryDirectory;
pub use notifications::InMemoryNotificationStore;
