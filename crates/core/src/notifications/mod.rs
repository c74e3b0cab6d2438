//! Per-user notification feed

pub mod feed;
pub mod ports;

pub use feed::NotificationFeed;
pub use ports::NotificationService;
