//! Port interfaces for the notification subsystem

use async_trait::async_trait;
use diwan_domain::{Notification, Result};

/// Storage and delivery side of user notifications
#[async_trait]
pub trait NotificationService: Send + Sync {
    /// Every notification addressed to `user_id`, newest first
    async fn get_user_notifications(&self, user_id: &str) -> Result<Vec<Notification>>;

    async fn mark_as_read(&self, id: &str) -> Result<()>;

    /// Mark every notification of `user_id` read
    async fn mark_all_as_read(&self, user_id: &str) -> Result<()>;

    async fn delete_notification(&self, id: &str) -> Result<()>;
}
