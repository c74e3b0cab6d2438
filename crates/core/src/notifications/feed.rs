//! Cached notification feed for one signed-in user
//!
//! The cache only changes after the notification service confirms a call.
//! `unread_count` always equals the number of cached entries with
//! `read == false`.

use std::sync::Arc;

use diwan_domain::{Notification, Result};
use tracing::{debug, error};

use super::ports::NotificationService;

/// Notification cache and unread counter for one user
pub struct NotificationFeed {
    service: Arc<dyn NotificationService>,
    user_id: String,
    notifications: Vec<Notification>,
    unread_count: usize,
    loading: bool,
}

impl std::fmt::Debug for NotificationFeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationFeed")
            .field("user_id", &self.user_id)
            .field("cached", &self.notifications.len())
            .field("unread_count", &self.unread_count)
            .field("loading", &self.loading)
            .finish_non_exhaustive()
    }
}

impl NotificationFeed {
    /// Empty feed for `user_id`; nothing is fetched until [`load`](Self::load)
    pub fn new(service: Arc<dyn NotificationService>, user_id: impl Into<String>) -> Self {
        Self {
            service,
            user_id: user_id.into(),
            notifications: Vec::new(),
            unread_count: 0,
            loading: false,
        }
    }

    /// Replace the cache with the service's current list.
    ///
    /// # Errors
    /// The service failure; the previous cache is kept.
    pub async fn load(&mut self) -> Result<()> {
        self.loading = true;
        let fetched = self.service.get_user_notifications(&self.user_id).await;
        self.loading = false;

        match fetched {
            Ok(notifications) => {
                self.unread_count = notifications.iter().filter(|n| n.is_unread()).count();
                self.notifications = notifications;
                debug!(
                    user_id = %self.user_id,
                    total = self.notifications.len(),
                    unread = self.unread_count,
                    "notifications loaded"
                );
                Ok(())
            }
            Err(err) => {
                error!(user_id = %self.user_id, error = %err, "failed to load notifications");
                Err(err)
            }
        }
    }

    /// Mark one notification read.
    ///
    /// # Errors
    /// The service failure; the cache is left untouched.
    pub async fn mark_read(&mut self, id: &str) -> Result<()> {
        if let Err(err) = self.service.mark_as_read(id).await {
            error!(notification_id = id, error = %err, "failed to mark notification read");
            return Err(err);
        }

        if let Some(entry) = self.notifications.iter_mut().find(|n| n.id == id) {
            if !entry.read {
                entry.read = true;
                self.unread_count = self.unread_count.saturating_sub(1);
            }
        }
        Ok(())
    }

    /// Mark every notification of this user read.
    ///
    /// # Errors
    /// The service failure; the cache is left untouched.
    pub async fn mark_all_read(&mut self) -> Result<()> {
        if let Err(err) = self.service.mark_all_as_read(&self.user_id).await {
            error!(user_id = %self.user_id, error = %err, "failed to mark all notifications read");
            return Err(err);
        }

        for entry in &mut self.notifications {
            entry.read = true;
        }
        self.unread_count = 0;
        Ok(())
    }

    /// Delete one notification.
    ///
    /// # Errors
    /// The service failure; the cache is left untouched.
    pub async fn remove(&mut self, id: &str) -> Result<()> {
        if let Err(err) = self.service.delete_notification(id).await {
            error!(notification_id = id, error = %err, "failed to delete notification");
            return Err(err);
        }

        if let Some(index) = self.notifications.iter().position(|n| n.id == id) {
            let removed = self.notifications.remove(index);
            if removed.is_unread() {
                self.unread_count = self.unread_count.saturating_sub(1);
            }
        }
        Ok(())
    }

    /// Cached notifications in service order
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Number of cached entries with `read == false`
    pub const fn unread_count(&self) -> usize {
        self.unread_count
    }

    /// Whether a [`load`](Self::load) is in flight
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Owner of the feed
    pub fn user_id(&self) -> &str {
        &self.user_id
    }
}
