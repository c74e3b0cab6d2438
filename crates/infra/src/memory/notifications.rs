//! Notification store kept in memory

use async_trait::async_trait;
use diwan_core::NotificationService;
use diwan_domain::{DiwanError, Notification, Result};
use parking_lot::RwLock;

#[derive(Debug, Default)]
pub struct InMemoryNotificationStore {
    notifications: RwLock<Vec<Notification>>,
}

impl InMemoryNotificationStore {
    pub fn new(notifications: Vec<Notification>) -> Self {
        Self { notifications: RwLock::new(notifications) }
    }

    /// Deliver a new notification
    pub fn publish(&self, notification: Notification) {
        tracing::debug!(
            notification_id = %notification.id,
            user_id = %notification.user_id,
            "notification published"
        );
        self.notifications.write().push(notification);
    }

    pub fn len(&self) -> usize {
        self.notifications.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.read().is_empty()
    }
}

fn not_found(id: &str) -> DiwanError {
    DiwanError::NotFound(format!("notification {id}"))
}

#[async_trait]
impl NotificationService for InMemoryNotificationStore {
    async fn get_user_notifications(&self, user_id: &str) -> Result<Vec<Notification>> {
        let mut list: Vec<_> =
            self.notifications.read().iter().filter(|n| n.user_id == user_id).cloned().collect();
        list.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(list)
    }

    async fn mark_as_read(&self, id: &str) -> Result<()> {
        let mut notifications = self.notifications.write();
        let entry = notifications.iter_mut().find(|n| n.id == id).ok_or_else(|| not_found(id))?;
        entry.read = true;
        Ok(())
    }

    async fn mark_all_as_read(&self, user_id: &str) -> Result<()> {
        for entry in self.notifications.write().iter_mut().filter(|n| n.user_id == user_id) {
            entry.read = true;
        }
        Ok(())
    }

    async fn delete_notification(&self, id: &str) -> Result<()> {
        let mut notifications = self.notifications.write();
        let index = notifications.iter().position(|n| n.id == id).ok_or_else(|| not_found(id))?;
        notifications.remove(index);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use diwan_domain::{NotificationKind, NotificationPriority};

    use super::*;

    fn notification(id: &str, user_id: &str, hour: u32) -> Notification {
        Notification {
            id: id.into(),
            kind: NotificationKind::Warning,
            title: "Overdue task".into(),
            message: "Canal survey is overdue".into(),
            user_id: user_id.into(),
            read: false,
            priority: NotificationPriority::High,
            created_at: Utc.with_ymd_and_hms(2025, 3, 10, hour, 0, 0).unwrap(),
            related_entity: None,
            action_url: None,
        }
    }

    #[tokio::test]
    async fn test_user_notifications_newest_first() {
        let store = InMemoryNotificationStore::new(vec![
            notification("old", "u1", 8),
            notification("new", "u1", 12),
            notification("foreign", "u2", 9),
        ]);

        let list = store.get_user_notifications("u1").await.unwrap();

        let ids: Vec<_> = list.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["new", "old"]);
    }

    #[tokio::test]
    async fn test_unknown_ids_are_not_found() {
        let store = InMemoryNotificationStore::default();

        assert!(matches!(store.mark_as_read("nope").await, Err(DiwanError::NotFound(_))));
        assert!(matches!(store.delete_notification("nope").await, Err(DiwanError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_mark_all_only_touches_owner() {
        let store = InMemoryNotificationStore::new(vec![
            notification("a", "u1", 8),
            notification("b", "u2", 8),
        ]);

        store.mark_all_as_read("u1").await.unwrap();

        assert!(store.get_user_notifications("u1").await.unwrap()[0].read);
        assert!(!store.get_user_notifications("u2").await.unwrap()[0].read);
    }
}
