use crate::application::ports::NotificationStore;
use crate::domain::entities::{NewNotification, Notification};
use crate::shared::error::AppError;
use std::sync::Arc;

/// Notifications screen: load-only listing, newest first, plus read
/// bookkeeping. Not trip-scoped and not on the change feed.
pub struct NotificationService {
    store: Arc<dyn NotificationStore>,
}

impl NotificationService {
    pub fn new(store: Arc<dyn NotificationStore>) -> Self {
        Self { store }
    }

    pub async fn push(
        &self,
        title: &str,
        body: &str,
        kind: &str,
    ) -> Result<Notification, AppError> {
        let new_notification = NewNotification {
            title: title.to_string(),
            body: body.to_string(),
            kind: kind.to_string(),
        };
        self.store.insert_notification(&new_notification).await
    }

    pub async fn list(&self) -> Result<Vec<Notification>, AppError> {
        self.store.list_notifications().await
    }

    pub async fn unread_count(&self) -> Result<usize, AppError> {
        let notifications = self.store.list_notifications().await?;
        Ok(notifications.iter().filter(|n| !n.is_read).count())
    }

    pub async fn mark_read(&self, id: &str) -> Result<(), AppError> {
        self.store.mark_read(id).await
    }

    pub async fn mark_all_read(&self) -> Result<(), AppError> {
        self.store.mark_all_read().await
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        self.store.delete_notification(id).await
    }
}
