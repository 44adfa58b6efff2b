use crate::application::ports::{Notifier, Toast};
use crate::application::services::NotificationService;
use crate::domain::entities::Notification;
use std::sync::Arc;
use tracing::warn;

/// Notifications screen: load-only list, newest first.
pub struct NotificationHandler {
    service: Arc<NotificationService>,
    notifier: Arc<dyn Notifier>,
}

impl NotificationHandler {
    pub fn new(service: Arc<NotificationService>, notifier: Arc<dyn Notifier>) -> Self {
        Self { service, notifier }
    }

    /// In-app notification entry point (trip invites, reminders).
    pub async fn push(&self, title: &str, body: &str, kind: &str) {
        if let Err(err) = self.service.push(title, body, kind).await {
            warn!("push notification failed: {}", err);
            self.notifier
                .notify(Toast::error("Failed to save notification"))
                .await;
        }
    }

    pub async fn list(&self) -> Vec<Notification> {
        match self.service.list().await {
            Ok(notifications) => notifications,
            Err(err) => {
                warn!("notification list failed: {}", err);
                self.notifier
                    .notify(Toast::error("Failed to load notifications"))
                    .await;
                Vec::new()
            }
        }
    }

    pub async fn unread_count(&self) -> usize {
        self.service.unread_count().await.unwrap_or(0)
    }

    pub async fn mark_read(&self, id: &str) {
        if let Err(err) = self.service.mark_read(id).await {
            warn!("mark notification read failed: {}", err);
            self.notifier
                .notify(Toast::error("Failed to update notification"))
                .await;
        }
    }

    pub async fn mark_all_read(&self) {
        if let Err(err) = self.service.mark_all_read().await {
            warn!("mark all notifications read failed: {}", err);
            self.notifier
                .notify(Toast::error("Failed to update notifications"))
                .await;
        }
    }

    pub async fn delete(&self, id: &str) {
        if let Err(err) = self.service.delete(id).await {
            warn!("delete notification failed: {}", err);
            self.notifier
                .notify(Toast::error("Failed to delete notification"))
                .await;
        }
    }
}
