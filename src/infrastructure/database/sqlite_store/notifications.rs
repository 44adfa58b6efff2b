use super::mapper::map_notification_row;
use super::queries::{
    DELETE_NOTIFICATION, INSERT_NOTIFICATION, MARK_ALL_NOTIFICATIONS_READ, MARK_NOTIFICATION_READ,
    SELECT_ALL_NOTIFICATIONS,
};
use super::SqliteStore;
use crate::application::ports::NotificationStore;
use crate::domain::entities::{NewNotification, Notification};
use crate::shared::error::AppError;
use async_trait::async_trait;

#[async_trait]
impl NotificationStore for SqliteStore {
    async fn insert_notification(
        &self,
        new_notification: &NewNotification,
    ) -> Result<Notification, AppError> {
        let notification = Notification::assign(new_notification);

        sqlx::query(INSERT_NOTIFICATION)
            .bind(&notification.id)
            .bind(&notification.title)
            .bind(&notification.body)
            .bind(&notification.kind)
            .bind(notification.is_read as i64)
            .bind(notification.created_at.timestamp_millis())
            .execute(self.pool.get_pool())
            .await?;

        Ok(notification)
    }

    async fn list_notifications(&self) -> Result<Vec<Notification>, AppError> {
        let rows = sqlx::query(SELECT_ALL_NOTIFICATIONS)
            .fetch_all(self.pool.get_pool())
            .await?;

        let mut notifications = Vec::with_capacity(rows.len());
        for row in rows {
            notifications.push(map_notification_row(&row)?);
        }

        Ok(notifications)
    }

    async fn mark_read(&self, id: &str) -> Result<(), AppError> {
        sqlx::query(MARK_NOTIFICATION_READ)
            .bind(id)
            .execute(self.pool.get_pool())
            .await?;

        Ok(())
    }

    async fn mark_all_read(&self) -> Result<(), AppError> {
        sqlx::query(MARK_ALL_NOTIFICATIONS_READ)
            .execute(self.pool.get_pool())
            .await?;

        Ok(())
    }

    async fn delete_notification(&self, id: &str) -> Result<(), AppError> {
        sqlx::query(DELETE_NOTIFICATION)
            .bind(id)
            .execute(self.pool.get_pool())
            .await?;

        Ok(())
    }
}
