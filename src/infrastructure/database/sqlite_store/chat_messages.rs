use super::mapper::map_chat_message_row;
use super::queries::{
    DELETE_CHAT_MESSAGE, INSERT_CHAT_MESSAGE, SELECT_CHAT_MESSAGES_BY_TRIP,
    SELECT_CHAT_MESSAGE_BY_ID,
};
use super::SqliteStore;
use crate::application::ports::ChatMessageStore;
use crate::domain::entities::{ChatMessage, NewChatMessage};
use crate::domain::events::RowEvent;
use crate::domain::value_objects::TripId;
use crate::shared::error::AppError;
use async_trait::async_trait;

#[async_trait]
impl ChatMessageStore for SqliteStore {
    async fn insert_message(&self, new_message: &NewChatMessage) -> Result<ChatMessage, AppError> {
        let message = ChatMessage::assign(new_message);

        sqlx::query(INSERT_CHAT_MESSAGE)
            .bind(&message.id)
            .bind(&message.trip_id)
            .bind(&message.sender_id)
            .bind(&message.sender_name)
            .bind(&message.body)
            .bind(message.sent_at.timestamp_millis())
            .execute(self.pool.get_pool())
            .await?;

        self.feed
            .publish_chat_message(&message.trip_id, RowEvent::Inserted(message.clone()))
            .await;

        Ok(message)
    }

    async fn list_messages(&self, trip_id: &TripId) -> Result<Vec<ChatMessage>, AppError> {
        let rows = sqlx::query(SELECT_CHAT_MESSAGES_BY_TRIP)
            .bind(trip_id.as_str())
            .fetch_all(self.pool.get_pool())
            .await?;

        let mut messages = Vec::with_capacity(rows.len());
        for row in rows {
            messages.push(map_chat_message_row(&row)?);
        }

        Ok(messages)
    }

    async fn delete_message(&self, id: &str) -> Result<(), AppError> {
        let row = sqlx::query(SELECT_CHAT_MESSAGE_BY_ID)
            .bind(id)
            .fetch_optional(self.pool.get_pool())
            .await?;
        let existing = match row {
            Some(row) => Some(map_chat_message_row(&row)?),
            None => None,
        };

        sqlx::query(DELETE_CHAT_MESSAGE)
            .bind(id)
            .execute(self.pool.get_pool())
            .await?;

        if let Some(message) = existing {
            self.feed
                .publish_chat_message(&message.trip_id, RowEvent::Deleted(message.id))
                .await;
        }

        Ok(())
    }
}
