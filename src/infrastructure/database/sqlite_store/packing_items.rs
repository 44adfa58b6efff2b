use super::mapper::map_packing_item_row;
use super::queries::{
    DELETE_PACKING_ITEM, INSERT_PACKING_ITEM, SELECT_PACKING_ITEMS_BY_TRIP,
    SELECT_PACKING_ITEM_BY_ID, UPDATE_PACKING_ITEM_CLAIM, UPDATE_PACKING_ITEM_PACKED,
};
use super::SqliteStore;
use crate::application::ports::PackingItemStore;
use crate::domain::entities::{NewPackingItem, PackingItem};
use crate::domain::events::RowEvent;
use crate::domain::value_objects::{Participant, TripId};
use crate::shared::error::AppError;
use async_trait::async_trait;
use chrono::Utc;

impl SqliteStore {
    async fn fetch_packing_item(&self, id: &str) -> Result<Option<PackingItem>, AppError> {
        let row = sqlx::query(SELECT_PACKING_ITEM_BY_ID)
            .bind(id)
            .fetch_optional(self.pool.get_pool())
            .await?;

        match row {
            Some(row) => Ok(Some(map_packing_item_row(&row)?)),
            None => Ok(None),
        }
    }

    /// Re-read the row after an update and echo the new version on the
    /// feed. A row deleted concurrently produces no event.
    async fn echo_packing_item_update(&self, id: &str) -> Result<(), AppError> {
        if let Some(item) = self.fetch_packing_item(id).await? {
            let trip_id = item.trip_id.clone();
            self.feed
                .publish_packing_item(&trip_id, RowEvent::Updated(item))
                .await;
        }
        Ok(())
    }
}

#[async_trait]
impl PackingItemStore for SqliteStore {
    async fn insert_item(&self, new_item: &NewPackingItem) -> Result<PackingItem, AppError> {
        let item = PackingItem::assign(new_item);

        sqlx::query(INSERT_PACKING_ITEM)
            .bind(&item.id)
            .bind(&item.trip_id)
            .bind(&item.item_name)
            .bind(&item.category)
            .bind(item.is_packed as i64)
            .bind(&item.claimed_by)
            .bind(&item.claimed_by_name)
            .bind(item.created_at.timestamp_millis())
            .bind(item.updated_at.timestamp_millis())
            .execute(self.pool.get_pool())
            .await?;

        self.feed
            .publish_packing_item(&item.trip_id, RowEvent::Inserted(item.clone()))
            .await;

        Ok(item)
    }

    async fn list_items(&self, trip_id: &TripId) -> Result<Vec<PackingItem>, AppError> {
        let rows = sqlx::query(SELECT_PACKING_ITEMS_BY_TRIP)
            .bind(trip_id.as_str())
            .fetch_all(self.pool.get_pool())
            .await?;

        let mut items = Vec::with_capacity(rows.len());
        for row in rows {
            items.push(map_packing_item_row(&row)?);
        }

        Ok(items)
    }

    async fn set_packed(&self, id: &str, is_packed: bool) -> Result<(), AppError> {
        sqlx::query(UPDATE_PACKING_ITEM_PACKED)
            .bind(is_packed as i64)
            .bind(Utc::now().timestamp_millis())
            .bind(id)
            .execute(self.pool.get_pool())
            .await?;

        self.echo_packing_item_update(id).await
    }

    async fn set_claim(&self, id: &str, claimant: Option<Participant>) -> Result<(), AppError> {
        let (claimed_by, claimed_by_name) = match claimant {
            Some(participant) => (Some(participant.id), Some(participant.display_name)),
            None => (None, None),
        };

        sqlx::query(UPDATE_PACKING_ITEM_CLAIM)
            .bind(claimed_by)
            .bind(claimed_by_name)
            .bind(Utc::now().timestamp_millis())
            .bind(id)
            .execute(self.pool.get_pool())
            .await?;

        self.echo_packing_item_update(id).await
    }

    async fn delete_item(&self, id: &str) -> Result<(), AppError> {
        let existing = self.fetch_packing_item(id).await?;

        sqlx::query(DELETE_PACKING_ITEM)
            .bind(id)
            .execute(self.pool.get_pool())
            .await?;

        if let Some(item) = existing {
            self.feed
                .publish_packing_item(&item.trip_id, RowEvent::Deleted(item.id))
                .await;
        }

        Ok(())
    }
}
