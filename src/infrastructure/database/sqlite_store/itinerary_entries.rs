use super::mapper::map_itinerary_entry_row;
use super::queries::{
    DELETE_ITINERARY_ENTRY, INSERT_ITINERARY_ENTRY, SELECT_ITINERARY_ENTRIES_BY_TRIP,
    SELECT_ITINERARY_ENTRY_BY_ID, UPDATE_ITINERARY_ENTRY,
};
use super::SqliteStore;
use crate::application::ports::ItineraryStore;
use crate::domain::entities::{ItineraryEntry, NewItineraryEntry};
use crate::domain::events::RowEvent;
use crate::domain::value_objects::TripId;
use crate::shared::error::AppError;
use async_trait::async_trait;
use chrono::Utc;

impl SqliteStore {
    async fn fetch_itinerary_entry(&self, id: &str) -> Result<Option<ItineraryEntry>, AppError> {
        let row = sqlx::query(SELECT_ITINERARY_ENTRY_BY_ID)
            .bind(id)
            .fetch_optional(self.pool.get_pool())
            .await?;

        match row {
            Some(row) => Ok(Some(map_itinerary_entry_row(&row)?)),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl ItineraryStore for SqliteStore {
    async fn insert_entry(
        &self,
        new_entry: &NewItineraryEntry,
    ) -> Result<ItineraryEntry, AppError> {
        let entry = ItineraryEntry::assign(new_entry);

        sqlx::query(INSERT_ITINERARY_ENTRY)
            .bind(&entry.id)
            .bind(&entry.trip_id)
            .bind(&entry.title)
            .bind(entry.day.to_string())
            .bind(entry.start_minute as i64)
            .bind(&entry.location)
            .bind(&entry.notes)
            .bind(entry.created_at.timestamp_millis())
            .bind(entry.updated_at.timestamp_millis())
            .execute(self.pool.get_pool())
            .await?;

        self.feed
            .publish_itinerary_entry(&entry.trip_id, RowEvent::Inserted(entry.clone()))
            .await;

        Ok(entry)
    }

    async fn list_entries(&self, trip_id: &TripId) -> Result<Vec<ItineraryEntry>, AppError> {
        let rows = sqlx::query(SELECT_ITINERARY_ENTRIES_BY_TRIP)
            .bind(trip_id.as_str())
            .fetch_all(self.pool.get_pool())
            .await?;

        let mut entries = Vec::with_capacity(rows.len());
        for row in rows {
            entries.push(map_itinerary_entry_row(&row)?);
        }

        Ok(entries)
    }

    async fn update_entry(&self, entry: &ItineraryEntry) -> Result<(), AppError> {
        sqlx::query(UPDATE_ITINERARY_ENTRY)
            .bind(&entry.title)
            .bind(entry.day.to_string())
            .bind(entry.start_minute as i64)
            .bind(&entry.location)
            .bind(&entry.notes)
            .bind(Utc::now().timestamp_millis())
            .bind(&entry.id)
            .execute(self.pool.get_pool())
            .await?;

        if let Some(updated) = self.fetch_itinerary_entry(&entry.id).await? {
            let trip_id = updated.trip_id.clone();
            self.feed
                .publish_itinerary_entry(&trip_id, RowEvent::Updated(updated))
                .await;
        }

        Ok(())
    }

    async fn delete_entry(&self, id: &str) -> Result<(), AppError> {
        let existing = self.fetch_itinerary_entry(id).await?;

        sqlx::query(DELETE_ITINERARY_ENTRY)
            .bind(id)
            .execute(self.pool.get_pool())
            .await?;

        if let Some(entry) = existing {
            self.feed
                .publish_itinerary_entry(&entry.trip_id, RowEvent::Deleted(entry.id))
                .await;
        }

        Ok(())
    }
}
