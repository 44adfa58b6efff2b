use super::mapper::map_trip_row;
use super::queries::{DELETE_TRIP, INSERT_TRIP, SELECT_ALL_TRIPS, SELECT_TRIP_BY_ID};
use super::SqliteStore;
use crate::application::ports::TripStore;
use crate::domain::entities::{NewTrip, Trip};
use crate::shared::error::AppError;
use async_trait::async_trait;

#[async_trait]
impl TripStore for SqliteStore {
    async fn create_trip(&self, new_trip: &NewTrip) -> Result<Trip, AppError> {
        let trip = Trip::assign(new_trip);

        sqlx::query(INSERT_TRIP)
            .bind(&trip.id)
            .bind(&trip.name)
            .bind(&trip.destination)
            .bind(trip.start_date.to_string())
            .bind(trip.end_date.to_string())
            .bind(&trip.created_by)
            .bind(trip.created_at.timestamp_millis())
            .bind(trip.updated_at.timestamp_millis())
            .execute(self.pool.get_pool())
            .await?;

        Ok(trip)
    }

    async fn get_trip(&self, id: &str) -> Result<Option<Trip>, AppError> {
        let row = sqlx::query(SELECT_TRIP_BY_ID)
            .bind(id)
            .fetch_optional(self.pool.get_pool())
            .await?;

        match row {
            Some(row) => Ok(Some(map_trip_row(&row)?)),
            None => Ok(None),
        }
    }

    async fn list_trips(&self) -> Result<Vec<Trip>, AppError> {
        let rows = sqlx::query(SELECT_ALL_TRIPS)
            .fetch_all(self.pool.get_pool())
            .await?;

        let mut trips = Vec::with_capacity(rows.len());
        for row in rows {
            trips.push(map_trip_row(&row)?);
        }

        Ok(trips)
    }

    async fn delete_trip(&self, id: &str) -> Result<(), AppError> {
        sqlx::query(DELETE_TRIP)
            .bind(id)
            .execute(self.pool.get_pool())
            .await?;

        Ok(())
    }
}
