use crate::application::ports::TripStore;
use crate::domain::entities::{NewTrip, Trip};
use crate::domain::value_objects::Participant;
use crate::shared::error::AppError;
use chrono::NaiveDate;
use std::sync::Arc;

/// Dashboard and create-trip screens. Trip listing is load-only; trips
/// carry no change-feed subscription.
pub struct TripService {
    store: Arc<dyn TripStore>,
}

impl TripService {
    pub fn new(store: Arc<dyn TripStore>) -> Self {
        Self { store }
    }

    pub async fn create_trip(
        &self,
        name: &str,
        destination: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
        creator: &Participant,
    ) -> Result<Trip, AppError> {
        let name = name.trim();
        let destination = destination.trim();
        if name.is_empty() {
            return Err(AppError::ValidationError(
                "Trip name is required".to_string(),
            ));
        }
        if destination.is_empty() {
            return Err(AppError::ValidationError(
                "Destination is required".to_string(),
            ));
        }
        if end_date < start_date {
            return Err(AppError::ValidationError(
                "Trip cannot end before it starts".to_string(),
            ));
        }

        let new_trip = NewTrip {
            name: name.to_string(),
            destination: destination.to_string(),
            start_date,
            end_date,
            created_by: creator.id.clone(),
        };
        self.store.create_trip(&new_trip).await
    }

    pub async fn get_trip(&self, id: &str) -> Result<Option<Trip>, AppError> {
        self.store.get_trip(id).await
    }

    pub async fn list_trips(&self) -> Result<Vec<Trip>, AppError> {
        self.store.list_trips().await
    }

    pub async fn delete_trip(&self, id: &str) -> Result<(), AppError> {
        self.store.delete_trip(id).await
    }
}
