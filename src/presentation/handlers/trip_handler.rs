use crate::application::ports::{Notifier, Toast};
use crate::application::services::{SessionService, TripService};
use crate::domain::entities::Trip;
use crate::presentation::dto::{CreateTripRequest, Validate};
use std::sync::Arc;
use tracing::warn;

/// Dashboard and create-trip screens.
pub struct TripHandler {
    service: Arc<TripService>,
    session: Arc<SessionService>,
    notifier: Arc<dyn Notifier>,
}

impl TripHandler {
    pub fn new(
        service: Arc<TripService>,
        session: Arc<SessionService>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            service,
            session,
            notifier,
        }
    }

    pub async fn list_trips(&self) -> Vec<Trip> {
        match self.service.list_trips().await {
            Ok(trips) => trips,
            Err(err) => {
                warn!("trip list failed: {}", err);
                self.notifier
                    .notify(Toast::error("Failed to load trips"))
                    .await;
                Vec::new()
            }
        }
    }

    pub async fn create_trip(&self, request: CreateTripRequest) -> Option<Trip> {
        if let Err(reason) = request.validate() {
            warn!("refusing trip: {}", reason);
            return None;
        }

        let creator = match self.session.current_participant().await {
            Ok(participant) => participant,
            Err(err) => {
                warn!("resolving participant failed: {}", err);
                self.notifier
                    .notify(Toast::error("Failed to create trip"))
                    .await;
                return None;
            }
        };

        match self
            .service
            .create_trip(
                &request.name,
                &request.destination,
                request.start_date,
                request.end_date,
                &creator,
            )
            .await
        {
            Ok(trip) => Some(trip),
            Err(err) => {
                warn!("create trip failed: {}", err);
                self.notifier
                    .notify(Toast::error("Failed to create trip"))
                    .await;
                None
            }
        }
    }

    pub async fn delete_trip(&self, trip_id: &str) {
        if let Err(err) = self.service.delete_trip(trip_id).await {
            warn!("delete trip failed: {}", err);
            self.notifier
                .notify(Toast::error("Failed to delete trip"))
                .await;
        }
    }
}
