use crate::application::ports::{Notifier, Toast};
use crate::application::services::ItineraryService;
use crate::domain::entities::ItineraryEntry;
use crate::domain::value_objects::TripId;
use crate::presentation::dto::{AddItineraryEntryRequest, Validate};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::warn;

/// Itinerary screen for one trip.
pub struct ItineraryHandler {
    service: Arc<ItineraryService>,
    notifier: Arc<dyn Notifier>,
    trip: RwLock<TripId>,
}

impl ItineraryHandler {
    pub fn new(service: Arc<ItineraryService>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            service,
            notifier,
            trip: RwLock::new(TripId::from_route_param(None)),
        }
    }

    pub async fn mount(&self, route_param: Option<&str>) -> Vec<ItineraryEntry> {
        let trip_id = TripId::from_route_param(route_param);
        *self.trip.write().await = trip_id.clone();

        if let Err(err) = self.service.load(&trip_id).await {
            warn!("itinerary load failed: {}", err);
            self.notifier
                .notify(Toast::error("Failed to load itinerary"))
                .await;
        }
        if let Err(err) = self.service.subscribe(&trip_id).await {
            warn!("itinerary subscribe failed: {}", err);
            self.notifier
                .notify(Toast::error("Failed to subscribe to updates"))
                .await;
        }

        self.service.entries().await
    }

    pub async fn unmount(&self) {
        self.service.unsubscribe().await;
    }

    pub async fn add_entry(&self, request: AddItineraryEntryRequest) {
        if let Err(reason) = request.validate() {
            warn!("refusing itinerary entry: {}", reason);
            return;
        }

        let trip_id = self.trip.read().await.clone();
        if let Err(err) = self
            .service
            .add_entry(
                &trip_id,
                &request.title,
                request.day,
                request.start_minute,
                request.location,
                request.notes,
            )
            .await
        {
            warn!("add itinerary entry failed: {}", err);
            self.notifier
                .notify(Toast::error("Failed to add entry"))
                .await;
        }
    }

    pub async fn update_entry(&self, entry: &ItineraryEntry) {
        if let Err(err) = self.service.update_entry(entry).await {
            warn!("update itinerary entry failed: {}", err);
            self.notifier
                .notify(Toast::error("Failed to update entry"))
                .await;
        }
    }

    pub async fn delete_entry(&self, entry_id: &str) {
        if let Err(err) = self.service.delete_entry(entry_id).await {
            warn!("delete itinerary entry failed: {}", err);
            self.notifier
                .notify(Toast::error("Failed to delete entry"))
                .await;
        }
    }

    pub async fn entries(&self) -> Vec<ItineraryEntry> {
        self.service.entries().await
    }
}
