use crate::application::ports::{Notifier, Toast};
use crate::application::services::{PackingListService, SessionService};
use crate::domain::entities::PackingItem;
use crate::domain::value_objects::TripId;
use crate::presentation::dto::{AddPackingItemRequest, Validate};
use crate::presentation::views::{packing_list_view, PackingListView};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::warn;

/// Packing-list screen glue. Every failure is absorbed here and turned
/// into a transient toast; the view stays interactive and keeps its
/// current (possibly stale) contents.
pub struct PackingListHandler {
    service: Arc<PackingListService>,
    session: Arc<SessionService>,
    notifier: Arc<dyn Notifier>,
    trip: RwLock<TripId>,
}

impl PackingListHandler {
    pub fn new(
        service: Arc<PackingListService>,
        session: Arc<SessionService>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            service,
            session,
            notifier,
            trip: RwLock::new(TripId::from_route_param(None)),
        }
    }

    /// Screen entry: resolve the trip from the route, load, subscribe.
    pub async fn mount(&self, route_param: Option<&str>) -> PackingListView {
        let trip_id = TripId::from_route_param(route_param);
        *self.trip.write().await = trip_id.clone();

        if let Err(err) = self.service.load(&trip_id).await {
            warn!("packing list load failed: {}", err);
            self.notifier
                .notify(Toast::error("Failed to load packing list"))
                .await;
        }
        if let Err(err) = self.service.subscribe(&trip_id).await {
            warn!("packing list subscribe failed: {}", err);
            self.notifier
                .notify(Toast::error("Failed to subscribe to updates"))
                .await;
        }

        self.view().await
    }

    /// Screen exit: release the change-feed subscription.
    pub async fn unmount(&self) {
        self.service.unsubscribe().await;
    }

    pub async fn add_item(&self, request: AddPackingItemRequest) {
        if let Err(reason) = request.validate() {
            // Invalid form input is refused without a user-facing error.
            warn!("refusing packing item: {}", reason);
            return;
        }

        let trip_id = self.trip.read().await.clone();
        if let Err(err) = self
            .service
            .add_item(&trip_id, &request.name, &request.category)
            .await
        {
            warn!("add packing item failed: {}", err);
            self.notifier.notify(Toast::error("Failed to add item")).await;
        }
    }

    pub async fn toggle_packed(&self, item: &PackingItem) {
        if let Err(err) = self.service.toggle_packed(item).await {
            warn!("toggle packed failed: {}", err);
            self.notifier
                .notify(Toast::error("Failed to update item"))
                .await;
        }
    }

    pub async fn toggle_claim(&self, item: &PackingItem) {
        let participant = match self.session.current_participant().await {
            Ok(participant) => participant,
            Err(err) => {
                warn!("resolving participant failed: {}", err);
                self.notifier
                    .notify(Toast::error("Failed to claim item"))
                    .await;
                return;
            }
        };

        if let Err(err) = self.service.toggle_claim(item, &participant).await {
            warn!("toggle claim failed: {}", err);
            self.notifier
                .notify(Toast::error("Failed to claim item"))
                .await;
        }
    }

    pub async fn delete_item(&self, item_id: &str) {
        if let Err(err) = self.service.delete_item(item_id).await {
            warn!("delete packing item failed: {}", err);
            self.notifier
                .notify(Toast::error("Failed to delete item"))
                .await;
        }
    }

    pub async fn view(&self) -> PackingListView {
        packing_list_view(&self.service.items().await)
    }
}
