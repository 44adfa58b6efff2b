use crate::application::ports::{Notifier, Toast};
use crate::application::services::{ChatService, SessionService};
use crate::domain::entities::ChatMessage;
use crate::domain::value_objects::TripId;
use crate::presentation::dto::SendMessageRequest;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::warn;

/// Trip chat screen.
pub struct ChatHandler {
    service: Arc<ChatService>,
    session: Arc<SessionService>,
    notifier: Arc<dyn Notifier>,
    trip: RwLock<TripId>,
}

impl ChatHandler {
    pub fn new(
        service: Arc<ChatService>,
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

    pub async fn mount(&self, route_param: Option<&str>) -> Vec<ChatMessage> {
        let trip_id = TripId::from_route_param(route_param);
        *self.trip.write().await = trip_id.clone();

        if let Err(err) = self.service.load(&trip_id).await {
            warn!("chat load failed: {}", err);
            self.notifier
                .notify(Toast::error("Failed to load messages"))
                .await;
        }
        if let Err(err) = self.service.subscribe(&trip_id).await {
            warn!("chat subscribe failed: {}", err);
            self.notifier
                .notify(Toast::error("Failed to subscribe to updates"))
                .await;
        }

        self.service.messages().await
    }

    pub async fn unmount(&self) {
        self.service.unsubscribe().await;
    }

    pub async fn send_message(&self, request: SendMessageRequest) {
        let sender = match self.session.current_participant().await {
            Ok(participant) => participant,
            Err(err) => {
                warn!("resolving participant failed: {}", err);
                self.notifier
                    .notify(Toast::error("Failed to send message"))
                    .await;
                return;
            }
        };

        let trip_id = self.trip.read().await.clone();
        if let Err(err) = self
            .service
            .send_message(&trip_id, &sender, &request.body)
            .await
        {
            warn!("send message failed: {}", err);
            self.notifier
                .notify(Toast::error("Failed to send message"))
                .await;
        }
    }

    pub async fn delete_message(&self, message_id: &str) {
        if let Err(err) = self.service.delete_message(message_id).await {
            warn!("delete message failed: {}", err);
            self.notifier
                .notify(Toast::error("Failed to delete message"))
                .await;
        }
    }

    pub async fn messages(&self) -> Vec<ChatMessage> {
        self.service.messages().await
    }
}
