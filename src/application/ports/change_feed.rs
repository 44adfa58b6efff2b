use crate::domain::entities::{ChatMessage, Expense, ItineraryEntry, PackingItem};
use crate::domain::events::RowEvent;
use crate::domain::value_objects::TripId;
use crate::shared::error::AppError;
use async_trait::async_trait;
use tokio::sync::broadcast;
use tracing::warn;

/// One open change-feed channel, scoped to a table and a trip filter.
/// Dropping the subscription releases the channel.
pub struct FeedSubscription<T> {
    receiver: broadcast::Receiver<RowEvent<T>>,
}

impl<T: Clone> FeedSubscription<T> {
    pub fn new(receiver: broadcast::Receiver<RowEvent<T>>) -> Self {
        Self { receiver }
    }

    /// Next event, or `None` once the channel is closed. A lagged
    /// receiver skips ahead; there is no backfill strategy.
    pub async fn recv(&mut self) -> Option<RowEvent<T>> {
        loop {
            match self.receiver.recv().await {
                Ok(event) => return Some(event),
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    warn!("change feed lagged, skipped {} events", skipped);
                }
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }
}

/// Realtime change-feed contract: one logical channel per table,
/// filtered by equality on `trip_id`.
#[async_trait]
pub trait ChangeFeed: Send + Sync {
    async fn packing_items(
        &self,
        trip_id: &TripId,
    ) -> Result<FeedSubscription<PackingItem>, AppError>;

    async fn itinerary_entries(
        &self,
        trip_id: &TripId,
    ) -> Result<FeedSubscription<ItineraryEntry>, AppError>;

    async fn expenses(&self, trip_id: &TripId) -> Result<FeedSubscription<Expense>, AppError>;

    async fn chat_messages(
        &self,
        trip_id: &TripId,
    ) -> Result<FeedSubscription<ChatMessage>, AppError>;
}
