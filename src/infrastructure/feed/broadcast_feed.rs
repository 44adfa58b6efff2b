use crate::application::ports::{ChangeFeed, FeedSubscription};
use crate::domain::entities::{ChatMessage, Expense, ItineraryEntry, PackingItem};
use crate::domain::events::RowEvent;
use crate::domain::value_objects::TripId;
use crate::shared::error::AppError;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::{broadcast, RwLock};

/// Per-trip broadcast channels for one table. Channels are created
/// lazily on first subscription; publishing to a trip nobody watches
/// drops the event, as a realtime transport would.
struct ChannelHub<T: Clone + Send + 'static> {
    capacity: usize,
    senders: RwLock<HashMap<String, broadcast::Sender<RowEvent<T>>>>,
}

impl<T: Clone + Send + 'static> ChannelHub<T> {
    fn new(capacity: usize) -> Self {
        Self {
            capacity,
            senders: RwLock::new(HashMap::new()),
        }
    }

    async fn subscribe(&self, trip_id: &str) -> broadcast::Receiver<RowEvent<T>> {
        if let Some(sender) = self.senders.read().await.get(trip_id) {
            return sender.subscribe();
        }

        let mut senders = self.senders.write().await;
        senders
            .entry(trip_id.to_string())
            .or_insert_with(|| broadcast::channel(self.capacity).0)
            .subscribe()
    }

    async fn publish(&self, trip_id: &str, event: RowEvent<T>) {
        if let Some(sender) = self.senders.read().await.get(trip_id) {
            // A send error just means no live receivers remain.
            let _ = sender.send(event);
        }
    }
}

/// In-process implementation of the change-feed contract: one logical
/// channel per (table, trip). The store adapter publishes here after
/// each committed mutation.
pub struct BroadcastChangeFeed {
    packing_items: ChannelHub<PackingItem>,
    itinerary_entries: ChannelHub<ItineraryEntry>,
    expenses: ChannelHub<Expense>,
    chat_messages: ChannelHub<ChatMessage>,
}

impl BroadcastChangeFeed {
    pub fn new(channel_capacity: usize) -> Self {
        Self {
            packing_items: ChannelHub::new(channel_capacity),
            itinerary_entries: ChannelHub::new(channel_capacity),
            expenses: ChannelHub::new(channel_capacity),
            chat_messages: ChannelHub::new(channel_capacity),
        }
    }

    pub async fn publish_packing_item(&self, trip_id: &str, event: RowEvent<PackingItem>) {
        self.packing_items.publish(trip_id, event).await;
    }

    pub async fn publish_itinerary_entry(&self, trip_id: &str, event: RowEvent<ItineraryEntry>) {
        self.itinerary_entries.publish(trip_id, event).await;
    }

    pub async fn publish_expense(&self, trip_id: &str, event: RowEvent<Expense>) {
        self.expenses.publish(trip_id, event).await;
    }

    pub async fn publish_chat_message(&self, trip_id: &str, event: RowEvent<ChatMessage>) {
        self.chat_messages.publish(trip_id, event).await;
    }
}

#[async_trait]
impl ChangeFeed for BroadcastChangeFeed {
    async fn packing_items(
        &self,
        trip_id: &TripId,
    ) -> Result<FeedSubscription<PackingItem>, AppError> {
        let receiver = self.packing_items.subscribe(trip_id.as_str()).await;
        Ok(FeedSubscription::new(receiver))
    }

    async fn itinerary_entries(
        &self,
        trip_id: &TripId,
    ) -> Result<FeedSubscription<ItineraryEntry>, AppError> {
        let receiver = self.itinerary_entries.subscribe(trip_id.as_str()).await;
        Ok(FeedSubscription::new(receiver))
    }

    async fn expenses(&self, trip_id: &TripId) -> Result<FeedSubscription<Expense>, AppError> {
        let receiver = self.expenses.subscribe(trip_id.as_str()).await;
        Ok(FeedSubscription::new(receiver))
    }

    async fn chat_messages(
        &self,
        trip_id: &TripId,
    ) -> Result<FeedSubscription<ChatMessage>, AppError> {
        let receiver = self.chat_messages.subscribe(trip_id.as_str()).await;
        Ok(FeedSubscription::new(receiver))
    }
}
