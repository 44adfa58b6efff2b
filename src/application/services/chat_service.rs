use crate::application::ports::{ChangeFeed, ChatMessageStore};
use crate::application::services::synced_list::{SubscriptionHandle, SyncedList};
use crate::domain::entities::{ChatMessage, NewChatMessage};
use crate::domain::value_objects::{Participant, TripId};
use crate::shared::error::AppError;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Synced list view over one trip's chat. Messages order by send time;
/// delivery to other participants rides the change feed.
pub struct ChatService {
    store: Arc<dyn ChatMessageStore>,
    feed: Arc<dyn ChangeFeed>,
    list: SyncedList<ChatMessage>,
    subscription: RwLock<Option<SubscriptionHandle>>,
}

impl ChatService {
    pub fn new(store: Arc<dyn ChatMessageStore>, feed: Arc<dyn ChangeFeed>) -> Self {
        Self {
            store,
            feed,
            list: SyncedList::new(),
            subscription: RwLock::new(None),
        }
    }

    pub async fn load(&self, trip_id: &TripId) -> Result<Vec<ChatMessage>, AppError> {
        let rows = self.store.list_messages(trip_id).await?;
        self.list.replace_all(rows.clone()).await;
        Ok(rows)
    }

    pub async fn subscribe(&self, trip_id: &TripId) -> Result<(), AppError> {
        let subscription = self.feed.chat_messages(trip_id).await?;
        let handle = SubscriptionHandle::spawn(self.list.clone(), subscription);
        *self.subscription.write().await = Some(handle);
        Ok(())
    }

    pub async fn unsubscribe(&self) {
        *self.subscription.write().await = None;
    }

    /// Whitespace-only bodies are refused silently, matching the
    /// packing-list create rule.
    pub async fn send_message(
        &self,
        trip_id: &TripId,
        sender: &Participant,
        body: &str,
    ) -> Result<(), AppError> {
        let body = body.trim();
        if body.is_empty() {
            return Ok(());
        }

        let new_message = NewChatMessage {
            trip_id: trip_id.as_str().to_string(),
            sender_id: sender.id.clone(),
            sender_name: sender.display_name.clone(),
            body: body.to_string(),
        };
        self.store.insert_message(&new_message).await?;
        Ok(())
    }

    pub async fn delete_message(&self, message_id: &str) -> Result<(), AppError> {
        self.store.delete_message(message_id).await
    }

    pub async fn messages(&self) -> Vec<ChatMessage> {
        self.list.snapshot().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::FeedSubscription;
    use crate::domain::entities::{Expense, ItineraryEntry, PackingItem};
    use async_trait::async_trait;
    use mockall::mock;

    mock! {
        pub Store {}

        #[async_trait]
        impl ChatMessageStore for Store {
            async fn insert_message(&self, new_message: &NewChatMessage) -> Result<ChatMessage, AppError>;
            async fn list_messages(&self, trip_id: &TripId) -> Result<Vec<ChatMessage>, AppError>;
            async fn delete_message(&self, id: &str) -> Result<(), AppError>;
        }
    }

    mock! {
        pub Feed {}

        #[async_trait]
        impl ChangeFeed for Feed {
            async fn packing_items(&self, trip_id: &TripId) -> Result<FeedSubscription<PackingItem>, AppError>;
            async fn itinerary_entries(&self, trip_id: &TripId) -> Result<FeedSubscription<ItineraryEntry>, AppError>;
            async fn expenses(&self, trip_id: &TripId) -> Result<FeedSubscription<Expense>, AppError>;
            async fn chat_messages(&self, trip_id: &TripId) -> Result<FeedSubscription<ChatMessage>, AppError>;
        }
    }

    fn trip() -> TripId {
        TripId::new("trip-1".to_string()).unwrap()
    }

    fn ada() -> Participant {
        Participant::new("p-ada".to_string(), "Ada".to_string()).unwrap()
    }

    #[tokio::test]
    async fn whitespace_body_is_silently_refused() {
        let mut store = MockStore::new();
        store.expect_insert_message().never();

        let svc = ChatService::new(Arc::new(store), Arc::new(MockFeed::new()));
        svc.send_message(&trip(), &ada(), "  \n ").await.unwrap();
    }

    #[tokio::test]
    async fn message_carries_sender_identity() {
        let mut store = MockStore::new();
        store
            .expect_insert_message()
            .withf(|m| m.sender_id == "p-ada" && m.sender_name == "Ada" && m.body == "On my way")
            .times(1)
            .returning(|new_message| Ok(ChatMessage::assign(new_message)));

        let svc = ChatService::new(Arc::new(store), Arc::new(MockFeed::new()));
        svc.send_message(&trip(), &ada(), " On my way ")
            .await
            .unwrap();
        assert!(svc.messages().await.is_empty());
    }
}
