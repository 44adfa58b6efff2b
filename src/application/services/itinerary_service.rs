use crate::application::ports::{ChangeFeed, ItineraryStore};
use crate::application::services::synced_list::{SubscriptionHandle, SyncedList};
use crate::domain::entities::{ItineraryEntry, NewItineraryEntry};
use crate::domain::value_objects::TripId;
use crate::shared::error::AppError;
use chrono::NaiveDate;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Synced list view over one trip's itinerary.
pub struct ItineraryService {
    store: Arc<dyn ItineraryStore>,
    feed: Arc<dyn ChangeFeed>,
    list: SyncedList<ItineraryEntry>,
    subscription: RwLock<Option<SubscriptionHandle>>,
}

impl ItineraryService {
    pub fn new(store: Arc<dyn ItineraryStore>, feed: Arc<dyn ChangeFeed>) -> Self {
        Self {
            store,
            feed,
            list: SyncedList::new(),
            subscription: RwLock::new(None),
        }
    }

    pub async fn load(&self, trip_id: &TripId) -> Result<Vec<ItineraryEntry>, AppError> {
        let rows = self.store.list_entries(trip_id).await?;
        self.list.replace_all(rows.clone()).await;
        Ok(rows)
    }

    pub async fn subscribe(&self, trip_id: &TripId) -> Result<(), AppError> {
        let subscription = self.feed.itinerary_entries(trip_id).await?;
        let handle = SubscriptionHandle::spawn(self.list.clone(), subscription);
        *self.subscription.write().await = Some(handle);
        Ok(())
    }

    pub async fn unsubscribe(&self) {
        *self.subscription.write().await = None;
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn add_entry(
        &self,
        trip_id: &TripId,
        title: &str,
        day: NaiveDate,
        start_minute: u16,
        location: Option<String>,
        notes: Option<String>,
    ) -> Result<(), AppError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(AppError::ValidationError(
                "Entry title is required".to_string(),
            ));
        }
        if start_minute >= 24 * 60 {
            return Err(AppError::ValidationError(
                "Start time must fall within the day".to_string(),
            ));
        }

        let new_entry = NewItineraryEntry {
            trip_id: trip_id.as_str().to_string(),
            title: title.to_string(),
            day,
            start_minute,
            location,
            notes,
        };
        self.store.insert_entry(&new_entry).await?;
        Ok(())
    }

    pub async fn update_entry(&self, entry: &ItineraryEntry) -> Result<(), AppError> {
        self.store.update_entry(entry).await
    }

    pub async fn delete_entry(&self, entry_id: &str) -> Result<(), AppError> {
        self.store.delete_entry(entry_id).await
    }

    pub async fn entries(&self) -> Vec<ItineraryEntry> {
        self.list.snapshot().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::FeedSubscription;
    use crate::domain::entities::{ChatMessage, Expense, PackingItem};
    use async_trait::async_trait;
    use mockall::mock;

    mock! {
        pub Store {}

        #[async_trait]
        impl ItineraryStore for Store {
            async fn insert_entry(&self, new_entry: &NewItineraryEntry) -> Result<ItineraryEntry, AppError>;
            async fn list_entries(&self, trip_id: &TripId) -> Result<Vec<ItineraryEntry>, AppError>;
            async fn update_entry(&self, entry: &ItineraryEntry) -> Result<(), AppError>;
            async fn delete_entry(&self, id: &str) -> Result<(), AppError>;
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

    #[tokio::test]
    async fn blank_title_is_rejected() {
        let mut store = MockStore::new();
        store.expect_insert_entry().never();

        let svc = ItineraryService::new(Arc::new(store), Arc::new(MockFeed::new()));
        let result = svc
            .add_entry(&trip(), " ", "2026-09-02".parse().unwrap(), 540, None, None)
            .await;
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[tokio::test]
    async fn out_of_range_start_minute_is_rejected() {
        let mut store = MockStore::new();
        store.expect_insert_entry().never();

        let svc = ItineraryService::new(Arc::new(store), Arc::new(MockFeed::new()));
        let result = svc
            .add_entry(
                &trip(),
                "Museum",
                "2026-09-02".parse().unwrap(),
                1440,
                None,
                None,
            )
            .await;
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[tokio::test]
    async fn valid_entry_reaches_the_store() {
        let mut store = MockStore::new();
        store
            .expect_insert_entry()
            .withf(|e| e.title == "Museum" && e.start_minute == 540)
            .times(1)
            .returning(|new_entry| Ok(ItineraryEntry::assign(new_entry)));

        let svc = ItineraryService::new(Arc::new(store), Arc::new(MockFeed::new()));
        svc.add_entry(
            &trip(),
            " Museum ",
            "2026-09-02".parse().unwrap(),
            540,
            Some("Alfama".to_string()),
            None,
        )
        .await
        .unwrap();
        assert!(svc.entries().await.is_empty());
    }
}
