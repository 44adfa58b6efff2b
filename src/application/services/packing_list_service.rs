use crate::application::ports::{ChangeFeed, PackingItemStore};
use crate::application::services::synced_list::{SubscriptionHandle, SyncedList};
use crate::domain::entities::{NewPackingItem, PackingItem};
use crate::domain::value_objects::{Participant, TripId};
use crate::shared::error::AppError;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Synced list view over the packing-list table of one trip: initial
/// load, live feed application, and direct mutations. Mutations never
/// touch the local mirror; their effect arrives through the feed.
pub struct PackingListService {
    store: Arc<dyn PackingItemStore>,
    feed: Arc<dyn ChangeFeed>,
    list: SyncedList<PackingItem>,
    subscription: RwLock<Option<SubscriptionHandle>>,
}

impl PackingListService {
    pub fn new(store: Arc<dyn PackingItemStore>, feed: Arc<dyn ChangeFeed>) -> Self {
        Self {
            store,
            feed,
            list: SyncedList::new(),
            subscription: RwLock::new(None),
        }
    }

    /// Fetch all rows for the trip and replace the local mirror
    /// wholesale. On failure the mirror keeps its previous, possibly
    /// stale, contents.
    pub async fn load(&self, trip_id: &TripId) -> Result<Vec<PackingItem>, AppError> {
        let rows = self.store.list_items(trip_id).await?;
        self.list.replace_all(rows.clone()).await;
        Ok(rows)
    }

    /// Open the change feed for the trip and start applying events.
    /// Replaces any previous subscription; the old pump stops when its
    /// handle drops.
    pub async fn subscribe(&self, trip_id: &TripId) -> Result<(), AppError> {
        let subscription = self.feed.packing_items(trip_id).await?;
        let handle = SubscriptionHandle::spawn(self.list.clone(), subscription);
        *self.subscription.write().await = Some(handle);
        Ok(())
    }

    pub async fn unsubscribe(&self) {
        *self.subscription.write().await = None;
    }

    /// Whitespace-only names are refused silently: no store call, no
    /// error, no local change.
    pub async fn add_item(
        &self,
        trip_id: &TripId,
        name: &str,
        category: &str,
    ) -> Result<(), AppError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Ok(());
        }

        let new_item = NewPackingItem {
            trip_id: trip_id.as_str().to_string(),
            item_name: trimmed.to_string(),
            category: category.to_string(),
        };
        // The created row is deliberately not applied locally; the
        // user-visible update rides the change feed.
        self.store.insert_item(&new_item).await?;
        Ok(())
    }

    pub async fn toggle_packed(&self, item: &PackingItem) -> Result<(), AppError> {
        self.store.set_packed(&item.id, !item.is_packed).await
    }

    /// Claim an unclaimed item for the acting participant, or release
    /// an existing claim.
    pub async fn toggle_claim(
        &self,
        item: &PackingItem,
        participant: &Participant,
    ) -> Result<(), AppError> {
        if item.is_claimed() {
            self.store.set_claim(&item.id, None).await
        } else {
            self.store
                .set_claim(&item.id, Some(participant.clone()))
                .await
        }
    }

    pub async fn delete_item(&self, item_id: &str) -> Result<(), AppError> {
        self.store.delete_item(item_id).await
    }

    pub async fn items(&self) -> Vec<PackingItem> {
        self.list.snapshot().await
    }
}
