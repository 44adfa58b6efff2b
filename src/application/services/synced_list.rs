use crate::application::ports::FeedSubscription;
use crate::domain::entities::{ChatMessage, Expense, ItineraryEntry, PackingItem};
use crate::domain::events::RowEvent;
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::debug;

/// A row that can live in a synced list: identified by a server-assigned
/// opaque id.
pub trait SyncedRow: Clone + Send + Sync + 'static {
    fn row_id(&self) -> &str;
}

impl SyncedRow for PackingItem {
    fn row_id(&self) -> &str {
        &self.id
    }
}

impl SyncedRow for ItineraryEntry {
    fn row_id(&self) -> &str {
        &self.id
    }
}

impl SyncedRow for Expense {
    fn row_id(&self) -> &str {
        &self.id
    }
}

impl SyncedRow for ChatMessage {
    fn row_id(&self) -> &str {
        &self.id
    }
}

/// Local in-memory mirror of one server-side table slice. Not
/// authoritative: the store is the source of truth and this list is
/// reconciled opportunistically from load results and feed events.
///
/// Writers are the initial load's completion and the single pump task
/// draining one subscription, so rows are only ever mutated
/// sequentially.
pub struct SyncedList<T: SyncedRow> {
    rows: Arc<RwLock<Vec<T>>>,
}

impl<T: SyncedRow> Clone for SyncedList<T> {
    fn clone(&self) -> Self {
        Self {
            rows: Arc::clone(&self.rows),
        }
    }
}

impl<T: SyncedRow> Default for SyncedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: SyncedRow> SyncedList<T> {
    pub fn new() -> Self {
        Self {
            rows: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Wholesale replacement from a load result.
    pub async fn replace_all(&self, rows: Vec<T>) {
        *self.rows.write().await = rows;
    }

    /// Apply one change-feed event.
    ///
    /// Inserts are upserts by id, so a replayed insert never duplicates
    /// a row. Updates for unknown ids are dropped; there is no
    /// late-insert recovery. Deletes for unknown ids are no-ops.
    pub async fn apply(&self, event: RowEvent<T>) {
        let mut rows = self.rows.write().await;
        match event {
            RowEvent::Inserted(row) => {
                match rows.iter_mut().find(|r| r.row_id() == row.row_id()) {
                    Some(existing) => *existing = row,
                    None => rows.push(row),
                }
            }
            RowEvent::Updated(row) => {
                match rows.iter_mut().find(|r| r.row_id() == row.row_id()) {
                    Some(existing) => *existing = row,
                    None => debug!("dropping update for unknown row {}", row.row_id()),
                }
            }
            RowEvent::Deleted(id) => {
                rows.retain(|r| r.row_id() != id);
            }
        }
    }

    pub async fn snapshot(&self) -> Vec<T> {
        self.rows.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }
}

/// Scoped ownership of one live subscription: a pump task applies feed
/// events to the list until the handle is dropped. Dropping aborts the
/// task and releases the feed channel, so teardown happens on every
/// exit path.
pub struct SubscriptionHandle {
    task: JoinHandle<()>,
}

impl SubscriptionHandle {
    pub fn spawn<T: SyncedRow>(list: SyncedList<T>, mut subscription: FeedSubscription<T>) -> Self {
        let task = tokio::spawn(async move {
            while let Some(event) = subscription.recv().await {
                list.apply(event).await;
            }
        });
        Self { task }
    }
}

impl Drop for SubscriptionHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::NewPackingItem;
    use std::time::Duration;
    use tokio::sync::broadcast;

    fn item(id: &str, name: &str) -> PackingItem {
        let mut item = PackingItem::assign(&NewPackingItem {
            trip_id: "trip-1".to_string(),
            item_name: name.to_string(),
            category: "Clothing".to_string(),
        });
        item.id = id.to_string();
        item
    }

    async fn names(list: &SyncedList<PackingItem>) -> Vec<String> {
        list.snapshot()
            .await
            .into_iter()
            .map(|i| i.item_name)
            .collect()
    }

    #[tokio::test]
    async fn insert_appends_new_rows() {
        let list = SyncedList::new();
        list.apply(RowEvent::Inserted(item("a", "Socks"))).await;
        list.apply(RowEvent::Inserted(item("b", "Charger"))).await;
        assert_eq!(names(&list).await, vec!["Socks", "Charger"]);
    }

    #[tokio::test]
    async fn replayed_insert_does_not_duplicate() {
        let list = SyncedList::new();
        list.apply(RowEvent::Inserted(item("a", "Socks"))).await;
        list.apply(RowEvent::Inserted(item("a", "Socks"))).await;
        assert_eq!(list.len().await, 1);
    }

    #[tokio::test]
    async fn update_is_idempotent() {
        let list = SyncedList::new();
        list.apply(RowEvent::Inserted(item("a", "Socks"))).await;

        let mut updated = item("a", "Socks");
        updated.is_packed = true;

        list.apply(RowEvent::Updated(updated.clone())).await;
        let once = list.snapshot().await;
        list.apply(RowEvent::Updated(updated)).await;
        let twice = list.snapshot().await;

        assert_eq!(once, twice);
        assert_eq!(list.len().await, 1);
        assert!(twice[0].is_packed);
    }

    #[tokio::test]
    async fn update_for_unknown_row_is_dropped() {
        let list = SyncedList::new();
        list.apply(RowEvent::Inserted(item("a", "Socks"))).await;
        list.apply(RowEvent::Updated(item("ghost", "Phantom"))).await;
        assert_eq!(names(&list).await, vec!["Socks"]);
    }

    #[tokio::test]
    async fn delete_for_absent_row_is_noop() {
        let list = SyncedList::new();
        list.apply(RowEvent::Inserted(item("a", "Socks"))).await;
        let before = list.snapshot().await;
        list.apply(RowEvent::Deleted("ghost".to_string())).await;
        assert_eq!(list.snapshot().await, before);
    }

    #[tokio::test]
    async fn delete_removes_matching_row() {
        let list = SyncedList::new();
        list.apply(RowEvent::Inserted(item("a", "Socks"))).await;
        list.apply(RowEvent::Inserted(item("b", "Charger"))).await;
        list.apply(RowEvent::Deleted("a".to_string())).await;
        assert_eq!(names(&list).await, vec!["Charger"]);
    }

    async fn wait_for_len(list: &SyncedList<PackingItem>, expected: usize) {
        for _ in 0..100 {
            if list.len().await == expected {
                return;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        panic!("list never reached {} rows", expected);
    }

    #[tokio::test]
    async fn pump_applies_events_until_handle_drops() {
        let list: SyncedList<PackingItem> = SyncedList::new();
        let (tx, rx) = broadcast::channel(16);
        let handle = SubscriptionHandle::spawn(list.clone(), FeedSubscription::new(rx));

        tx.send(RowEvent::Inserted(item("a", "Socks"))).unwrap();
        wait_for_len(&list, 1).await;

        drop(handle);
        // Give the aborted task time to die, then prove no delivery.
        tokio::time::sleep(Duration::from_millis(20)).await;
        let _ = tx.send(RowEvent::Inserted(item("b", "Charger")));
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert_eq!(list.len().await, 1);
    }
}
