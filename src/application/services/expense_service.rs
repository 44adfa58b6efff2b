use crate::application::ports::{ChangeFeed, ExpenseStore};
use crate::application::services::synced_list::{SubscriptionHandle, SyncedList};
use crate::domain::entities::{Expense, NewExpense};
use crate::domain::value_objects::{Participant, TripId};
use crate::shared::error::AppError;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Synced list view over one trip's expenses. Settle-up math lives in
/// the presentation layer as a pure function of the snapshot.
pub struct ExpenseService {
    store: Arc<dyn ExpenseStore>,
    feed: Arc<dyn ChangeFeed>,
    list: SyncedList<Expense>,
    subscription: RwLock<Option<SubscriptionHandle>>,
}

impl ExpenseService {
    pub fn new(store: Arc<dyn ExpenseStore>, feed: Arc<dyn ChangeFeed>) -> Self {
        Self {
            store,
            feed,
            list: SyncedList::new(),
            subscription: RwLock::new(None),
        }
    }

    pub async fn load(&self, trip_id: &TripId) -> Result<Vec<Expense>, AppError> {
        let rows = self.store.list_expenses(trip_id).await?;
        self.list.replace_all(rows.clone()).await;
        Ok(rows)
    }

    pub async fn subscribe(&self, trip_id: &TripId) -> Result<(), AppError> {
        let subscription = self.feed.expenses(trip_id).await?;
        let handle = SubscriptionHandle::spawn(self.list.clone(), subscription);
        *self.subscription.write().await = Some(handle);
        Ok(())
    }

    pub async fn unsubscribe(&self) {
        *self.subscription.write().await = None;
    }

    pub async fn add_expense(
        &self,
        trip_id: &TripId,
        description: &str,
        amount_minor: i64,
        paid_by: &Participant,
        split_between: Vec<String>,
    ) -> Result<(), AppError> {
        let description = description.trim();
        if description.is_empty() {
            return Err(AppError::ValidationError(
                "Expense description is required".to_string(),
            ));
        }
        if amount_minor <= 0 {
            return Err(AppError::ValidationError(
                "Amount must be greater than zero".to_string(),
            ));
        }
        if split_between.is_empty() {
            return Err(AppError::ValidationError(
                "Expense must be split with at least one participant".to_string(),
            ));
        }

        let new_expense = NewExpense {
            trip_id: trip_id.as_str().to_string(),
            description: description.to_string(),
            amount_minor,
            paid_by: paid_by.id.clone(),
            paid_by_name: paid_by.display_name.clone(),
            split_between,
        };
        self.store.insert_expense(&new_expense).await?;
        Ok(())
    }

    pub async fn delete_expense(&self, expense_id: &str) -> Result<(), AppError> {
        self.store.delete_expense(expense_id).await
    }

    pub async fn expenses(&self) -> Vec<Expense> {
        self.list.snapshot().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::FeedSubscription;
    use crate::domain::entities::{ChatMessage, ItineraryEntry, PackingItem};
    use async_trait::async_trait;
    use mockall::mock;

    mock! {
        pub Store {}

        #[async_trait]
        impl ExpenseStore for Store {
            async fn insert_expense(&self, new_expense: &NewExpense) -> Result<Expense, AppError>;
            async fn list_expenses(&self, trip_id: &TripId) -> Result<Vec<Expense>, AppError>;
            async fn delete_expense(&self, id: &str) -> Result<(), AppError>;
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
    async fn zero_amount_is_rejected() {
        let mut store = MockStore::new();
        store.expect_insert_expense().never();

        let svc = ExpenseService::new(Arc::new(store), Arc::new(MockFeed::new()));
        let result = svc
            .add_expense(&trip(), "Dinner", 0, &ada(), vec!["p-ada".to_string()])
            .await;
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[tokio::test]
    async fn empty_split_is_rejected() {
        let mut store = MockStore::new();
        store.expect_insert_expense().never();

        let svc = ExpenseService::new(Arc::new(store), Arc::new(MockFeed::new()));
        let result = svc
            .add_expense(&trip(), "Dinner", 1000, &ada(), vec![])
            .await;
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[tokio::test]
    async fn valid_expense_carries_payer_identity() {
        let mut store = MockStore::new();
        store
            .expect_insert_expense()
            .withf(|e| e.paid_by == "p-ada" && e.paid_by_name == "Ada" && e.amount_minor == 1000)
            .times(1)
            .returning(|new_expense| Ok(Expense::assign(new_expense)));

        let svc = ExpenseService::new(Arc::new(store), Arc::new(MockFeed::new()));
        svc.add_expense(
            &trip(),
            "Dinner",
            1000,
            &ada(),
            vec!["p-ada".to_string(), "p-bob".to_string()],
        )
        .await
        .unwrap();
    }
}
