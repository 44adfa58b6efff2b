use crate::domain::entities::{
    ChatMessage, Expense, ItineraryEntry, NewChatMessage, NewExpense, NewItineraryEntry,
    NewNotification, NewPackingItem, NewTrip, Notification, PackingItem, Trip,
};
use crate::domain::value_objects::{Participant, TripId};
use crate::shared::error::AppError;
use async_trait::async_trait;

/// Backing-store contract for trips. Dashboard listing is load-only;
/// trips are not change-feed scoped.
#[async_trait]
pub trait TripStore: Send + Sync {
    async fn create_trip(&self, new_trip: &NewTrip) -> Result<Trip, AppError>;
    async fn get_trip(&self, id: &str) -> Result<Option<Trip>, AppError>;
    /// Ordered by start_date ascending.
    async fn list_trips(&self) -> Result<Vec<Trip>, AppError>;
    async fn delete_trip(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait PackingItemStore: Send + Sync {
    /// Insert; the store assigns id and timestamps and returns the
    /// created row.
    async fn insert_item(&self, new_item: &NewPackingItem) -> Result<PackingItem, AppError>;
    /// All rows for the trip, ordered by (category asc, item_name asc).
    async fn list_items(&self, trip_id: &TripId) -> Result<Vec<PackingItem>, AppError>;
    async fn set_packed(&self, id: &str, is_packed: bool) -> Result<(), AppError>;
    /// `Some` claims for the participant, `None` clears both claim fields.
    async fn set_claim(&self, id: &str, claimant: Option<Participant>) -> Result<(), AppError>;
    async fn delete_item(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait ItineraryStore: Send + Sync {
    async fn insert_entry(&self, new_entry: &NewItineraryEntry)
        -> Result<ItineraryEntry, AppError>;
    /// Ordered by (day asc, start_minute asc, title asc).
    async fn list_entries(&self, trip_id: &TripId) -> Result<Vec<ItineraryEntry>, AppError>;
    async fn update_entry(&self, entry: &ItineraryEntry) -> Result<(), AppError>;
    async fn delete_entry(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait ExpenseStore: Send + Sync {
    async fn insert_expense(&self, new_expense: &NewExpense) -> Result<Expense, AppError>;
    /// Ordered by spent_at descending.
    async fn list_expenses(&self, trip_id: &TripId) -> Result<Vec<Expense>, AppError>;
    async fn delete_expense(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait ChatMessageStore: Send + Sync {
    async fn insert_message(&self, new_message: &NewChatMessage) -> Result<ChatMessage, AppError>;
    /// Ordered by sent_at ascending.
    async fn list_messages(&self, trip_id: &TripId) -> Result<Vec<ChatMessage>, AppError>;
    async fn delete_message(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait NotificationStore: Send + Sync {
    async fn insert_notification(
        &self,
        new_notification: &NewNotification,
    ) -> Result<Notification, AppError>;
    /// Ordered by created_at descending.
    async fn list_notifications(&self) -> Result<Vec<Notification>, AppError>;
    async fn mark_read(&self, id: &str) -> Result<(), AppError>;
    async fn mark_all_read(&self) -> Result<(), AppError>;
    async fn delete_notification(&self, id: &str) -> Result<(), AppError>;
}
