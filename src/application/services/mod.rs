pub mod chat_service;
pub mod expense_service;
pub mod itinerary_service;
pub mod notification_service;
pub mod packing_list_service;
pub mod session_service;
pub mod synced_list;
pub mod trip_service;

pub use chat_service::ChatService;
pub use expense_service::ExpenseService;
pub use itinerary_service::ItineraryService;
pub use notification_service::NotificationService;
pub use packing_list_service::PackingListService;
pub use session_service::{SessionService, StartRoute};
pub use synced_list::{SubscriptionHandle, SyncedList, SyncedRow};
pub use trip_service::TripService;
