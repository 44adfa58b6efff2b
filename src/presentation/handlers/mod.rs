pub mod chat_handler;
pub mod expense_handler;
pub mod itinerary_handler;
pub mod notification_handler;
pub mod packing_list_handler;
pub mod trip_handler;

pub use chat_handler::ChatHandler;
pub use expense_handler::ExpenseHandler;
pub use itinerary_handler::ItineraryHandler;
pub use notification_handler::NotificationHandler;
pub use packing_list_handler::PackingListHandler;
pub use trip_handler::TripHandler;
