pub mod chat_message;
pub mod expense;
pub mod itinerary_entry;
pub mod notification;
pub mod packing_item;
pub mod trip;

pub use chat_message::{ChatMessage, NewChatMessage};
pub use expense::{Expense, NewExpense};
pub use itinerary_entry::{ItineraryEntry, NewItineraryEntry};
pub use notification::{NewNotification, Notification};
pub use packing_item::{NewPackingItem, PackingItem};
pub use trip::{NewTrip, Trip};
