pub mod chat_dto;
pub mod expense_dto;
pub mod itinerary_dto;
pub mod packing_dto;
pub mod trip_dto;

pub use chat_dto::SendMessageRequest;
pub use expense_dto::AddExpenseRequest;
pub use itinerary_dto::AddItineraryEntryRequest;
pub use packing_dto::AddPackingItemRequest;
pub use trip_dto::CreateTripRequest;

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}
