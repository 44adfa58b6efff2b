pub mod participant;
pub mod trip_id;

pub use participant::Participant;
pub use trip_id::TripId;
