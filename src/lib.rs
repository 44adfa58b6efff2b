//! Collaborative trip-planning core: trips, itinerary, packing lists,
//! expense splitting and chat, each screen a live view over a
//! relational store with realtime change feeds.
//!
//! The load-bearing piece is the synced list view
//! ([`application::services::synced_list`]): a local in-memory mirror
//! of one trip-scoped table slice, replaced wholesale on load and
//! reconciled event by event from a subscription. Mutations go straight
//! to the store and come back through the feed; nothing is applied
//! optimistically.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
pub mod shared;
pub mod state;

pub use shared::config::AppConfig;
pub use shared::logging::init_logging;
pub use state::AppState;
