mod chat_messages;
mod expenses;
mod itinerary_entries;
mod mapper;
mod notifications;
mod packing_items;
mod queries;
mod trips;

use crate::infrastructure::database::connection_pool::ConnectionPool;
use crate::infrastructure::feed::BroadcastChangeFeed;
use std::sync::Arc;

/// SQLite implementation of every store contract. Stands in for the
/// hosted backend: each committed mutation publishes the matching row
/// event to the broadcast feed, which is what makes the synced list
/// views converge.
pub struct SqliteStore {
    pool: ConnectionPool,
    feed: Arc<BroadcastChangeFeed>,
}

impl SqliteStore {
    pub fn new(pool: ConnectionPool, feed: Arc<BroadcastChangeFeed>) -> Self {
        Self { pool, feed }
    }
}
