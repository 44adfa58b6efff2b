#![allow(dead_code)]

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use wayfarer::infrastructure::database::{ConnectionPool, SqliteStore};
use wayfarer::infrastructure::feed::BroadcastChangeFeed;

pub struct TestBackend {
    pub pool: ConnectionPool,
    pub feed: Arc<BroadcastChangeFeed>,
    pub store: Arc<SqliteStore>,
}

/// Fresh in-memory backend: migrated sqlite store wired to a broadcast
/// feed, the same shape the composition root builds.
pub async fn backend() -> TestBackend {
    let pool = ConnectionPool::from_memory().await.unwrap();
    pool.migrate().await.unwrap();
    let feed = Arc::new(BroadcastChangeFeed::new(64));
    let store = Arc::new(SqliteStore::new(pool.clone(), feed.clone()));
    TestBackend { pool, feed, store }
}

/// Poll until the condition holds; feed delivery is asynchronous.
pub async fn eventually<F, Fut>(mut check: F, what: &str)
where
    F: FnMut() -> Fut,
    Fut: Future<Output = bool>,
{
    for _ in 0..200 {
        if check().await {
            return;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    panic!("condition never held: {}", what);
}
