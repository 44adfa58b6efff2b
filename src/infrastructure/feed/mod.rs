pub mod broadcast_feed;

pub use broadcast_feed::BroadcastChangeFeed;
