pub mod change_feed;
pub mod notifier;
pub mod preferences;
pub mod stores;

pub use change_feed::{ChangeFeed, FeedSubscription};
pub use notifier::{Notifier, Toast, ToastSeverity};
pub use preferences::PreferenceStore;
pub use stores::{
    ChatMessageStore, ExpenseStore, ItineraryStore, NotificationStore, PackingItemStore, TripStore,
};
