use crate::application::ports::{Notifier, PreferenceStore};
use crate::application::services::{
    ChatService, ExpenseService, ItineraryService, NotificationService, PackingListService,
    SessionService, TripService,
};
use crate::infrastructure::database::{ConnectionPool, SqliteStore};
use crate::infrastructure::feed::BroadcastChangeFeed;
use crate::infrastructure::storage::{FilePreferenceStore, MemoryPreferenceStore};
use crate::presentation::handlers::{
    ChatHandler, ExpenseHandler, ItineraryHandler, NotificationHandler, PackingListHandler,
    TripHandler,
};
use crate::presentation::ToastCenter;
use crate::shared::config::AppConfig;
use std::sync::Arc;

/// Composition root: store, feed, services and per-screen handlers.
pub struct AppState {
    pub config: AppConfig,
    pub pool: ConnectionPool,
    pub feed: Arc<BroadcastChangeFeed>,
    pub toasts: Arc<ToastCenter>,
    pub session: Arc<SessionService>,
    pub trips: Arc<TripHandler>,
    pub packing_list: Arc<PackingListHandler>,
    pub itinerary: Arc<ItineraryHandler>,
    pub expenses: Arc<ExpenseHandler>,
    pub chat: Arc<ChatHandler>,
    pub notifications: Arc<NotificationHandler>,
}

impl AppState {
    pub async fn new(config: AppConfig) -> anyhow::Result<Self> {
        config.validate().map_err(anyhow::Error::msg)?;
        std::fs::create_dir_all(&config.storage.data_dir)?;

        let pool =
            ConnectionPool::new(&config.database.url, config.database.max_connections).await?;
        pool.migrate().await?;

        let preferences: Arc<dyn PreferenceStore> =
            Arc::new(FilePreferenceStore::open_in(&config.storage.data_dir)?);

        Ok(Self::assemble(config, pool, preferences))
    }

    /// Fully in-memory state for tests and the harness.
    pub async fn new_in_memory() -> anyhow::Result<Self> {
        let config = AppConfig::default();
        let pool = ConnectionPool::from_memory().await?;
        pool.migrate().await?;

        let preferences: Arc<dyn PreferenceStore> = Arc::new(MemoryPreferenceStore::new());

        Ok(Self::assemble(config, pool, preferences))
    }

    fn assemble(
        config: AppConfig,
        pool: ConnectionPool,
        preferences: Arc<dyn PreferenceStore>,
    ) -> Self {
        let feed = Arc::new(BroadcastChangeFeed::new(config.feed.channel_capacity));
        let store = Arc::new(SqliteStore::new(pool.clone(), feed.clone()));
        let toasts = Arc::new(ToastCenter::new());
        let notifier: Arc<dyn Notifier> = toasts.clone();

        let session = Arc::new(SessionService::new(preferences));

        let trip_service = Arc::new(TripService::new(store.clone()));
        let packing_service = Arc::new(PackingListService::new(store.clone(), feed.clone()));
        let itinerary_service = Arc::new(ItineraryService::new(store.clone(), feed.clone()));
        let expense_service = Arc::new(ExpenseService::new(store.clone(), feed.clone()));
        let chat_service = Arc::new(ChatService::new(store.clone(), feed.clone()));
        let notification_service = Arc::new(NotificationService::new(store));

        Self {
            trips: Arc::new(TripHandler::new(
                trip_service,
                session.clone(),
                notifier.clone(),
            )),
            packing_list: Arc::new(PackingListHandler::new(
                packing_service,
                session.clone(),
                notifier.clone(),
            )),
            itinerary: Arc::new(ItineraryHandler::new(itinerary_service, notifier.clone())),
            expenses: Arc::new(ExpenseHandler::new(
                expense_service,
                session.clone(),
                notifier.clone(),
            )),
            chat: Arc::new(ChatHandler::new(
                chat_service,
                session.clone(),
                notifier.clone(),
            )),
            notifications: Arc::new(NotificationHandler::new(notification_service, notifier)),
            config,
            pool,
            feed,
            toasts,
            session,
        }
    }
}
