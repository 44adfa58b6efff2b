use crate::application::ports::PreferenceStore;
use crate::shared::error::AppError;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Volatile preference store for tests and in-memory sessions.
#[derive(Default)]
pub struct MemoryPreferenceStore {
    flags: RwLock<HashMap<String, bool>>,
    strings: RwLock<HashMap<String, String>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PreferenceStore for MemoryPreferenceStore {
    async fn get_flag(&self, key: &str) -> Result<bool, AppError> {
        Ok(self.flags.read().await.get(key).copied().unwrap_or(false))
    }

    async fn set_flag(&self, key: &str, value: bool) -> Result<(), AppError> {
        self.flags.write().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn get_string(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.strings.read().await.get(key).cloned())
    }

    async fn set_string(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.strings
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
