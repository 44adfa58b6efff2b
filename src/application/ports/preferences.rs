use crate::shared::error::AppError;
use async_trait::async_trait;

/// Local persisted flags and strings consulted at view-mount time.
/// Not part of the synchronization contract.
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    async fn get_flag(&self, key: &str) -> Result<bool, AppError>;
    async fn set_flag(&self, key: &str, value: bool) -> Result<(), AppError>;
    async fn get_string(&self, key: &str) -> Result<Option<String>, AppError>;
    async fn set_string(&self, key: &str, value: &str) -> Result<(), AppError>;
}
