use crate::application::ports::PreferenceStore;
use crate::shared::error::AppError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use thiserror::Error;
use tokio::sync::RwLock;

#[derive(Debug, Error)]
pub enum PreferenceFileError {
    #[error("failed to access preference file: {0}")]
    Io(#[from] std::io::Error),

    #[error("preference file is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct PreferenceData {
    #[serde(default)]
    flags: HashMap<String, bool>,
    #[serde(default)]
    strings: HashMap<String, String>,
}

/// JSON-file-backed preference store. The whole file is rewritten on
/// every set, through a temp file so a crash never leaves a torn file.
pub struct FilePreferenceStore {
    path: PathBuf,
    data: RwLock<PreferenceData>,
}

impl FilePreferenceStore {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, PreferenceFileError> {
        let path = path.into();
        let data = match std::fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents)?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => PreferenceData::default(),
            Err(err) => return Err(err.into()),
        };
        Ok(Self {
            path,
            data: RwLock::new(data),
        })
    }

    /// Open `preferences.json` inside the configured data directory.
    pub fn open_in(data_dir: &str) -> Result<Self, PreferenceFileError> {
        Self::open(PathBuf::from(data_dir).join("preferences.json"))
    }

    fn persist(&self, data: &PreferenceData) -> Result<(), PreferenceFileError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(data)?;
        let tmp = self.path.with_extension("tmp");
        std::fs::write(&tmp, json)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

#[async_trait]
impl PreferenceStore for FilePreferenceStore {
    async fn get_flag(&self, key: &str) -> Result<bool, AppError> {
        Ok(self.data.read().await.flags.get(key).copied().unwrap_or(false))
    }

    async fn set_flag(&self, key: &str, value: bool) -> Result<(), AppError> {
        let mut data = self.data.write().await;
        data.flags.insert(key.to_string(), value);
        self.persist(&data)?;
        Ok(())
    }

    async fn get_string(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.data.read().await.strings.get(key).cloned())
    }

    async fn set_string(&self, key: &str, value: &str) -> Result<(), AppError> {
        let mut data = self.data.write().await;
        data.strings.insert(key.to_string(), value.to_string());
        self.persist(&data)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");

        let store = FilePreferenceStore::open(&path).unwrap();
        store.set_flag("has_seen_onboarding", true).await.unwrap();
        store.set_string("display_name", "Ada").await.unwrap();
        drop(store);

        let reopened = FilePreferenceStore::open(&path).unwrap();
        assert!(reopened.get_flag("has_seen_onboarding").await.unwrap());
        assert_eq!(
            reopened.get_string("display_name").await.unwrap().as_deref(),
            Some("Ada")
        );
    }

    #[tokio::test]
    async fn missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilePreferenceStore::open(dir.path().join("none.json")).unwrap();
        assert!(!store.get_flag("has_seen_onboarding").await.unwrap());
        assert!(store.get_string("display_name").await.unwrap().is_none());
    }

    #[test]
    fn malformed_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(matches!(
            FilePreferenceStore::open(&path),
            Err(PreferenceFileError::Malformed(_))
        ));
    }
}
