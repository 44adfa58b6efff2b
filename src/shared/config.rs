use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub feed: FeedConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub connection_timeout: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    /// Broadcast channel capacity per (table, trip) subscription.
    pub channel_capacity: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub data_dir: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database: DatabaseConfig {
                url: "sqlite:data/wayfarer.db".to_string(),
                max_connections: 5,
                connection_timeout: 30,
            },
            feed: FeedConfig {
                channel_capacity: 256,
            },
            storage: StorageConfig {
                data_dir: default_data_dir(),
            },
        }
    }
}

fn default_data_dir() -> String {
    dirs::data_dir()
        .map(|base| base.join("wayfarer"))
        .unwrap_or_else(|| PathBuf::from("./data"))
        .to_string_lossy()
        .into_owned()
}

impl AppConfig {
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(v) = std::env::var("WAYFARER_DATABASE_URL") {
            if !v.trim().is_empty() {
                cfg.database.url = v;
            }
        }
        if let Ok(v) = std::env::var("WAYFARER_DB_MAX_CONNECTIONS") {
            if let Some(value) = parse_u32(&v) {
                cfg.database.max_connections = value;
            }
        }
        if let Ok(v) = std::env::var("WAYFARER_FEED_CAPACITY") {
            if let Some(value) = parse_usize(&v) {
                cfg.feed.channel_capacity = value;
            }
        }
        if let Ok(v) = std::env::var("WAYFARER_DATA_DIR") {
            if !v.trim().is_empty() {
                cfg.storage.data_dir = v;
            }
        }

        cfg
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.database.max_connections == 0 {
            return Err("Database max_connections must be greater than 0".to_string());
        }
        if self.feed.channel_capacity == 0 {
            return Err("Feed channel_capacity must be greater than 0".to_string());
        }
        if self.storage.data_dir.trim().is_empty() {
            return Err("Storage data_dir must not be empty".to_string());
        }
        Ok(())
    }
}

fn parse_u32(value: &str) -> Option<u32> {
    value.trim().parse::<u32>().ok().filter(|v| *v > 0)
}

fn parse_usize(value: &str) -> Option<usize> {
    value.trim().parse::<usize>().ok().filter(|v| *v > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_capacity_is_rejected() {
        let mut cfg = AppConfig::default();
        cfg.feed.channel_capacity = 0;
        assert!(cfg.validate().is_err());
    }
}
