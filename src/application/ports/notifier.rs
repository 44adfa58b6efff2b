use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToastSeverity {
    Info,
    Error,
}

/// A short-lived, non-blocking user notification. Mutation failures
/// surface here and nowhere else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub severity: ToastSeverity,
}

impl Toast {
    pub fn error(description: impl Into<String>) -> Self {
        Self {
            title: "Error".to_string(),
            description: description.into(),
            severity: ToastSeverity::Error,
        }
    }

    pub fn info(description: impl Into<String>) -> Self {
        Self {
            title: "Info".to_string(),
            description: description.into(),
            severity: ToastSeverity::Info,
        }
    }
}

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, toast: Toast);
}
