use crate::application::ports::{Notifier, Toast};
use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::info;

/// Buffers transient toasts for the active screen; the UI drains the
/// buffer each frame. Toasts are the only surface a failed backend
/// call reaches.
#[derive(Default)]
pub struct ToastCenter {
    toasts: RwLock<Vec<Toast>>,
}

impl ToastCenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn drain(&self) -> Vec<Toast> {
        std::mem::take(&mut *self.toasts.write().await)
    }

    pub async fn len(&self) -> usize {
        self.toasts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.toasts.read().await.is_empty()
    }
}

#[async_trait]
impl Notifier for ToastCenter {
    async fn notify(&self, toast: Toast) {
        info!("toast: {} - {}", toast.title, toast.description);
        self.toasts.write().await.push(toast);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn drain_empties_the_buffer() {
        let center = ToastCenter::new();
        center.notify(Toast::error("Failed to add item")).await;
        center.notify(Toast::info("Saved")).await;

        let drained = center.drain().await;
        assert_eq!(drained.len(), 2);
        assert!(center.is_empty().await);
    }
}
