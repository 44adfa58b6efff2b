use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq)]
pub struct NewNotification {
    pub title: String,
    pub body: String,
    pub kind: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub body: String,
    pub kind: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn assign(new_notification: &NewNotification) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: new_notification.title.clone(),
            body: new_notification.body.clone(),
            kind: new_notification.kind.clone(),
            is_read: false,
            created_at: Utc::now(),
        }
    }

    pub fn mark_read(&mut self) {
        self.is_read = true;
    }
}
