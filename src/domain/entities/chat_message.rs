use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq)]
pub struct NewChatMessage {
    pub trip_id: String,
    pub sender_id: String,
    pub sender_name: String,
    pub body: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub id: String,
    pub trip_id: String,
    pub sender_id: String,
    pub sender_name: String,
    pub body: String,
    pub sent_at: DateTime<Utc>,
}

impl ChatMessage {
    pub fn assign(new_message: &NewChatMessage) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            trip_id: new_message.trip_id.clone(),
            sender_id: new_message.sender_id.clone(),
            sender_name: new_message.sender_name.clone(),
            body: new_message.body.clone(),
            sent_at: Utc::now(),
        }
    }
}
