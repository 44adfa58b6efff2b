use crate::domain::value_objects::Participant;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Insert payload: the store assigns id and timestamps, and the row
/// starts unpacked and unclaimed.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPackingItem {
    pub trip_id: String,
    pub item_name: String,
    pub category: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PackingItem {
    pub id: String,
    pub trip_id: String,
    pub item_name: String,
    pub category: String,
    pub is_packed: bool,
    pub claimed_by: Option<String>,
    pub claimed_by_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PackingItem {
    /// Materialize a draft into a full row, assigning id and timestamps.
    pub fn assign(new_item: &NewPackingItem) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            trip_id: new_item.trip_id.clone(),
            item_name: new_item.item_name.clone(),
            category: new_item.category.clone(),
            is_packed: false,
            claimed_by: None,
            claimed_by_name: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn toggle_packed(&mut self) {
        self.is_packed = !self.is_packed;
        self.updated_at = Utc::now();
    }

    pub fn is_claimed(&self) -> bool {
        self.claimed_by.is_some()
    }

    /// Both claim fields move together; a claimed item is never
    /// half-attributed.
    pub fn claim(&mut self, participant: &Participant) {
        self.claimed_by = Some(participant.id.clone());
        self.claimed_by_name = Some(participant.display_name.clone());
        self.updated_at = Utc::now();
    }

    pub fn unclaim(&mut self) {
        self.claimed_by = None;
        self.claimed_by_name = None;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item() -> PackingItem {
        PackingItem::assign(&NewPackingItem {
            trip_id: "trip-1".to_string(),
            item_name: "Sunscreen".to_string(),
            category: "Toiletries".to_string(),
        })
    }

    #[test]
    fn assigned_item_is_unpacked_and_unclaimed() {
        let item = item();
        assert!(!item.id.is_empty());
        assert!(!item.is_packed);
        assert!(item.claimed_by.is_none());
        assert!(item.claimed_by_name.is_none());
    }

    #[test]
    fn claim_and_unclaim_move_both_fields() {
        let mut item = item();
        let alice = Participant::new("p-alice".to_string(), "Alice".to_string()).unwrap();

        item.claim(&alice);
        assert_eq!(item.claimed_by.as_deref(), Some("p-alice"));
        assert_eq!(item.claimed_by_name.as_deref(), Some("Alice"));

        item.unclaim();
        assert!(item.claimed_by.is_none());
        assert!(item.claimed_by_name.is_none());
    }
}
