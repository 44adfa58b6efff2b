use serde::{Deserialize, Serialize};

/// The acting participant for claim, expense and chat operations.
/// Always passed explicitly; the sync core never assumes an identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: String,
    pub display_name: String,
}

impl Participant {
    pub fn new(id: String, display_name: String) -> Result<Self, String> {
        if id.trim().is_empty() {
            return Err("Participant ID cannot be empty".to_string());
        }
        if display_name.trim().is_empty() {
            return Err("Participant display name cannot be empty".to_string());
        }
        Ok(Self { id, display_name })
    }

    pub fn generate(display_name: String) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            display_name,
        }
    }
}
