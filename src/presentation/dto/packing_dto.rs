use super::Validate;
use crate::domain::constants::is_known_category;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct AddPackingItemRequest {
    pub name: String,
    pub category: String,
}

impl Validate for AddPackingItemRequest {
    fn validate(&self) -> Result<(), String> {
        // Empty names are handled by the silent-refusal rule, not here.
        if !is_known_category(&self.category) {
            return Err(format!("Unknown category: {}", self.category));
        }
        Ok(())
    }
}
