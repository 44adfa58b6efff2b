use super::Validate;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct AddItineraryEntryRequest {
    pub title: String,
    pub day: NaiveDate,
    pub start_minute: u16,
    pub location: Option<String>,
    pub notes: Option<String>,
}

impl Validate for AddItineraryEntryRequest {
    fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Entry title is required".to_string());
        }
        if self.start_minute >= 24 * 60 {
            return Err("Start time must fall within the day".to_string());
        }
        Ok(())
    }
}
