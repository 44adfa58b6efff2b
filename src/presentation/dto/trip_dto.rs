use super::Validate;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateTripRequest {
    pub name: String,
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl Validate for CreateTripRequest {
    fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Trip name is required".to_string());
        }
        if self.name.len() > 100 {
            return Err("Trip name is too long (max 100 characters)".to_string());
        }
        if self.destination.trim().is_empty() {
            return Err("Destination is required".to_string());
        }
        if self.end_date < self.start_date {
            return Err("Trip cannot end before it starts".to_string());
        }
        Ok(())
    }
}
