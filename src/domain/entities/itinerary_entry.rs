use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq)]
pub struct NewItineraryEntry {
    pub trip_id: String,
    pub title: String,
    pub day: NaiveDate,
    pub start_minute: u16,
    pub location: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ItineraryEntry {
    pub id: String,
    pub trip_id: String,
    pub title: String,
    pub day: NaiveDate,
    /// Minutes from midnight, local to the trip.
    pub start_minute: u16,
    pub location: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ItineraryEntry {
    pub fn assign(new_entry: &NewItineraryEntry) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            trip_id: new_entry.trip_id.clone(),
            title: new_entry.title.clone(),
            day: new_entry.day,
            start_minute: new_entry.start_minute,
            location: new_entry.location.clone(),
            notes: new_entry.notes.clone(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn reschedule(&mut self, day: NaiveDate, start_minute: u16) {
        self.day = day;
        self.start_minute = start_minute;
        self.updated_at = Utc::now();
    }
}
