use crate::domain::entities::{
    ChatMessage, Expense, ItineraryEntry, Notification, PackingItem, Trip,
};
use crate::shared::error::AppError;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

pub(super) fn datetime_from_millis(millis: i64) -> DateTime<Utc> {
    match Utc.timestamp_millis_opt(millis) {
        chrono::LocalResult::Single(ts) => ts,
        _ => Utc::now(),
    }
}

fn date_from_text(text: &str) -> Result<NaiveDate, AppError> {
    text.parse::<NaiveDate>()
        .map_err(|err| AppError::Database(format!("invalid date '{}': {}", text, err)))
}

pub(super) fn map_trip_row(row: &SqliteRow) -> Result<Trip, AppError> {
    let start_date: String = row.try_get("start_date")?;
    let end_date: String = row.try_get("end_date")?;
    Ok(Trip {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        destination: row.try_get("destination")?,
        start_date: date_from_text(&start_date)?,
        end_date: date_from_text(&end_date)?,
        created_by: row.try_get("created_by")?,
        created_at: datetime_from_millis(row.try_get("created_at")?),
        updated_at: datetime_from_millis(row.try_get("updated_at")?),
    })
}

pub(super) fn map_packing_item_row(row: &SqliteRow) -> Result<PackingItem, AppError> {
    let is_packed: i64 = row.try_get("is_packed")?;
    Ok(PackingItem {
        id: row.try_get("id")?,
        trip_id: row.try_get("trip_id")?,
        item_name: row.try_get("item_name")?,
        category: row.try_get("category")?,
        is_packed: is_packed != 0,
        claimed_by: row.try_get("claimed_by")?,
        claimed_by_name: row.try_get("claimed_by_name")?,
        created_at: datetime_from_millis(row.try_get("created_at")?),
        updated_at: datetime_from_millis(row.try_get("updated_at")?),
    })
}

pub(super) fn map_itinerary_entry_row(row: &SqliteRow) -> Result<ItineraryEntry, AppError> {
    let day: String = row.try_get("day")?;
    let start_minute: i64 = row.try_get("start_minute")?;
    Ok(ItineraryEntry {
        id: row.try_get("id")?,
        trip_id: row.try_get("trip_id")?,
        title: row.try_get("title")?,
        day: date_from_text(&day)?,
        start_minute: start_minute as u16,
        location: row.try_get("location")?,
        notes: row.try_get("notes")?,
        created_at: datetime_from_millis(row.try_get("created_at")?),
        updated_at: datetime_from_millis(row.try_get("updated_at")?),
    })
}

pub(super) fn map_expense_row(row: &SqliteRow) -> Result<Expense, AppError> {
    let split_between: String = row.try_get("split_between")?;
    Ok(Expense {
        id: row.try_get("id")?,
        trip_id: row.try_get("trip_id")?,
        description: row.try_get("description")?,
        amount_minor: row.try_get("amount_minor")?,
        paid_by: row.try_get("paid_by")?,
        paid_by_name: row.try_get("paid_by_name")?,
        split_between: serde_json::from_str(&split_between)?,
        spent_at: datetime_from_millis(row.try_get("spent_at")?),
    })
}

pub(super) fn map_chat_message_row(row: &SqliteRow) -> Result<ChatMessage, AppError> {
    Ok(ChatMessage {
        id: row.try_get("id")?,
        trip_id: row.try_get("trip_id")?,
        sender_id: row.try_get("sender_id")?,
        sender_name: row.try_get("sender_name")?,
        body: row.try_get("body")?,
        sent_at: datetime_from_millis(row.try_get("sent_at")?),
    })
}

pub(super) fn map_notification_row(row: &SqliteRow) -> Result<Notification, AppError> {
    let is_read: i64 = row.try_get("is_read")?;
    Ok(Notification {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        body: row.try_get("body")?,
        kind: row.try_get("kind")?,
        is_read: is_read != 0,
        created_at: datetime_from_millis(row.try_get("created_at")?),
    })
}
