// Trips
pub const INSERT_TRIP: &str = "INSERT INTO trips (id, name, destination, start_date, end_date, created_by, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?)";
pub const SELECT_TRIP_BY_ID: &str = "SELECT * FROM trips WHERE id = ?";
pub const SELECT_ALL_TRIPS: &str = "SELECT * FROM trips ORDER BY start_date ASC, name ASC";
pub const DELETE_TRIP: &str = "DELETE FROM trips WHERE id = ?";

// Packing items
pub const INSERT_PACKING_ITEM: &str = "INSERT INTO packing_items (id, trip_id, item_name, category, is_packed, claimed_by, claimed_by_name, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)";
pub const SELECT_PACKING_ITEMS_BY_TRIP: &str =
    "SELECT * FROM packing_items WHERE trip_id = ? ORDER BY category ASC, item_name ASC";
pub const SELECT_PACKING_ITEM_BY_ID: &str = "SELECT * FROM packing_items WHERE id = ?";
pub const UPDATE_PACKING_ITEM_PACKED: &str =
    "UPDATE packing_items SET is_packed = ?, updated_at = ? WHERE id = ?";
pub const UPDATE_PACKING_ITEM_CLAIM: &str =
    "UPDATE packing_items SET claimed_by = ?, claimed_by_name = ?, updated_at = ? WHERE id = ?";
pub const DELETE_PACKING_ITEM: &str = "DELETE FROM packing_items WHERE id = ?";

// Itinerary entries
pub const INSERT_ITINERARY_ENTRY: &str = "INSERT INTO itinerary_entries (id, trip_id, title, day, start_minute, location, notes, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)";
pub const SELECT_ITINERARY_ENTRIES_BY_TRIP: &str =
    "SELECT * FROM itinerary_entries WHERE trip_id = ? ORDER BY day ASC, start_minute ASC, title ASC";
pub const SELECT_ITINERARY_ENTRY_BY_ID: &str = "SELECT * FROM itinerary_entries WHERE id = ?";
pub const UPDATE_ITINERARY_ENTRY: &str = "UPDATE itinerary_entries SET title = ?, day = ?, start_minute = ?, location = ?, notes = ?, updated_at = ? WHERE id = ?";
pub const DELETE_ITINERARY_ENTRY: &str = "DELETE FROM itinerary_entries WHERE id = ?";

// Expenses
pub const INSERT_EXPENSE: &str = "INSERT INTO expenses (id, trip_id, description, amount_minor, paid_by, paid_by_name, split_between, spent_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?)";
pub const SELECT_EXPENSES_BY_TRIP: &str =
    "SELECT * FROM expenses WHERE trip_id = ? ORDER BY spent_at DESC";
pub const SELECT_EXPENSE_BY_ID: &str = "SELECT * FROM expenses WHERE id = ?";
pub const DELETE_EXPENSE: &str = "DELETE FROM expenses WHERE id = ?";

// Chat messages
pub const INSERT_CHAT_MESSAGE: &str = "INSERT INTO chat_messages (id, trip_id, sender_id, sender_name, body, sent_at) VALUES (?, ?, ?, ?, ?, ?)";
pub const SELECT_CHAT_MESSAGES_BY_TRIP: &str =
    "SELECT * FROM chat_messages WHERE trip_id = ? ORDER BY sent_at ASC";
pub const SELECT_CHAT_MESSAGE_BY_ID: &str = "SELECT * FROM chat_messages WHERE id = ?";
pub const DELETE_CHAT_MESSAGE: &str = "DELETE FROM chat_messages WHERE id = ?";

// Notifications
pub const INSERT_NOTIFICATION: &str = "INSERT INTO notifications (id, title, body, kind, is_read, created_at) VALUES (?, ?, ?, ?, ?, ?)";
pub const SELECT_ALL_NOTIFICATIONS: &str =
    "SELECT * FROM notifications ORDER BY created_at DESC";
pub const MARK_NOTIFICATION_READ: &str = "UPDATE notifications SET is_read = 1 WHERE id = ?";
pub const MARK_ALL_NOTIFICATIONS_READ: &str = "UPDATE notifications SET is_read = 1";
pub const DELETE_NOTIFICATION: &str = "DELETE FROM notifications WHERE id = ?";
