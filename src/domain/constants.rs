/// Packing categories in their fixed display order. Grouped views emit
/// categories in this order, never in row-arrival order.
pub const PACKING_CATEGORIES: [&str; 8] = [
    "Clothing",
    "Toiletries",
    "Electronics",
    "Documents",
    "Medications",
    "Entertainment",
    "Food & Snacks",
    "Other",
];

pub const DEFAULT_CATEGORY: &str = "Clothing";

pub const DEFAULT_DISPLAY_NAME: &str = "Anonymous";

// Preference-store keys.
pub const PREF_HAS_SEEN_ONBOARDING: &str = "has_seen_onboarding";
pub const PREF_IS_LOGGED_IN: &str = "is_logged_in";
pub const PREF_DISPLAY_NAME: &str = "display_name";
pub const PREF_PARTICIPANT_ID: &str = "participant_id";

pub fn is_known_category(category: &str) -> bool {
    PACKING_CATEGORIES.contains(&category)
}
