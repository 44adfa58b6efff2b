use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TripId(String);

impl TripId {
    pub fn new(value: String) -> Result<Self, String> {
        if value.trim().is_empty() {
            return Err("Trip ID cannot be empty".to_string());
        }
        Ok(Self(value))
    }

    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// A missing route parameter degrades to the empty-string filter,
    /// which matches no rows instead of erroring.
    pub fn from_route_param(param: Option<&str>) -> Self {
        Self(param.unwrap_or_default().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for TripId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<TripId> for String {
    fn from(id: TripId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_id() {
        assert!(TripId::new("  ".to_string()).is_err());
    }

    #[test]
    fn absent_route_param_matches_nothing() {
        let id = TripId::from_route_param(None);
        assert!(id.is_empty());
        assert_eq!(id.as_str(), "");
    }

    #[test]
    fn present_route_param_is_kept() {
        let id = TripId::from_route_param(Some("trip-1"));
        assert_eq!(id.as_str(), "trip-1");
    }
}
