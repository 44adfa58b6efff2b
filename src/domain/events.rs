use serde::{Deserialize, Serialize};

/// A single change-feed notification for one table row. `Inserted` and
/// `Updated` carry the new row version; `Deleted` carries only the old
/// identifier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum RowEvent<T> {
    Inserted(T),
    Updated(T),
    Deleted(String),
}

impl<T> RowEvent<T> {
    pub fn kind(&self) -> RowEventKind {
        match self {
            RowEvent::Inserted(_) => RowEventKind::Inserted,
            RowEvent::Updated(_) => RowEventKind::Updated,
            RowEvent::Deleted(_) => RowEventKind::Deleted,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowEventKind {
    Inserted,
    Updated,
    Deleted,
}
