use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Creation metadata carried by every stored record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuditStamp {
    pub created_by: String,
    pub created_at: NaiveDateTime,
}

impl AuditStamp {
    /// Stamps `user_id` with the current UTC time.
    pub fn new(user_id: impl Into<String>) -> Self {
        Self::at(user_id, Utc::now().naive_utc())
    }

    pub fn at(user_id: impl Into<String>, created_at: NaiveDateTime) -> Self {
        Self {
            created_by: user_id.into(),
            created_at,
        }
    }
}
