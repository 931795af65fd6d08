use serde::{Deserialize, Serialize};

pub const ANONYMOUS_USER: &str = "anonymous";

/// The user on whose behalf a write runs; stamped as `created_by`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub user_id: String,
}

impl CurrentUser {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }

    pub fn anonymous() -> Self {
        Self::new(ANONYMOUS_USER)
    }
}
