use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct TaskTemplate {
    pub id: String,
    pub name: String,
    pub stage: String,
    pub created_by: String,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UpdateTaskTemplate {
    pub name: Option<String>,
    pub stage: Option<String>,
}
