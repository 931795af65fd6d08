use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct TemplateStep {
    pub id: String,
    pub template_id: String,
    pub name: String,
    pub order_no: i64,
    pub created_by: String,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct StepOperation {
    pub id: String,
    pub step_id: String,
    pub name: String,
    /// position inside the owning step
    pub seq: i64,
    pub created_by: String,
    pub created_at: NaiveDateTime,
}
