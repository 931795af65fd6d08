use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct TemplateForm {
    pub id: String,
    pub template_id: String,
    pub name: String,
    pub order_no: i64,
    /// JSON text
    pub definition: String,
    pub created_by: String,
    pub created_at: NaiveDateTime,
}
