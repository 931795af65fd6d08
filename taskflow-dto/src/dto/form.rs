use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskflow_storage::entities::template_form::StoredTemplateForm;
use utoipa::ToSchema;

/// One form of a replacement batch. Position comes from the batch order.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FormUpsert {
    #[serde(default)]
    pub id: Option<String>,
    pub template_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub definition: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TaskTemplateFormDto {
    pub id: String,
    pub template_id: String,
    pub name: String,
    pub order: i64,
    #[schema(value_type = Object)]
    pub definition: Value,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}

impl From<StoredTemplateForm> for TaskTemplateFormDto {
    fn from(form: StoredTemplateForm) -> Self {
        Self {
            id: form.id,
            template_id: form.template_id,
            name: form.name,
            order: form.order,
            definition: form.definition,
            created_by: form.audit.created_by,
            created_at: form.audit.created_at.and_utc(),
        }
    }
}
