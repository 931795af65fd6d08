use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use taskflow_storage::entities::task_template::{StoredTaskTemplate, TemplateStage};
use utoipa::ToSchema;

/// 创建模板（不带 id）或重命名已有模板（带 id）
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct TemplateUpsert {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TemplateCreated {
    pub id: String,
}

/// 模板摘要
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TaskTemplateDto {
    pub id: String,
    pub name: String,
    #[schema(value_type = String, example = "DesignForms")]
    pub stage: TemplateStage,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}

impl From<StoredTaskTemplate> for TaskTemplateDto {
    fn from(tpl: StoredTaskTemplate) -> Self {
        Self {
            id: tpl.id,
            name: tpl.name,
            stage: tpl.stage,
            created_by: tpl.audit.created_by,
            created_at: tpl.audit.created_at.and_utc(),
        }
    }
}
