use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use taskflow_storage::entities::template_step::{StoredStepOperation, StoredTemplateStep};
use utoipa::ToSchema;

/// A step of a replacement batch.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct StepUpsert {
    /// Assigned by the caller; generated when blank.
    #[serde(default)]
    pub id: String,
    pub template_id: String,
    #[serde(default)]
    pub name: String,
    /// Zero-based position as submitted by the designer.
    #[serde(default)]
    pub order: i64,
    #[serde(default)]
    pub operations: Vec<OperationUpsert>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct OperationUpsert {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TaskTemplateStepDto {
    pub id: String,
    pub template_id: String,
    pub name: String,
    pub order: i64,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub operations: Vec<StepOperationDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StepOperationDto {
    pub id: String,
    pub step_id: String,
    pub name: String,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}

impl From<StoredStepOperation> for StepOperationDto {
    fn from(op: StoredStepOperation) -> Self {
        Self {
            id: op.id,
            step_id: op.step_id,
            name: op.name,
            created_by: op.audit.created_by,
            created_at: op.audit.created_at.and_utc(),
        }
    }
}

impl From<StoredTemplateStep> for TaskTemplateStepDto {
    fn from(step: StoredTemplateStep) -> Self {
        Self {
            id: step.id,
            template_id: step.template_id,
            name: step.name,
            order: step.order,
            created_by: step.audit.created_by,
            created_at: step.audit.created_at.and_utc(),
            operations: step.operations.into_iter().map(Into::into).collect(),
        }
    }
}
