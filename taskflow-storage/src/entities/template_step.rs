use serde::{Deserialize, Serialize};

use super::audit::AuditStamp;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoredTemplateStep {
    pub id: String,
    pub template_id: String,
    pub name: String,
    pub order: i64,
    pub audit: AuditStamp,
    pub operations: Vec<StoredStepOperation>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoredStepOperation {
    pub id: String,
    pub step_id: String,
    pub name: String,
    pub audit: AuditStamp,
}
