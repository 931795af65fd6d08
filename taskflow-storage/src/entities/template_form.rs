use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::audit::AuditStamp;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoredTemplateForm {
    pub id: String,
    pub template_id: String,
    pub name: String,
    /// 1-based position inside the owning template.
    pub order: i64,
    pub definition: Value,
    pub audit: AuditStamp,
}
