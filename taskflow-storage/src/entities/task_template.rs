use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::audit::AuditStamp;
use crate::error::StorageError;

/// Authoring progress of a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemplateStage {
    Save,
    DesignForms,
    DesignSteps,
}

impl TemplateStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateStage::Save => "Save",
            TemplateStage::DesignForms => "DesignForms",
            TemplateStage::DesignSteps => "DesignSteps",
        }
    }
}

impl fmt::Display for TemplateStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateStage {
    type Err = StorageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Save" => Ok(Self::Save),
            "DesignForms" => Ok(Self::DesignForms),
            "DesignSteps" => Ok(Self::DesignSteps),
            other => Err(StorageError::DeserializationError(format!(
                "unknown template stage: {other}"
            ))),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoredTaskTemplate {
    pub id: String,
    pub name: String,
    pub stage: TemplateStage,
    pub audit: AuditStamp,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UpdateStoredTaskTemplate {
    pub name: Option<String>,
    pub stage: Option<TemplateStage>,
}
