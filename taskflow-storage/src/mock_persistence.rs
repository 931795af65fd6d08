//! In-memory backend with the same semantics as the SQLite one.
//!
//! Every write takes the table lock once, so each call is atomic with
//! respect to other callers, mirroring one SQL transaction.

use std::collections::HashSet;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::entities::*;
use crate::error::StorageError;
use crate::traits::*;

#[derive(Debug, Default)]
struct MemoryTables {
    templates: Vec<StoredTaskTemplate>,
    forms: Vec<StoredTemplateForm>,
    steps: Vec<StoredTemplateStep>,
}

#[derive(Debug, Default)]
pub struct MemoryPersistence {
    tables: RwLock<MemoryTables>,
}

impl MemoryPersistence {
    pub fn new() -> Self {
        Self::default()
    }
}

fn name_matches(tpl: &StoredTaskTemplate, keyword: Option<&str>) -> bool {
    keyword.map_or(true, |kw| tpl.name.contains(kw))
}

/// Rejects an id that repeats inside `incoming` or collides with a row that
/// survives the replace, the way a primary key does.
fn ensure_unique_ids<'a>(
    kind: &str,
    surviving: impl Iterator<Item = &'a str>,
    incoming: impl Iterator<Item = &'a str>,
) -> Result<(), StorageError> {
    let mut seen: HashSet<&str> = surviving.collect();
    for id in incoming {
        if !seen.insert(id) {
            return Err(StorageError::InvalidData(format!("duplicate {kind} id '{id}'")));
        }
    }
    Ok(())
}

fn advance_stage(templates: &mut [StoredTaskTemplate], ids: &[String], stage: TemplateStage) {
    for tpl in templates.iter_mut().filter(|t| ids.contains(&t.id)) {
        tpl.stage = stage;
    }
}

#[async_trait]
impl TemplateStorage for MemoryPersistence {
    async fn create_template(&self, tpl: &StoredTaskTemplate) -> Result<(), StorageError> {
        let mut tables = self.tables.write().await;
        if tables.templates.iter().any(|t| t.id == tpl.id) {
            return Err(StorageError::InvalidData(format!(
                "task template '{}' already exists",
                tpl.id
            )));
        }
        tables.templates.push(tpl.clone());
        Ok(())
    }

    async fn get_template(&self, id: &str) -> Result<Option<StoredTaskTemplate>, StorageError> {
        let tables = self.tables.read().await;
        Ok(tables.templates.iter().find(|t| t.id == id).cloned())
    }

    async fn update_template(
        &self,
        id: &str,
        changes: &UpdateStoredTaskTemplate,
    ) -> Result<u64, StorageError> {
        if changes.name.is_none() && changes.stage.is_none() {
            return Ok(0);
        }
        let mut tables = self.tables.write().await;
        let Some(tpl) = tables.templates.iter_mut().find(|t| t.id == id) else {
            return Ok(0);
        };
        if let Some(name) = &changes.name {
            tpl.name = name.clone();
        }
        if let Some(stage) = changes.stage {
            tpl.stage = stage;
        }
        Ok(1)
    }

    async fn find_templates(
        &self,
        keyword: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<StoredTaskTemplate>, StorageError> {
        let tables = self.tables.read().await;
        // newest insert wins ties on created_at
        let mut matched: Vec<_> = tables
            .templates
            .iter()
            .rev()
            .filter(|t| name_matches(t, keyword))
            .cloned()
            .collect();
        matched.sort_by(|a, b| b.audit.created_at.cmp(&a.audit.created_at));

        let offset = usize::try_from(offset).unwrap_or(0);
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);
        Ok(matched.into_iter().skip(offset).take(limit).collect())
    }

    async fn count_templates(&self, keyword: Option<&str>) -> Result<i64, StorageError> {
        let tables = self.tables.read().await;
        let count = tables
            .templates
            .iter()
            .filter(|t| name_matches(t, keyword))
            .count();
        Ok(count as i64)
    }
}

#[async_trait]
impl FormStorage for MemoryPersistence {
    async fn replace_forms(
        &self,
        template_ids: &[String],
        stage: TemplateStage,
        forms: &[StoredTemplateForm],
    ) -> Result<(), StorageError> {
        let mut tables = self.tables.write().await;
        let replaced = |f: &StoredTemplateForm| template_ids.contains(&f.template_id);
        ensure_unique_ids(
            "form",
            tables.forms.iter().filter(|f| !replaced(*f)).map(|f| f.id.as_str()),
            forms.iter().map(|f| f.id.as_str()),
        )?;

        advance_stage(&mut tables.templates, template_ids, stage);
        tables.forms.retain(|f| !replaced(f));
        tables.forms.extend_from_slice(forms);
        Ok(())
    }

    async fn find_forms_by_template(
        &self,
        template_id: &str,
    ) -> Result<Vec<StoredTemplateForm>, StorageError> {
        let tables = self.tables.read().await;
        let mut forms: Vec<_> = tables
            .forms
            .iter()
            .filter(|f| f.template_id == template_id)
            .cloned()
            .collect();
        forms.sort_by_key(|f| f.order);
        Ok(forms)
    }
}

#[async_trait]
impl StepStorage for MemoryPersistence {
    async fn replace_steps(
        &self,
        template_ids: &[String],
        stage: TemplateStage,
        steps: &[StoredTemplateStep],
    ) -> Result<(), StorageError> {
        let step_ids: HashSet<&str> = steps.iter().map(|s| s.id.as_str()).collect();
        let mut tables = self.tables.write().await;
        let replaced = |s: &StoredTemplateStep| {
            step_ids.contains(s.id.as_str()) || template_ids.contains(&s.template_id)
        };
        let surviving: Vec<&StoredTemplateStep> =
            tables.steps.iter().filter(|s| !replaced(*s)).collect();
        ensure_unique_ids(
            "step",
            surviving.iter().map(|s| s.id.as_str()),
            steps.iter().map(|s| s.id.as_str()),
        )?;
        ensure_unique_ids(
            "operation",
            surviving
                .iter()
                .flat_map(|s| s.operations.iter())
                .map(|op| op.id.as_str()),
            steps
                .iter()
                .flat_map(|s| s.operations.iter())
                .map(|op| op.id.as_str()),
        )?;

        advance_stage(&mut tables.templates, template_ids, stage);
        // operations live inside their step, so they go with it
        tables.steps.retain(|s| !replaced(s));
        tables.steps.extend_from_slice(steps);
        Ok(())
    }

    async fn find_steps_by_template(
        &self,
        template_id: &str,
    ) -> Result<Vec<StoredTemplateStep>, StorageError> {
        let tables = self.tables.read().await;
        let mut steps: Vec<_> = tables
            .steps
            .iter()
            .filter(|s| s.template_id == template_id)
            .cloned()
            .collect();
        steps.sort_by_key(|s| s.order);
        Ok(steps)
    }
}
