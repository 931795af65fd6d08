use sqlx::SqlitePool;
use taskflow_storage::entities::{
    audit::AuditStamp,
    task_template::{StoredTaskTemplate, UpdateStoredTaskTemplate},
};
use taskflow_storage::error::StorageError;

use crate::{
    crud::task_template_crud,
    models::task_template::{TaskTemplate, UpdateTaskTemplate},
};

#[derive(Clone)]
pub struct TaskTemplatePersistence {
    pool: SqlitePool,
}

impl TaskTemplatePersistence {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    // model -> entity
    pub(crate) fn to_entity(model: TaskTemplate) -> Result<StoredTaskTemplate, StorageError> {
        Ok(StoredTaskTemplate {
            id: model.id,
            name: model.name,
            stage: model.stage.parse()?,
            audit: AuditStamp::at(model.created_by, model.created_at),
        })
    }

    // entity -> model
    fn to_model(entity: &StoredTaskTemplate) -> TaskTemplate {
        TaskTemplate {
            id: entity.id.clone(),
            name: entity.name.clone(),
            stage: entity.stage.as_str().to_string(),
            created_by: entity.audit.created_by.clone(),
            created_at: entity.audit.created_at,
        }
    }

    // entity update -> model update
    fn to_model_update(entity: &UpdateStoredTaskTemplate) -> UpdateTaskTemplate {
        UpdateTaskTemplate {
            name: entity.name.clone(),
            stage: entity.stage.map(|s| s.as_str().to_string()),
        }
    }

    pub async fn create_template(&self, tpl: &StoredTaskTemplate) -> Result<(), StorageError> {
        let model = Self::to_model(tpl);
        task_template_crud::create_template(&self.pool, &model)
            .await
            .map_err(StorageError::from)
    }

    pub async fn get_template(&self, id: &str) -> Result<Option<StoredTaskTemplate>, StorageError> {
        let model_opt = task_template_crud::get_template(&self.pool, id).await?;
        model_opt.map(Self::to_entity).transpose()
    }

    pub async fn update_template(
        &self,
        id: &str,
        changes: &UpdateStoredTaskTemplate,
    ) -> Result<u64, StorageError> {
        let model_update = Self::to_model_update(changes);
        task_template_crud::update_template(&self.pool, id, &model_update)
            .await
            .map_err(StorageError::from)
    }

    pub async fn find_templates(
        &self,
        keyword: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<StoredTaskTemplate>, StorageError> {
        let models = task_template_crud::find_templates(&self.pool, keyword, limit, offset).await?;
        models.into_iter().map(Self::to_entity).collect()
    }

    pub async fn count_templates(&self, keyword: Option<&str>) -> Result<i64, StorageError> {
        task_template_crud::count_templates(&self.pool, keyword)
            .await
            .map_err(StorageError::from)
    }
}
