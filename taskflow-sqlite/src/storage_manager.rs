use sqlx::SqlitePool;
use taskflow_storage::{
    entities::{
        task_template::{StoredTaskTemplate, TemplateStage, UpdateStoredTaskTemplate},
        template_form::StoredTemplateForm,
        template_step::StoredTemplateStep,
    },
    error::StorageError,
};

use crate::persistence::{
    task_template::TaskTemplatePersistence, template_form::TemplateFormPersistence,
    template_step::TemplateStepPersistence,
};

pub struct SqliteStorageManager {
    pool: SqlitePool,
    task_template: TaskTemplatePersistence,
    template_form: TemplateFormPersistence,
    template_step: TemplateStepPersistence,
}

impl SqliteStorageManager {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            task_template: TaskTemplatePersistence::new(pool.clone()),
            template_form: TemplateFormPersistence::new(pool.clone()),
            template_step: TemplateStepPersistence::new(pool.clone()),
            pool,
        }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait::async_trait]
impl taskflow_storage::traits::TemplateStorage for SqliteStorageManager {
    async fn create_template(&self, tpl: &StoredTaskTemplate) -> Result<(), StorageError> {
        self.task_template.create_template(tpl).await
    }

    async fn get_template(&self, id: &str) -> Result<Option<StoredTaskTemplate>, StorageError> {
        self.task_template.get_template(id).await
    }

    async fn update_template(
        &self,
        id: &str,
        changes: &UpdateStoredTaskTemplate,
    ) -> Result<u64, StorageError> {
        self.task_template.update_template(id, changes).await
    }

    async fn find_templates(
        &self,
        keyword: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<StoredTaskTemplate>, StorageError> {
        self.task_template.find_templates(keyword, limit, offset).await
    }

    async fn count_templates(&self, keyword: Option<&str>) -> Result<i64, StorageError> {
        self.task_template.count_templates(keyword).await
    }
}

#[async_trait::async_trait]
impl taskflow_storage::traits::FormStorage for SqliteStorageManager {
    async fn replace_forms(
        &self,
        template_ids: &[String],
        stage: TemplateStage,
        forms: &[StoredTemplateForm],
    ) -> Result<(), StorageError> {
        self.template_form.replace_forms(template_ids, stage, forms).await
    }

    async fn find_forms_by_template(
        &self,
        template_id: &str,
    ) -> Result<Vec<StoredTemplateForm>, StorageError> {
        self.template_form.find_forms_by_template(template_id).await
    }
}

#[async_trait::async_trait]
impl taskflow_storage::traits::StepStorage for SqliteStorageManager {
    async fn replace_steps(
        &self,
        template_ids: &[String],
        stage: TemplateStage,
        steps: &[StoredTemplateStep],
    ) -> Result<(), StorageError> {
        self.template_step.replace_steps(template_ids, stage, steps).await
    }

    async fn find_steps_by_template(
        &self,
        template_id: &str,
    ) -> Result<Vec<StoredTemplateStep>, StorageError> {
        self.template_step.find_steps_by_template(template_id).await
    }
}
