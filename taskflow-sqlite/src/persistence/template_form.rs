use sqlx::SqlitePool;
use taskflow_storage::entities::{
    audit::AuditStamp, task_template::TemplateStage, template_form::StoredTemplateForm,
};
use taskflow_storage::error::StorageError;
use tracing::debug;

use crate::{
    crud::{task_template_crud, template_form_crud},
    models::template_form::TemplateForm,
};

#[derive(Clone)]
pub struct TemplateFormPersistence {
    pool: SqlitePool,
}

impl TemplateFormPersistence {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    // model -> entity
    fn to_entity(model: TemplateForm) -> Result<StoredTemplateForm, StorageError> {
        Ok(StoredTemplateForm {
            id: model.id,
            template_id: model.template_id,
            name: model.name,
            order: model.order_no,
            definition: serde_json::from_str(&model.definition)?,
            audit: AuditStamp::at(model.created_by, model.created_at),
        })
    }

    // entity -> model
    fn to_model(entity: &StoredTemplateForm) -> TemplateForm {
        TemplateForm {
            id: entity.id.clone(),
            template_id: entity.template_id.clone(),
            name: entity.name.clone(),
            order_no: entity.order,
            definition: entity.definition.to_string(),
            created_by: entity.audit.created_by.clone(),
            created_at: entity.audit.created_at,
        }
    }

    pub async fn replace_forms(
        &self,
        template_ids: &[String],
        stage: TemplateStage,
        forms: &[StoredTemplateForm],
    ) -> Result<(), StorageError> {
        let mut tx = self.pool.begin().await?;

        task_template_crud::update_stage_for_templates(&mut *tx, template_ids, stage.as_str())
            .await?;
        // 删除旧表单
        let removed = template_form_crud::delete_forms_by_templates(&mut *tx, template_ids).await?;
        for form in forms {
            template_form_crud::create_form(&mut *tx, &Self::to_model(form)).await?;
        }

        tx.commit().await?;
        debug!(removed, inserted = forms.len(), "template forms replaced");
        Ok(())
    }

    pub async fn find_forms_by_template(
        &self,
        template_id: &str,
    ) -> Result<Vec<StoredTemplateForm>, StorageError> {
        let models = template_form_crud::find_forms_by_template(&self.pool, template_id).await?;
        models.into_iter().map(Self::to_entity).collect()
    }
}
