use std::collections::HashMap;

use sqlx::SqlitePool;
use taskflow_storage::entities::{
    audit::AuditStamp,
    task_template::TemplateStage,
    template_step::{StoredStepOperation, StoredTemplateStep},
};
use taskflow_storage::error::StorageError;
use tracing::debug;

use crate::{
    crud::{task_template_crud, template_step_crud},
    models::template_step::{StepOperation, TemplateStep},
};

#[derive(Clone)]
pub struct TemplateStepPersistence {
    pool: SqlitePool,
}

impl TemplateStepPersistence {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn to_entity(model: TemplateStep, operations: Vec<StoredStepOperation>) -> StoredTemplateStep {
        StoredTemplateStep {
            id: model.id,
            template_id: model.template_id,
            name: model.name,
            order: model.order_no,
            audit: AuditStamp::at(model.created_by, model.created_at),
            operations,
        }
    }

    fn to_model(entity: &StoredTemplateStep) -> TemplateStep {
        TemplateStep {
            id: entity.id.clone(),
            template_id: entity.template_id.clone(),
            name: entity.name.clone(),
            order_no: entity.order,
            created_by: entity.audit.created_by.clone(),
            created_at: entity.audit.created_at,
        }
    }

    fn to_operation_entity(model: StepOperation) -> StoredStepOperation {
        StoredStepOperation {
            id: model.id,
            step_id: model.step_id,
            name: model.name,
            audit: AuditStamp::at(model.created_by, model.created_at),
        }
    }

    fn to_operation_model(entity: &StoredStepOperation, seq: i64) -> StepOperation {
        StepOperation {
            id: entity.id.clone(),
            step_id: entity.step_id.clone(),
            name: entity.name.clone(),
            seq,
            created_by: entity.audit.created_by.clone(),
            created_at: entity.audit.created_at,
        }
    }

    pub async fn replace_steps(
        &self,
        template_ids: &[String],
        stage: TemplateStage,
        steps: &[StoredTemplateStep],
    ) -> Result<(), StorageError> {
        let step_ids: Vec<String> = steps.iter().map(|s| s.id.clone()).collect();
        let mut tx = self.pool.begin().await?;

        task_template_crud::update_stage_for_templates(&mut *tx, template_ids, stage.as_str())
            .await?;

        // 先删操作，再删步骤：提交的步骤 id 以及所属模板下的全部旧步骤
        let mut removed_ops =
            template_step_crud::delete_operations_by_steps(&mut *tx, &step_ids).await?;
        removed_ops +=
            template_step_crud::delete_operations_by_templates(&mut *tx, template_ids).await?;
        let mut removed_steps = template_step_crud::delete_steps_by_ids(&mut *tx, &step_ids).await?;
        removed_steps +=
            template_step_crud::delete_steps_by_templates(&mut *tx, template_ids).await?;

        for step in steps {
            template_step_crud::create_step(&mut *tx, &Self::to_model(step)).await?;
            for (seq, op) in step.operations.iter().enumerate() {
                let model = Self::to_operation_model(op, seq as i64);
                template_step_crud::create_operation(&mut *tx, &model).await?;
            }
        }

        tx.commit().await?;
        debug!(
            removed_steps,
            removed_ops,
            inserted = steps.len(),
            "template steps replaced"
        );
        Ok(())
    }

    pub async fn find_steps_by_template(
        &self,
        template_id: &str,
    ) -> Result<Vec<StoredTemplateStep>, StorageError> {
        let steps = template_step_crud::find_steps_by_template(&self.pool, template_id).await?;
        let step_ids: Vec<String> = steps.iter().map(|s| s.id.clone()).collect();
        let operations = template_step_crud::find_operations_by_steps(&self.pool, &step_ids).await?;

        let mut by_step: HashMap<String, Vec<StoredStepOperation>> = HashMap::new();
        for op in operations {
            by_step
                .entry(op.step_id.clone())
                .or_default()
                .push(Self::to_operation_entity(op));
        }

        Ok(steps
            .into_iter()
            .map(|step| {
                let ops = by_step.remove(&step.id).unwrap_or_default();
                Self::to_entity(step, ops)
            })
            .collect())
    }
}
