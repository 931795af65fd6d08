use crate::entities::{task_template::TemplateStage, template_step::StoredTemplateStep};
use crate::error::StorageError;

#[async_trait::async_trait]
pub trait StepStorage: Send + Sync {
    /// In one unit of work: move every template in `template_ids` to
    /// `stage`, delete the steps (and their operations) that either carry
    /// one of the submitted step ids or belong to one of the templates,
    /// then insert `steps` with their operations.
    async fn replace_steps(
        &self,
        template_ids: &[String],
        stage: TemplateStage,
        steps: &[StoredTemplateStep],
    ) -> Result<(), StorageError>;

    /// Steps of one template, ascending by order, operations included.
    async fn find_steps_by_template(
        &self,
        template_id: &str,
    ) -> Result<Vec<StoredTemplateStep>, StorageError>;
}
