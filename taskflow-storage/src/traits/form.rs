use crate::entities::{task_template::TemplateStage, template_form::StoredTemplateForm};
use crate::error::StorageError;

#[async_trait::async_trait]
pub trait FormStorage: Send + Sync {
    /// In one unit of work: move every template in `template_ids` to
    /// `stage`, delete all of their forms and insert `forms`.
    async fn replace_forms(
        &self,
        template_ids: &[String],
        stage: TemplateStage,
        forms: &[StoredTemplateForm],
    ) -> Result<(), StorageError>;

    /// Forms of one template, ascending by order.
    async fn find_forms_by_template(
        &self,
        template_id: &str,
    ) -> Result<Vec<StoredTemplateForm>, StorageError>;
}
