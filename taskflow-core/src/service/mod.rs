use async_trait::async_trait;
use taskflow_dto::dto::{
    form::{FormUpsert, TaskTemplateFormDto},
    paging::{PagedResult, SearchQuery},
    step::{StepUpsert, TaskTemplateStepDto},
    template::{TaskTemplateDto, TemplateUpsert},
    user::CurrentUser,
};

use crate::error::AppResult;

pub mod template;
pub use template::TaskTemplateStoreSvc as TaskTemplateSvc;

#[async_trait]
pub trait TaskTemplateService: Send + Sync + 'static {
    /// Create a template, or rename it when `body.id` is set. Returns the id.
    async fn create(&self, body: TemplateUpsert, user: &CurrentUser) -> AppResult<String>;

    /// Replace the form list of every template the batch references.
    async fn create_forms(&self, forms: Vec<FormUpsert>, user: &CurrentUser) -> AppResult<()>;

    /// Replace the step list (with operations) of every referenced template.
    async fn create_steps(&self, steps: Vec<StepUpsert>, user: &CurrentUser) -> AppResult<()>;

    async fn search(&self, query: &SearchQuery) -> AppResult<PagedResult<TaskTemplateDto>>;

    async fn get_template(&self, id: &str) -> AppResult<Option<TaskTemplateDto>>;

    async fn get_forms(&self, template_id: &str) -> AppResult<Vec<TaskTemplateFormDto>>;

    async fn get_steps(&self, template_id: &str) -> AppResult<Vec<TaskTemplateStepDto>>;
}
