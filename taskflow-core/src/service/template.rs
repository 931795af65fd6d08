use std::sync::Arc;

use async_trait::async_trait;
use taskflow_dto::dto::{
    form::{FormUpsert, TaskTemplateFormDto},
    paging::{PagedResult, SearchQuery, DEFAULT_PAGE_SIZE},
    step::{OperationUpsert, StepUpsert, TaskTemplateStepDto},
    template::{TaskTemplateDto, TemplateUpsert},
    user::CurrentUser,
};
use taskflow_storage::{
    entities::{
        AuditStamp, StoredStepOperation, StoredTaskTemplate, StoredTemplateForm,
        StoredTemplateStep, TemplateStage, UpdateStoredTaskTemplate,
    },
    PersistenceManager,
};
use tracing::{debug, info, warn};

use crate::error::{AppError, AppResult};

pub const EMPTY_NAME_MESSAGE: &str = "template name must not be empty";

#[derive(Clone)]
pub struct TaskTemplateStoreSvc {
    pm: Arc<dyn PersistenceManager>,
    default_page_size: i64,
}

impl TaskTemplateStoreSvc {
    pub fn new(pm: Arc<dyn PersistenceManager>) -> Self {
        Self::with_page_size(pm, DEFAULT_PAGE_SIZE)
    }

    pub fn with_page_size(pm: Arc<dyn PersistenceManager>, default_page_size: i64) -> Self {
        Self {
            pm,
            default_page_size,
        }
    }
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// 非空则沿用调用方给的 id，否则生成
fn id_or_new(id: Option<String>) -> String {
    id.filter(|id| !is_blank(id)).unwrap_or_else(new_id)
}

/// 去重，保留首次出现的顺序
fn distinct<'a>(ids: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for id in ids {
        if !out.iter().any(|seen| seen == id) {
            out.push(id.to_string());
        }
    }
    out
}

fn to_stored_form(form: FormUpsert, order: i64, user: &CurrentUser) -> StoredTemplateForm {
    StoredTemplateForm {
        id: id_or_new(form.id),
        template_id: form.template_id,
        name: form.name,
        order,
        definition: form.definition,
        audit: AuditStamp::new(user.user_id.as_str()),
    }
}

fn to_stored_operation(
    op: OperationUpsert,
    step_id: &str,
    user: &CurrentUser,
) -> StoredStepOperation {
    StoredStepOperation {
        id: id_or_new(op.id),
        step_id: step_id.to_string(),
        name: op.name,
        audit: AuditStamp::new(user.user_id.as_str()),
    }
}

fn to_stored_step(step: StepUpsert, user: &CurrentUser) -> StoredTemplateStep {
    let id = if is_blank(&step.id) { new_id() } else { step.id };
    let operations = step
        .operations
        .into_iter()
        .filter(|op| !is_blank(&op.name))
        .map(|op| to_stored_operation(op, &id, user))
        .collect();

    StoredTemplateStep {
        template_id: step.template_id,
        name: step.name,
        // 设计器传入的是 0 基序号
        order: step.order + 1,
        audit: AuditStamp::new(user.user_id.as_str()),
        operations,
        id,
    }
}

#[async_trait]
impl crate::service::TaskTemplateService for TaskTemplateStoreSvc {
    async fn create(&self, body: TemplateUpsert, user: &CurrentUser) -> AppResult<String> {
        if is_blank(&body.name) {
            return Err(AppError::BusinessRule(EMPTY_NAME_MESSAGE.into()));
        }

        match body.id.filter(|id| !is_blank(id)) {
            Some(id) => {
                let changes = UpdateStoredTaskTemplate {
                    name: Some(body.name),
                    ..Default::default()
                };
                let affected = self.pm.update_template(&id, &changes).await?;
                if affected == 0 {
                    warn!(template_id = %id, "rename skipped: template does not exist");
                } else {
                    info!(template_id = %id, user = %user.user_id, "template renamed");
                }
                Ok(id)
            }
            None => {
                let tpl = StoredTaskTemplate {
                    id: new_id(),
                    name: body.name,
                    stage: TemplateStage::Save,
                    audit: AuditStamp::new(user.user_id.as_str()),
                };
                self.pm.create_template(&tpl).await?;
                info!(template_id = %tpl.id, user = %user.user_id, "template created");
                Ok(tpl.id)
            }
        }
    }

    async fn create_forms(&self, forms: Vec<FormUpsert>, user: &CurrentUser) -> AppResult<()> {
        if forms.is_empty() {
            debug!("create_forms called with an empty batch");
            return Ok(());
        }

        let template_ids = distinct(forms.iter().map(|f| f.template_id.as_str()));
        let rows: Vec<StoredTemplateForm> = forms
            .into_iter()
            .zip(1..)
            .map(|(form, order)| to_stored_form(form, order, user))
            .collect();

        self.pm
            .replace_forms(&template_ids, TemplateStage::DesignForms, &rows)
            .await?;
        info!(
            templates = ?template_ids,
            forms = rows.len(),
            user = %user.user_id,
            "template forms replaced"
        );
        Ok(())
    }

    async fn create_steps(&self, steps: Vec<StepUpsert>, user: &CurrentUser) -> AppResult<()> {
        if steps.is_empty() {
            debug!("create_steps called with an empty batch");
            return Ok(());
        }

        let template_ids = distinct(steps.iter().map(|s| s.template_id.as_str()));
        let rows: Vec<StoredTemplateStep> = steps
            .into_iter()
            .map(|step| to_stored_step(step, user))
            .collect();

        self.pm
            .replace_steps(&template_ids, TemplateStage::DesignSteps, &rows)
            .await?;
        info!(
            templates = ?template_ids,
            steps = rows.len(),
            operations = rows.iter().map(|s| s.operations.len()).sum::<usize>(),
            user = %user.user_id,
            "template steps replaced"
        );
        Ok(())
    }

    async fn search(&self, query: &SearchQuery) -> AppResult<PagedResult<TaskTemplateDto>> {
        let keyword = query.keyword();
        let page = query.page();
        let rows = query.rows(self.default_page_size);

        let total = self.pm.count_templates(keyword).await?;
        let items = self
            .pm
            .find_templates(keyword, rows, query.offset(self.default_page_size))
            .await?
            .into_iter()
            .map(TaskTemplateDto::from)
            .collect();

        debug!(?keyword, page, rows, total, "template search");
        Ok(PagedResult::new(items, total, page, rows))
    }

    async fn get_template(&self, id: &str) -> AppResult<Option<TaskTemplateDto>> {
        if is_blank(id) {
            return Ok(None);
        }
        Ok(self.pm.get_template(id).await?.map(TaskTemplateDto::from))
    }

    async fn get_forms(&self, template_id: &str) -> AppResult<Vec<TaskTemplateFormDto>> {
        let forms = self.pm.find_forms_by_template(template_id).await?;
        Ok(forms.into_iter().map(Into::into).collect())
    }

    async fn get_steps(&self, template_id: &str) -> AppResult<Vec<TaskTemplateStepDto>> {
        let steps = self.pm.find_steps_by_template(template_id).await?;
        Ok(steps.into_iter().map(Into::into).collect())
    }
}
