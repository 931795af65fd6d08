use axum::{routing::get, Json, Router};
use taskflow_core::TaskTemplateSvc;
use taskflow_dto::dto;
use utoipa::OpenApi;

use crate::app_state::AppState;

pub mod template;

#[derive(OpenApi)]
#[openapi(
    paths(
        template::create,
        template::search,
        template::get_one,
        template::replace_forms,
        template::get_forms,
        template::replace_steps,
        template::get_steps,
    ),
    components(
        schemas(
            dto::template::TemplateUpsert,
            dto::template::TemplateCreated,
            dto::template::TaskTemplateDto,
            dto::form::FormUpsert,
            dto::form::TaskTemplateFormDto,
            dto::step::StepUpsert,
            dto::step::OperationUpsert,
            dto::step::TaskTemplateStepDto,
            dto::step::StepOperationDto,
            dto::paging::TemplatePage,
        )
    ),
    tags(
        (name = "templates", description = "任务模板设计"),
    )
)]
pub struct ApiDoc;

pub fn new(state: AppState) -> Router {
    let tpl_svc =
        TaskTemplateSvc::with_page_size(state.persist.clone(), state.config.default_page_size);

    Router::new()
        .nest("/v1/templates", template::router(tpl_svc))
        .route("/v1/healthz", get(|| async { "ok" }))
        .route("/api-docs/openapi.json", get(openapi_json))
        .with_state(state)
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
