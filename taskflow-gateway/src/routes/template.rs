use axum::{
    extract::{Path, Query, State},
    routing::{get, post, put},
    Json, Router,
};
use http::StatusCode;
use taskflow_core::{AppError, AppResult, TaskTemplateService, TaskTemplateSvc};
use taskflow_dto::dto::{
    form::{FormUpsert, TaskTemplateFormDto},
    paging::{SearchQuery, TemplatePage},
    step::{StepUpsert, TaskTemplateStepDto},
    template::{TaskTemplateDto, TemplateCreated, TemplateUpsert},
};

use crate::{app_state::AppState, extract::ActingUser};

pub fn router(svc: TaskTemplateSvc) -> Router<AppState> {
    Router::new()
        .route("/", post(create).get(search))
        .route("/forms", put(replace_forms))
        .route("/steps", put(replace_steps))
        .route("/:id", get(get_one))
        .route("/:id/forms", get(get_forms))
        .route("/:id/steps", get(get_steps))
        .with_state(svc)
}

/// 创建模板，或按 id 重命名
#[utoipa::path(
    post,
    path = "/v1/templates",
    request_body = TemplateUpsert,
    params(
        ("x-user-id" = Option<String>, Header, description = "操作用户 ID")
    ),
    responses(
        (status = 200, description = "模板 ID（新建或重命名）", body = TemplateCreated),
        (status = 400, description = "模板名称为空"),
        (status = 500, description = "服务器内部错误")
    ),
    tag = "templates"
)]
pub async fn create(
    State(svc): State<TaskTemplateSvc>,
    ActingUser(user): ActingUser,
    Json(body): Json<TemplateUpsert>,
) -> AppResult<Json<TemplateCreated>> {
    let id = svc.create(body, &user).await?;
    Ok(Json(TemplateCreated { id }))
}

/// 分页搜索模板，按创建时间倒序
#[utoipa::path(
    get,
    path = "/v1/templates",
    params(SearchQuery),
    responses(
        (status = 200, description = "模板分页结果", body = TemplatePage),
        (status = 500, description = "服务器内部错误")
    ),
    tag = "templates"
)]
pub async fn search(
    State(svc): State<TaskTemplateSvc>,
    Query(query): Query<SearchQuery>,
) -> AppResult<Json<TemplatePage>> {
    Ok(Json(svc.search(&query).await?))
}

/// 获取模板详情
#[utoipa::path(
    get,
    path = "/v1/templates/{id}",
    params(
        ("id" = String, Path, description = "模板 ID")
    ),
    responses(
        (status = 200, description = "模板详情", body = TaskTemplateDto),
        (status = 404, description = "模板不存在"),
        (status = 500, description = "服务器内部错误")
    ),
    tag = "templates"
)]
pub async fn get_one(
    State(svc): State<TaskTemplateSvc>,
    Path(id): Path<String>,
) -> AppResult<Json<TaskTemplateDto>> {
    svc.get_template(&id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("template {}", id)))
}

/// 整体替换表单列表
#[utoipa::path(
    put,
    path = "/v1/templates/forms",
    request_body = Vec<FormUpsert>,
    params(
        ("x-user-id" = Option<String>, Header, description = "操作用户 ID")
    ),
    responses(
        (status = 204, description = "表单已替换"),
        (status = 500, description = "服务器内部错误")
    ),
    tag = "templates"
)]
pub async fn replace_forms(
    State(svc): State<TaskTemplateSvc>,
    ActingUser(user): ActingUser,
    Json(forms): Json<Vec<FormUpsert>>,
) -> AppResult<StatusCode> {
    svc.create_forms(forms, &user).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// 获取模板表单，按序号升序
#[utoipa::path(
    get,
    path = "/v1/templates/{id}/forms",
    params(
        ("id" = String, Path, description = "模板 ID")
    ),
    responses(
        (status = 200, description = "表单列表", body = Vec<TaskTemplateFormDto>),
        (status = 500, description = "服务器内部错误")
    ),
    tag = "templates"
)]
pub async fn get_forms(
    State(svc): State<TaskTemplateSvc>,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<TaskTemplateFormDto>>> {
    Ok(Json(svc.get_forms(&id).await?))
}

/// 整体替换步骤及其操作
#[utoipa::path(
    put,
    path = "/v1/templates/steps",
    request_body = Vec<StepUpsert>,
    params(
        ("x-user-id" = Option<String>, Header, description = "操作用户 ID")
    ),
    responses(
        (status = 204, description = "步骤已替换"),
        (status = 500, description = "服务器内部错误")
    ),
    tag = "templates"
)]
pub async fn replace_steps(
    State(svc): State<TaskTemplateSvc>,
    ActingUser(user): ActingUser,
    Json(steps): Json<Vec<StepUpsert>>,
) -> AppResult<StatusCode> {
    svc.create_steps(steps, &user).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// 获取模板步骤（含操作），按序号升序
#[utoipa::path(
    get,
    path = "/v1/templates/{id}/steps",
    params(
        ("id" = String, Path, description = "模板 ID")
    ),
    responses(
        (status = 200, description = "步骤列表", body = Vec<TaskTemplateStepDto>),
        (status = 500, description = "服务器内部错误")
    ),
    tag = "templates"
)]
pub async fn get_steps(
    State(svc): State<TaskTemplateSvc>,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<TaskTemplateStepDto>>> {
    Ok(Json(svc.get_steps(&id).await?))
}
