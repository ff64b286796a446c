use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        form::{
            CreateFormSubmissionDto, FormCategoryDto, FormSubmissionDto, FormTemplateDto,
            GenerateFormDto, GeneratedFormDto,
        },
    },
    server::{
        controller::util::current_user::current_user,
        error::Error,
        model::app::AppState,
        service::form::{forms_by_category, FormService},
    },
};

pub static FORM_TAG: &str = "forms";

#[derive(Deserialize, IntoParams)]
pub struct SubmissionListQuery {
    pub crew_id: Option<i32>,
}

/// List the form catalog grouped by department
#[utoipa::path(
    get,
    path = "/api/forms/list",
    tag = FORM_TAG,
    responses(
        (status = 200, description = "Forms by category", body = Vec<FormCategoryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    Ok(Json(forms_by_category(&state.catalog)))
}

/// Get a form template with its field schema
#[utoipa::path(
    get,
    path = "/api/forms/{code}",
    tag = FORM_TAG,
    params(("code" = String, Path, description = "Form code, e.g. HGF-CR-02")),
    responses(
        (status = 200, description = "Form template", body = FormTemplateDto),
        (status = 404, description = "Template not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn template(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let template = FormService::new(&state.db).template(&code).await?;

    Ok(Json(template))
}

/// Resolve a crew member's data into a form's placeholder map
#[utoipa::path(
    post,
    path = "/api/forms/generate",
    tag = FORM_TAG,
    request_body = GenerateFormDto,
    responses(
        (status = 200, description = "Resolved placeholder values", body = GeneratedFormDto),
        (status = 404, description = "Template or crew not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn generate(
    State(state): State<AppState>,
    Json(dto): Json<GenerateFormDto>,
) -> Result<impl IntoResponse, Error> {
    let generated = FormService::new(&state.db).generate(dto).await?;

    Ok(Json(generated))
}

/// List form submissions
#[utoipa::path(
    get,
    path = "/api/forms/submissions",
    tag = FORM_TAG,
    params(SubmissionListQuery),
    responses(
        (status = 200, description = "Submissions", body = Vec<FormSubmissionDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn submissions(
    State(state): State<AppState>,
    Query(query): Query<SubmissionListQuery>,
) -> Result<impl IntoResponse, Error> {
    let submissions = FormService::new(&state.db)
        .list_submissions(query.crew_id)
        .await?;

    Ok(Json(submissions))
}

/// Store a filled form, validated against the template's field schema
#[utoipa::path(
    post,
    path = "/api/forms/submissions",
    tag = FORM_TAG,
    request_body = CreateFormSubmissionDto,
    responses(
        (status = 201, description = "Submission stored", body = FormSubmissionDto),
        (status = 400, description = "Data does not match the field schema", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Template or crew not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn submit(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<CreateFormSubmissionDto>,
) -> Result<impl IntoResponse, Error> {
    current_user(&state, &session).await?;

    let submission = FormService::new(&state.db).create_submission(dto).await?;

    Ok((StatusCode::CREATED, Json(submission)))
}
