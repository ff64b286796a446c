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
        document::{
            CreateDocumentDto, DocumentActionDto, DocumentDetailDto, ManagedDocumentDto,
            ReviseDocumentDto,
        },
    },
    server::{
        controller::util::current_user::current_user, error::Error, model::app::AppState,
        service::document::DocumentService,
    },
};

pub static DOCUMENT_TAG: &str = "documents";

#[derive(Deserialize, IntoParams)]
pub struct DocumentListQuery {
    /// Filter to one status (e.g. `PENDING_APPROVAL`).
    pub status: Option<String>,
    pub category: Option<String>,
}

/// List controlled documents
#[utoipa::path(
    get,
    path = "/api/documents",
    tag = DOCUMENT_TAG,
    params(DocumentListQuery),
    responses(
        (status = 200, description = "Documents", body = Vec<ManagedDocumentDto>),
        (status = 400, description = "Unknown status filter", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<DocumentListQuery>,
) -> Result<impl IntoResponse, Error> {
    let documents = DocumentService::new(&state.db)
        .list(query.status.as_deref(), query.category.as_deref())
        .await?;

    Ok(Json(documents))
}

/// Register a controlled document as DRAFT
#[utoipa::path(
    post,
    path = "/api/documents",
    tag = DOCUMENT_TAG,
    request_body = CreateDocumentDto,
    responses(
        (status = 201, description = "Document registered", body = ManagedDocumentDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 409, description = "Document code already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<CreateDocumentDto>,
) -> Result<impl IntoResponse, Error> {
    let user = current_user(&state, &session).await?;

    let document = DocumentService::new(&state.db).create(dto, &user).await?;

    Ok((StatusCode::CREATED, Json(document)))
}

/// Get a document with its revision trail
#[utoipa::path(
    get,
    path = "/api/documents/{id}",
    tag = DOCUMENT_TAG,
    params(("id" = i32, Path, description = "Document ID")),
    responses(
        (status = 200, description = "Document detail", body = DocumentDetailDto),
        (status = 404, description = "Document not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let detail = DocumentService::new(&state.db).get(id).await?;

    Ok(Json(detail))
}

/// Review or approve a document as the current user
#[utoipa::path(
    post,
    path = "/api/documents/{id}/approve",
    tag = DOCUMENT_TAG,
    params(("id" = i32, Path, description = "Document ID")),
    request_body = DocumentActionDto,
    responses(
        (status = 200, description = "Document moved", body = ManagedDocumentDto),
        (status = 400, description = "Unknown action", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Role may not act at this step", body = ErrorDto),
        (status = 404, description = "Document not found", body = ErrorDto),
        (status = 409, description = "Document not awaiting action", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn approve(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(dto): Json<DocumentActionDto>,
) -> Result<impl IntoResponse, Error> {
    let user = current_user(&state, &session).await?;

    let document = DocumentService::new(&state.db).act(id, &user, dto).await?;

    Ok(Json(document))
}

/// Open a new revision of an APPROVED document
#[utoipa::path(
    post,
    path = "/api/documents/{id}/revise",
    tag = DOCUMENT_TAG,
    params(("id" = i32, Path, description = "Document ID")),
    request_body = ReviseDocumentDto,
    responses(
        (status = 200, description = "Revision opened", body = ManagedDocumentDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Document not found", body = ErrorDto),
        (status = 409, description = "Document not APPROVED", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn revise(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(dto): Json<ReviseDocumentDto>,
) -> Result<impl IntoResponse, Error> {
    let user = current_user(&state, &session).await?;

    let document = DocumentService::new(&state.db).revise(id, &user, dto).await?;

    Ok(Json(document))
}
