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
        application::{
            ApplicationDto, ApprovalRequestDto, ApprovalResultDto, ApprovalStatusDto,
            CreateApplicationDto,
        },
    },
    server::{
        controller::util::current_user::current_user, error::Error, model::app::AppState,
        service::approval::ApprovalService,
    },
};

pub static APPLICATION_TAG: &str = "applications";

#[derive(Deserialize, IntoParams)]
pub struct ApplicationListQuery {
    /// Filter to one status (e.g. `SHORTLISTED`).
    pub status: Option<String>,
}

/// List employment applications
#[utoipa::path(
    get,
    path = "/api/applications",
    tag = APPLICATION_TAG,
    params(ApplicationListQuery),
    responses(
        (status = 200, description = "Applications", body = Vec<ApplicationDto>),
        (status = 400, description = "Unknown status filter", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ApplicationListQuery>,
) -> Result<impl IntoResponse, Error> {
    let applications = ApprovalService::new(&state.db)
        .list(query.status.as_deref())
        .await?;

    Ok(Json(applications))
}

/// File an employment application for an existing crew member
#[utoipa::path(
    post,
    path = "/api/applications",
    tag = APPLICATION_TAG,
    request_body = CreateApplicationDto,
    responses(
        (status = 201, description = "Application filed", body = ApplicationDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Crew not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<CreateApplicationDto>,
) -> Result<impl IntoResponse, Error> {
    current_user(&state, &session).await?;

    let application = ApprovalService::new(&state.db).create(dto).await?;

    Ok((StatusCode::CREATED, Json(application)))
}

/// Get one application
#[utoipa::path(
    get,
    path = "/api/applications/{id}",
    tag = APPLICATION_TAG,
    params(("id" = i32, Path, description = "Application ID")),
    responses(
        (status = 200, description = "Application", body = ApplicationDto),
        (status = 404, description = "Application not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let application = ApprovalService::new(&state.db).get(id).await?;

    Ok(Json(application))
}

/// The approval view: the four-slot chain, audit trail and whether the
/// current user can act
#[utoipa::path(
    get,
    path = "/api/applications/{id}/approve",
    tag = APPLICATION_TAG,
    params(("id" = i32, Path, description = "Application ID")),
    responses(
        (status = 200, description = "Approval status", body = ApprovalStatusDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Application not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn approval_status(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = current_user(&state, &session).await?;

    let status = ApprovalService::new(&state.db).status(id, &user).await?;

    Ok(Json(status))
}

/// Decide the pending approval level as the current user
#[utoipa::path(
    post,
    path = "/api/applications/{id}/approve",
    tag = APPLICATION_TAG,
    params(("id" = i32, Path, description = "Application ID")),
    request_body = ApprovalRequestDto,
    responses(
        (status = 200, description = "Decision recorded", body = ApprovalResultDto),
        (status = 400, description = "Unknown action", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Role does not match the pending level", body = ErrorDto),
        (status = 404, description = "Application not found", body = ErrorDto),
        (status = 409, description = "Application already settled", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn approve(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(dto): Json<ApprovalRequestDto>,
) -> Result<impl IntoResponse, Error> {
    let user = current_user(&state, &session).await?;

    let result = ApprovalService::new(&state.db).act(id, &user, dto).await?;

    Ok(Json(result))
}

#[cfg(test)]
mod tests {
    mod approve_tests {
        use axum::extract::{Path, State};
        use axum::Json;
        use entity::crew::CrewStatus;
        use entity::employment_application::ApplicationStatus;
        use entity::staff_user::StaffRole;
        use muster_test_utils::prelude::*;

        use crate::model::application::ApprovalRequestDto;
        use crate::server::controller::application::approve;
        use crate::server::error::Error;
        use crate::server::model::session::SessionUserId;

        /// Expect an anonymous approval attempt to fail 401
        #[tokio::test]
        async fn test_approve_requires_login() -> Result<(), TestError> {
            let test = test_setup_with_staff_tables!()?;

            let crew =
                fixtures::crew::create_crew(&test.state.db, "HGF-0001", CrewStatus::Applicant)
                    .await?;
            let application = fixtures::application::create_application(
                &test.state.db,
                crew.id,
                ApplicationStatus::Applied,
                1,
            )
            .await?;

            let result = approve(
                State(test.state()),
                test.session.clone(),
                Path(application.id),
                Json(ApprovalRequestDto {
                    action: "APPROVED".to_string(),
                    comments: None,
                }),
            )
            .await;

            assert!(matches!(result, Err(Error::AuthError(_))));

            Ok(())
        }

        /// Expect the logged-in crewing manager to move level 1 forward
        #[tokio::test]
        async fn test_approve_as_crewing_manager() -> Result<(), TestError> {
            let test = test_setup_with_staff_tables!()?;

            let user = fixtures::staff::create_staff_user(
                &test.state.db,
                "crewing",
                StaffRole::CrewingManager,
            )
            .await?;
            SessionUserId::insert(&test.session, user.id).await.unwrap();

            let crew =
                fixtures::crew::create_crew(&test.state.db, "HGF-0001", CrewStatus::Applicant)
                    .await?;
            let application = fixtures::application::create_application(
                &test.state.db,
                crew.id,
                ApplicationStatus::Applied,
                1,
            )
            .await?;

            let result = approve(
                State(test.state()),
                test.session.clone(),
                Path(application.id),
                Json(ApprovalRequestDto {
                    action: "APPROVED".to_string(),
                    comments: Some("Strong references".to_string()),
                }),
            )
            .await;

            assert!(result.is_ok());

            Ok(())
        }
    }
}
