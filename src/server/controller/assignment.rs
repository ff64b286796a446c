use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use sea_orm::ActiveEnum;
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;

use entity::assignment::AssignmentStatus;

use crate::{
    model::{
        api::ErrorDto,
        assignment::{AssignmentDto, CreateAssignmentDto, ExtendAssignmentDto},
    },
    server::{
        controller::util::current_user::current_user,
        data::{
            assignment::AssignmentRepository, crew::CrewRepository, vessel::VesselRepository,
        },
        error::Error,
        model::app::AppState,
    },
};

pub static ASSIGNMENT_TAG: &str = "assignments";

#[derive(Deserialize, IntoParams)]
pub struct AssignmentListQuery {
    pub vessel_id: Option<i32>,
    /// Filter to one status (`ONBOARD` or `COMPLETED`).
    pub status: Option<String>,
}

/// List assignments, newest sign-on first
#[utoipa::path(
    get,
    path = "/api/assignments",
    tag = ASSIGNMENT_TAG,
    params(AssignmentListQuery),
    responses(
        (status = 200, description = "Assignments", body = Vec<AssignmentDto>),
        (status = 400, description = "Unknown status filter", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<AssignmentListQuery>,
) -> Result<impl IntoResponse, Error> {
    let status = query
        .status
        .as_deref()
        .map(|raw| {
            AssignmentStatus::try_from_value(&raw.to_string())
                .map_err(|_| Error::Validation(format!("Unknown assignment status {raw}")))
        })
        .transpose()?;

    let crew_repo = CrewRepository::new(&state.db);
    let assignments = AssignmentRepository::new(&state.db)
        .list(query.vessel_id, status)
        .await?;

    let mut dtos = Vec::with_capacity(assignments.len());
    for assignment in assignments {
        let crew_name = crew_repo
            .get_by_id(assignment.crew_id)
            .await?
            .map(|crew| crew.full_name);
        dtos.push(AssignmentDto::from_model(assignment, crew_name));
    }

    Ok(Json(dtos))
}

/// Sign a crew member onto a vessel.
///
/// Completes any prior ONBOARD assignment, creates the new one and puts the
/// crew member ONBOARD the vessel.
#[utoipa::path(
    post,
    path = "/api/assignments",
    tag = ASSIGNMENT_TAG,
    request_body = CreateAssignmentDto,
    responses(
        (status = 201, description = "Assignment created", body = AssignmentDto),
        (status = 400, description = "Neither vessel_id nor vessel_name given", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Crew or vessel not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<CreateAssignmentDto>,
) -> Result<impl IntoResponse, Error> {
    let user = current_user(&state, &session).await?;

    let crew_repo = CrewRepository::new(&state.db);
    let crew = crew_repo
        .get_by_id(dto.crew_id)
        .await?
        .ok_or_else(|| Error::NotFound(format!("Crew {}", dto.crew_id)))?;

    let (vessel_id, vessel_name) = match dto.vessel_id {
        Some(vessel_id) => {
            let vessel = VesselRepository::new(&state.db)
                .get_by_id(vessel_id)
                .await?
                .ok_or_else(|| Error::NotFound(format!("Vessel {vessel_id}")))?;
            (Some(vessel_id), vessel.name)
        }
        None => {
            let name = dto.vessel_name.clone().ok_or_else(|| {
                Error::Validation("Either vessel_id or vessel_name is required".to_string())
            })?;
            (None, name)
        }
    };

    let repository = AssignmentRepository::new(&state.db);

    // A crew member holds at most one ONBOARD assignment; a new sign-on
    // closes the old one at the new sign-on date.
    if let Some(previous) = repository.find_onboard_by_crew(crew.id).await? {
        repository.complete(previous, dto.sign_on).await?;
    }

    let rank = dto.rank.unwrap_or_else(|| crew.rank.clone());
    let assignment = repository
        .create_onboard(crew.id, vessel_id, vessel_name.clone(), rank, dto.sign_on)
        .await?;

    let crew_name = crew.full_name.clone();
    crew_repo.set_onboard(crew, &vessel_name).await?;

    tracing::info!(
        crew_id = dto.crew_id,
        vessel = vessel_name,
        by = user.username,
        "crew signed on"
    );

    Ok((
        StatusCode::CREATED,
        Json(AssignmentDto::from_model(assignment, Some(crew_name))),
    ))
}

/// Move an assignment's planned sign-off date
#[utoipa::path(
    patch,
    path = "/api/assignments/{id}/extend",
    tag = ASSIGNMENT_TAG,
    params(("id" = i32, Path, description = "Assignment ID")),
    request_body = ExtendAssignmentDto,
    responses(
        (status = 200, description = "Assignment extended", body = AssignmentDto),
        (status = 400, description = "Sign-off not after sign-on", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Assignment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn extend(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(dto): Json<ExtendAssignmentDto>,
) -> Result<impl IntoResponse, Error> {
    current_user(&state, &session).await?;

    let repository = AssignmentRepository::new(&state.db);
    let assignment = repository
        .get_by_id(id)
        .await?
        .ok_or_else(|| Error::NotFound(format!("Assignment {id}")))?;

    if let Some(sign_on) = assignment.sign_on {
        if dto.new_sign_off <= sign_on {
            return Err(Error::Validation(format!(
                "Sign-off {} must land after sign-on {}",
                dto.new_sign_off, sign_on
            )));
        }
    }

    let crew_name = CrewRepository::new(&state.db)
        .get_by_id(assignment.crew_id)
        .await?
        .map(|crew| crew.full_name);

    let extended = repository.extend(assignment, dto.new_sign_off).await?;

    Ok(Json(AssignmentDto::from_model(extended, crew_name)))
}
