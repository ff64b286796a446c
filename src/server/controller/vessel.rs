use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;

use entity::assignment::AssignmentStatus;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        vessel::{CreateVesselDto, OwnerDto, UpdateVesselDto, VesselDto},
    },
    server::{
        controller::util::current_user::current_user,
        data::{assignment::AssignmentRepository, vessel::VesselRepository},
        error::Error,
        model::app::AppState,
    },
};

pub static VESSEL_TAG: &str = "vessels";

#[derive(Deserialize, IntoParams)]
pub struct VesselListQuery {
    /// Embed each vessel's owner.
    #[serde(default)]
    pub include_owner: bool,
    /// Count the crew currently onboard each vessel.
    #[serde(default)]
    pub include_count: bool,
}

/// List the fleet
#[utoipa::path(
    get,
    path = "/api/vessels",
    tag = VESSEL_TAG,
    params(VesselListQuery),
    responses(
        (status = 200, description = "Vessels", body = Vec<VesselDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<VesselListQuery>,
) -> Result<impl IntoResponse, Error> {
    let repository = VesselRepository::new(&state.db);
    let assignment_repo = AssignmentRepository::new(&state.db);

    let mut vessels = Vec::new();

    if query.include_owner {
        for (vessel, owner) in repository.list_with_owner().await? {
            let mut dto = VesselDto::from(vessel);
            dto.owner = owner.map(OwnerDto::from);
            vessels.push(dto);
        }
    } else {
        vessels = repository.list().await?.into_iter().map(VesselDto::from).collect();
    }

    if query.include_count {
        for dto in &mut vessels {
            let onboard = assignment_repo
                .list(Some(dto.id), Some(AssignmentStatus::Onboard))
                .await?;
            dto.crew_onboard = Some(onboard.len() as u64);
        }
    }

    Ok(Json(vessels))
}

/// Register a vessel
#[utoipa::path(
    post,
    path = "/api/vessels",
    tag = VESSEL_TAG,
    request_body = CreateVesselDto,
    responses(
        (status = 201, description = "Vessel created", body = VesselDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Owner not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<CreateVesselDto>,
) -> Result<impl IntoResponse, Error> {
    current_user(&state, &session).await?;

    if let Some(owner_id) = dto.owner_id {
        crate::server::data::owner::OwnerRepository::new(&state.db)
            .get_by_id(owner_id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("Owner {owner_id}")))?;
    }

    let vessel = VesselRepository::new(&state.db).create(&dto).await?;

    Ok((StatusCode::CREATED, Json(VesselDto::from(vessel))))
}

/// Update a vessel
#[utoipa::path(
    put,
    path = "/api/vessels/{id}",
    tag = VESSEL_TAG,
    params(("id" = i32, Path, description = "Vessel ID")),
    request_body = UpdateVesselDto,
    responses(
        (status = 200, description = "Updated vessel", body = VesselDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Vessel not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(dto): Json<UpdateVesselDto>,
) -> Result<impl IntoResponse, Error> {
    current_user(&state, &session).await?;

    let vessel = VesselRepository::new(&state.db)
        .update(id, &dto)
        .await?
        .ok_or_else(|| Error::NotFound(format!("Vessel {id}")))?;

    Ok(Json(VesselDto::from(vessel)))
}

/// Delete a vessel
#[utoipa::path(
    delete,
    path = "/api/vessels/{id}",
    tag = VESSEL_TAG,
    params(("id" = i32, Path, description = "Vessel ID")),
    responses(
        (status = 200, description = "Vessel deleted", body = MessageDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Vessel not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    current_user(&state, &session).await?;

    let result = VesselRepository::new(&state.db).delete(id).await?;

    if result.rows_affected == 0 {
        return Err(Error::NotFound(format!("Vessel {id}")));
    }

    Ok(Json(MessageDto {
        success: true,
        message: "Vessel deleted".to_string(),
    }))
}
