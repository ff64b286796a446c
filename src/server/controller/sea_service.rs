use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        sea_service::{CreateSeaServiceDto, SeaServiceDto, UpdateSeaServiceDto},
    },
    server::{
        controller::util::current_user::current_user,
        data::{crew::CrewRepository, sea_service::SeaServiceRepository},
        error::Error,
        model::app::AppState,
    },
};

pub static SEA_SERVICE_TAG: &str = "sea-service";

#[derive(Deserialize, IntoParams)]
pub struct SeaServiceListQuery {
    pub crew_id: Option<i32>,
}

#[derive(Deserialize, IntoParams)]
pub struct SeaServiceIdQuery {
    pub id: i32,
}

/// List sea-service history, newest sign-on first
#[utoipa::path(
    get,
    path = "/api/sea-service",
    tag = SEA_SERVICE_TAG,
    params(SeaServiceListQuery),
    responses(
        (status = 200, description = "Sea-service records", body = Vec<SeaServiceDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<SeaServiceListQuery>,
) -> Result<impl IntoResponse, Error> {
    let records = SeaServiceRepository::new(&state.db)
        .list(query.crew_id)
        .await?
        .into_iter()
        .map(SeaServiceDto::from)
        .collect::<Vec<_>>();

    Ok(Json(records))
}

/// Record prior sea service for a crew member
#[utoipa::path(
    post,
    path = "/api/sea-service",
    tag = SEA_SERVICE_TAG,
    request_body = CreateSeaServiceDto,
    responses(
        (status = 201, description = "Record created", body = SeaServiceDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Crew not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<CreateSeaServiceDto>,
) -> Result<impl IntoResponse, Error> {
    current_user(&state, &session).await?;

    CrewRepository::new(&state.db)
        .get_by_id(dto.crew_id)
        .await?
        .ok_or_else(|| Error::NotFound(format!("Crew {}", dto.crew_id)))?;

    let record = SeaServiceRepository::new(&state.db).create(&dto).await?;

    Ok((StatusCode::CREATED, Json(SeaServiceDto::from(record))))
}

/// Update a sea-service record; the target row is the body's `id`
#[utoipa::path(
    put,
    path = "/api/sea-service",
    tag = SEA_SERVICE_TAG,
    request_body = UpdateSeaServiceDto,
    responses(
        (status = 200, description = "Updated record", body = SeaServiceDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Record not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<UpdateSeaServiceDto>,
) -> Result<impl IntoResponse, Error> {
    current_user(&state, &session).await?;

    let record = SeaServiceRepository::new(&state.db)
        .update(&dto)
        .await?
        .ok_or_else(|| Error::NotFound(format!("Sea-service record {}", dto.id)))?;

    Ok(Json(SeaServiceDto::from(record)))
}

/// Delete a sea-service record by query-param id
#[utoipa::path(
    delete,
    path = "/api/sea-service",
    tag = SEA_SERVICE_TAG,
    params(SeaServiceIdQuery),
    responses(
        (status = 200, description = "Record deleted", body = MessageDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Record not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<SeaServiceIdQuery>,
) -> Result<impl IntoResponse, Error> {
    current_user(&state, &session).await?;

    let result = SeaServiceRepository::new(&state.db).delete(query.id).await?;

    if result.rows_affected == 0 {
        return Err(Error::NotFound(format!("Sea-service record {}", query.id)));
    }

    Ok(Json(MessageDto {
        success: true,
        message: "Sea-service record deleted".to_string(),
    }))
}
