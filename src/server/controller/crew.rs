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

use entity::crew::CrewStatus;

use crate::{
    model::{
        api::ErrorDto,
        certificate::CertificateDto,
        crew::{
            CreateCrewDto, CrewDto, CrewStatusChangeDto, CrewStatusChangedDto, CrewTransitionsDto,
            UpdateCrewDto,
        },
    },
    server::{
        controller::util::current_user::current_user,
        data::{certificate::CertificateRepository, crew::CrewRepository},
        error::Error,
        model::app::AppState,
        service::{
            crew_status::CrewStatusService,
            expiry::{classify, DEFAULT_WARNING_DAYS},
        },
    },
};

pub static CREW_TAG: &str = "crew";

#[derive(Deserialize, IntoParams)]
pub struct CrewListQuery {
    /// Filter to one status (e.g. `STANDBY`).
    pub status: Option<String>,
    /// Case-insensitive match on crew code or full name.
    pub search: Option<String>,
}

#[derive(Deserialize, IntoParams)]
pub struct CrewSearchQuery {
    pub q: String,
}

#[derive(Deserialize, IntoParams)]
pub struct CertificateListQuery {
    /// Warning window in days; defaults to 60.
    pub warning_days: Option<i64>,
}

fn parse_status(status: Option<&str>) -> Result<Option<CrewStatus>, Error> {
    status
        .map(|raw| {
            CrewStatus::try_from_value(&raw.to_string())
                .map_err(|_| Error::Validation(format!("Unknown crew status {raw}")))
        })
        .transpose()
}

async fn crew_list(state: &AppState, query: CrewListQuery) -> Result<Vec<CrewDto>, Error> {
    let status = parse_status(query.status.as_deref())?;

    let crew = CrewRepository::new(&state.db)
        .list(status, query.search.as_deref())
        .await?;

    Ok(crew.into_iter().map(CrewDto::from).collect())
}

/// List crew, optionally filtered by status or a search term
#[utoipa::path(
    get,
    path = "/api/crew",
    tag = CREW_TAG,
    params(CrewListQuery),
    responses(
        (status = 200, description = "Crew list", body = Vec<CrewDto>),
        (status = 400, description = "Unknown status filter", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<CrewListQuery>,
) -> Result<impl IntoResponse, Error> {
    Ok(Json(crew_list(&state, query).await?))
}

/// List crew (alias of `GET /api/crew`)
#[utoipa::path(
    get,
    path = "/api/crew/list",
    tag = CREW_TAG,
    params(CrewListQuery),
    responses(
        (status = 200, description = "Crew list", body = Vec<CrewDto>),
        (status = 400, description = "Unknown status filter", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_alias(
    State(state): State<AppState>,
    Query(query): Query<CrewListQuery>,
) -> Result<impl IntoResponse, Error> {
    Ok(Json(crew_list(&state, query).await?))
}

/// Search crew by code or name
#[utoipa::path(
    get,
    path = "/api/crew/search",
    tag = CREW_TAG,
    params(CrewSearchQuery),
    responses(
        (status = 200, description = "Matching crew", body = Vec<CrewDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<CrewSearchQuery>,
) -> Result<impl IntoResponse, Error> {
    let crew = CrewRepository::new(&state.db)
        .list(None, Some(&query.q))
        .await?;

    Ok(Json(crew.into_iter().map(CrewDto::from).collect::<Vec<_>>()))
}

/// Register a new crew member (starts as APPLICANT)
#[utoipa::path(
    post,
    path = "/api/crew",
    tag = CREW_TAG,
    request_body = CreateCrewDto,
    responses(
        (status = 201, description = "Crew member created", body = CrewDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 409, description = "Crew code already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<CreateCrewDto>,
) -> Result<impl IntoResponse, Error> {
    current_user(&state, &session).await?;

    let repository = CrewRepository::new(&state.db);

    if repository.get_by_code(&dto.crew_code).await?.is_some() {
        return Err(Error::Conflict(format!(
            "Crew code {} already taken",
            dto.crew_code
        )));
    }

    let crew = repository.create(&dto).await?;

    Ok((StatusCode::CREATED, Json(CrewDto::from(crew))))
}

/// Get one crew member
#[utoipa::path(
    get,
    path = "/api/crew/{id}",
    tag = CREW_TAG,
    params(("id" = i32, Path, description = "Crew ID")),
    responses(
        (status = 200, description = "Crew member", body = CrewDto),
        (status = 404, description = "Crew not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let crew = CrewRepository::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| Error::NotFound(format!("Crew {id}")))?;

    Ok(Json(CrewDto::from(crew)))
}

/// Update a crew member's profile fields
#[utoipa::path(
    put,
    path = "/api/crew/{id}",
    tag = CREW_TAG,
    params(("id" = i32, Path, description = "Crew ID")),
    request_body = UpdateCrewDto,
    responses(
        (status = 200, description = "Updated crew member", body = CrewDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Crew not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(dto): Json<UpdateCrewDto>,
) -> Result<impl IntoResponse, Error> {
    current_user(&state, &session).await?;

    let crew = CrewRepository::new(&state.db)
        .update(id, &dto)
        .await?
        .ok_or_else(|| Error::NotFound(format!("Crew {id}")))?;

    Ok(Json(CrewDto::from(crew)))
}

/// List a crew member's certificates with expiry classification
#[utoipa::path(
    get,
    path = "/api/crew/{id}/certificates",
    tag = CREW_TAG,
    params(("id" = i32, Path, description = "Crew ID"), CertificateListQuery),
    responses(
        (status = 200, description = "Certificates", body = Vec<CertificateDto>),
        (status = 404, description = "Crew not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn certificates(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(query): Query<CertificateListQuery>,
) -> Result<impl IntoResponse, Error> {
    CrewRepository::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| Error::NotFound(format!("Crew {id}")))?;

    let warning_days = query.warning_days.unwrap_or(DEFAULT_WARNING_DAYS);
    let today = chrono::Utc::now().date_naive();

    let certificates = CertificateRepository::new(&state.db)
        .list(Some(id))
        .await?
        .into_iter()
        .map(|cert| {
            let alert = classify(cert.expiry_date, today, warning_days);
            CertificateDto::from_model(cert, alert)
        })
        .collect::<Vec<_>>();

    Ok(Json(certificates))
}

/// Get the status transitions available to the current user
#[utoipa::path(
    get,
    path = "/api/crew/{id}/status",
    tag = CREW_TAG,
    params(("id" = i32, Path, description = "Crew ID")),
    responses(
        (status = 200, description = "Available transitions", body = CrewTransitionsDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Crew not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn transitions(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = current_user(&state, &session).await?;

    let transitions = CrewStatusService::new(&state.db).transitions(id, &user).await?;

    Ok(Json(transitions))
}

/// Move a crew member through the status machine
#[utoipa::path(
    patch,
    path = "/api/crew/{id}/status",
    tag = CREW_TAG,
    params(("id" = i32, Path, description = "Crew ID")),
    request_body = CrewStatusChangeDto,
    responses(
        (status = 200, description = "Status changed", body = CrewStatusChangedDto),
        (status = 400, description = "Unknown status", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Role may not make this transition", body = ErrorDto),
        (status = 404, description = "Crew not found", body = ErrorDto),
        (status = 409, description = "Illegal transition", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn change_status(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(dto): Json<CrewStatusChangeDto>,
) -> Result<impl IntoResponse, Error> {
    let user = current_user(&state, &session).await?;

    let result = CrewStatusService::new(&state.db)
        .change_status(id, &user, dto)
        .await?;

    Ok(Json(result))
}
