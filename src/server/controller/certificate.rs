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
        certificate::{CertificateDto, CreateCertificateDto, UpdateCertificateDto},
    },
    server::{
        controller::util::current_user::current_user,
        data::{certificate::CertificateRepository, crew::CrewRepository},
        error::Error,
        model::app::AppState,
        service::expiry::{classify, DEFAULT_WARNING_DAYS},
    },
};

pub static CERTIFICATE_TAG: &str = "certificates";

#[derive(Deserialize, IntoParams)]
pub struct CertificateQuery {
    pub crew_id: Option<i32>,
    /// Warning window in days; defaults to 60.
    pub warning_days: Option<i64>,
}

#[derive(Deserialize, IntoParams)]
pub struct CertificateIdQuery {
    pub id: i32,
}

/// List certificates with expiry classification
#[utoipa::path(
    get,
    path = "/api/certificates",
    tag = CERTIFICATE_TAG,
    params(CertificateQuery),
    responses(
        (status = 200, description = "Certificates", body = Vec<CertificateDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<CertificateQuery>,
) -> Result<impl IntoResponse, Error> {
    let warning_days = query.warning_days.unwrap_or(DEFAULT_WARNING_DAYS);
    let today = chrono::Utc::now().date_naive();

    let certificates = CertificateRepository::new(&state.db)
        .list(query.crew_id)
        .await?
        .into_iter()
        .map(|cert| {
            let alert = classify(cert.expiry_date, today, warning_days);
            CertificateDto::from_model(cert, alert)
        })
        .collect::<Vec<_>>();

    Ok(Json(certificates))
}

/// Record a certificate for a crew member
#[utoipa::path(
    post,
    path = "/api/certificates",
    tag = CERTIFICATE_TAG,
    request_body = CreateCertificateDto,
    responses(
        (status = 201, description = "Certificate recorded", body = CertificateDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Crew not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<CreateCertificateDto>,
) -> Result<impl IntoResponse, Error> {
    current_user(&state, &session).await?;

    CrewRepository::new(&state.db)
        .get_by_id(dto.crew_id)
        .await?
        .ok_or_else(|| Error::NotFound(format!("Crew {}", dto.crew_id)))?;

    let certificate = CertificateRepository::new(&state.db).create(&dto).await?;

    let today = chrono::Utc::now().date_naive();
    let alert = classify(certificate.expiry_date, today, DEFAULT_WARNING_DAYS);

    Ok((
        StatusCode::CREATED,
        Json(CertificateDto::from_model(certificate, alert)),
    ))
}

/// Update a certificate; the target row is the body's `id`
#[utoipa::path(
    put,
    path = "/api/certificates",
    tag = CERTIFICATE_TAG,
    request_body = UpdateCertificateDto,
    responses(
        (status = 200, description = "Updated certificate", body = CertificateDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Certificate not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<UpdateCertificateDto>,
) -> Result<impl IntoResponse, Error> {
    current_user(&state, &session).await?;

    let certificate = CertificateRepository::new(&state.db)
        .update(&dto)
        .await?
        .ok_or_else(|| Error::NotFound(format!("Certificate {}", dto.id)))?;

    let today = chrono::Utc::now().date_naive();
    let alert = classify(certificate.expiry_date, today, DEFAULT_WARNING_DAYS);

    Ok(Json(CertificateDto::from_model(certificate, alert)))
}

/// Delete a certificate by query-param id
#[utoipa::path(
    delete,
    path = "/api/certificates",
    tag = CERTIFICATE_TAG,
    params(CertificateIdQuery),
    responses(
        (status = 200, description = "Certificate deleted", body = MessageDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Certificate not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<CertificateIdQuery>,
) -> Result<impl IntoResponse, Error> {
    current_user(&state, &session).await?;

    let result = CertificateRepository::new(&state.db).delete(query.id).await?;

    if result.rows_affected == 0 {
        return Err(Error::NotFound(format!("Certificate {}", query.id)));
    }

    Ok(Json(MessageDto {
        success: true,
        message: "Certificate deleted".to_string(),
    }))
}
