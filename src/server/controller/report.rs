use axum::{
    extract::{Query, State},
    http::{header, HeaderMap, HeaderValue},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        report::{ContractAlertDto, ExpiringCertificateDto},
    },
    server::{
        error::Error,
        model::app::AppState,
        service::{
            contract::ContractAlertService, expiry::ExpiryReportService, export::ExportService,
        },
    },
};

pub static REPORT_TAG: &str = "reports";

#[derive(Deserialize, IntoParams)]
pub struct ExpiringQuery {
    /// Warning window in days; defaults to 90.
    pub warning_days: Option<i64>,
}

#[derive(Deserialize, IntoParams)]
pub struct ExportQuery {
    /// `crew` or `vessels`.
    #[serde(rename = "type")]
    pub export_type: String,
}

/// List onboard crew near or past their contract length
#[utoipa::path(
    get,
    path = "/api/contracts/alerts",
    tag = REPORT_TAG,
    responses(
        (status = 200, description = "Contract alerts", body = Vec<ContractAlertDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn contract_alerts(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let today = chrono::Utc::now().date_naive();
    let alerts = ContractAlertService::new(&state.db).alerts(today).await?;

    Ok(Json(alerts))
}

/// List certificates expired or expiring inside the warning window
#[utoipa::path(
    get,
    path = "/api/reports/expiring-certificates",
    tag = REPORT_TAG,
    params(ExpiringQuery),
    responses(
        (status = 200, description = "Expiring certificates", body = Vec<ExpiringCertificateDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn expiring_certificates(
    State(state): State<AppState>,
    Query(query): Query<ExpiringQuery>,
) -> Result<impl IntoResponse, Error> {
    let today = chrono::Utc::now().date_naive();
    let rows = ExpiryReportService::new(&state.db)
        .expiring(today, query.warning_days)
        .await?;

    Ok(Json(rows))
}

/// Download the crew or fleet register as CSV
#[utoipa::path(
    get,
    path = "/api/export",
    tag = REPORT_TAG,
    params(ExportQuery),
    responses(
        (status = 200, description = "CSV download", content_type = "text/csv"),
        (status = 400, description = "Unknown export type", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn export(
    State(state): State<AppState>,
    Query(query): Query<ExportQuery>,
) -> Result<impl IntoResponse, Error> {
    let export = ExportService::new(&state.db)
        .export(&query.export_type)
        .await?;

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/csv; charset=utf-8"),
    );
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_str(&format!("attachment; filename=\"{}\"", export.filename))
            .map_err(|err| Error::Validation(format!("Bad export filename: {err}")))?,
    );

    Ok((headers, export.content))
}
