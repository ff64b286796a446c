use axum::{extract::State, response::IntoResponse, Json};

use crate::{
    model::api::ErrorDto,
    server::{
        catalog::{CertificateTypeInfo, RankInfo},
        error::Error,
        model::app::AppState,
    },
};

pub static CATALOG_TAG: &str = "catalog";

/// List the rank table
#[utoipa::path(
    get,
    path = "/api/catalog/ranks",
    tag = CATALOG_TAG,
    responses(
        (status = 200, description = "Ranks", body = Vec<RankInfo>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn ranks(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    Ok(Json(state.catalog.ranks.clone()))
}

/// List the known certificate types
#[utoipa::path(
    get,
    path = "/api/catalog/certificate-types",
    tag = CATALOG_TAG,
    responses(
        (status = 200, description = "Certificate types", body = Vec<CertificateTypeInfo>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn certificate_types(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    Ok(Json(state.catalog.certificate_types.clone()))
}
