//! Error types for the Muster server.
//!
//! One aggregate [`Error`] enum carries every failure a request handler can
//! produce. Domain-specific sub-enums (authentication, configuration) keep
//! their own HTTP mappings; everything else maps through the match in
//! `IntoResponse`: validation failures are 400, missing entities 404, state
//! machine conflicts 409, and anything unexpected a generic 500.

pub mod auth;
pub mod config;

pub use auth::AuthError;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::config::ConfigError};

#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication or authorization error.
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Request payload failed validation (missing fields, bad values,
    /// malformed JSON blobs).
    #[error("{0}")]
    Validation(String),
    /// The referenced entity does not exist.
    #[error("{0} not found")]
    NotFound(String),
    /// The request conflicts with the entity's current state (terminal
    /// application, illegal status transition).
    #[error("{0}")]
    Conflict(String),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Password hashing or verification failure.
    #[error("Password hash error: {0}")]
    PasswordHash(String),
    /// Database error (query failures, connection issues, constraint
    /// violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// CSV serialization error from report exports.
    #[error(transparent)]
    CsvError(#[from] csv::Error),
    /// Internal JSON serialization error (catalog or stored blobs).
    #[error(transparent)]
    JsonError(#[from] serde_json::Error),
    /// Filesystem error while loading a catalog override directory.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::Validation(message) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: message })).into_response()
            }
            Self::NotFound(entity) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: format!("{} not found", entity),
                }),
            )
                .into_response(),
            Self::Conflict(message) => {
                (StatusCode::CONFLICT, Json(ErrorDto { error: message })).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper converting any displayable error into a 500 response with a
/// generic body; the real message only goes to the log.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
