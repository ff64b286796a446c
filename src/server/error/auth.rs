use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("No user ID present in session")]
    NotLoggedIn,
    #[error("User ID {0:?} not found in database despite having an active session")]
    UserNotInDatabase(i32),
    #[error("Invalid username or password")]
    InvalidCredentials,
    #[error("Account is deactivated")]
    AccountDisabled,
    #[error("Role {role} may not {action}")]
    Forbidden { role: String, action: String },
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::NotLoggedIn => {
                tracing::debug!("{}", Self::NotLoggedIn);

                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto {
                        error: "Unauthorized".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::UserNotInDatabase(user_id) => {
                tracing::debug!(user_id = %user_id, "{}", self);

                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto {
                        error: "User not found".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::InvalidCredentials => {
                tracing::debug!("{}", Self::InvalidCredentials);

                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto {
                        error: "Invalid username or password".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::AccountDisabled => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "Account is deactivated".to_string(),
                }),
            )
                .into_response(),
            Self::Forbidden { ref role, ref action } => {
                tracing::debug!(role = %role, action = %action, "forbidden");

                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto {
                        error: self.to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
