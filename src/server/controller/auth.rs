use axum::{extract::State, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        auth::{LoginDto, StaffUserDto},
    },
    server::{
        controller::util::current_user::current_user,
        error::Error,
        model::{app::AppState, session::SessionUserId},
        service::auth::AuthService,
    },
};

pub static AUTH_TAG: &str = "auth";

/// Log in with username and password
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = StaffUserDto),
        (status = 401, description = "Invalid username or password", body = ErrorDto),
        (status = 403, description = "Account is deactivated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<LoginDto>,
) -> Result<impl IntoResponse, Error> {
    let user = AuthService::new(&state.db)
        .login(&dto.username, &dto.password)
        .await?;

    SessionUserId::insert(&session, user.id).await?;

    tracing::info!(username = user.username, "staff user logged in");

    Ok(Json(StaffUserDto::from(user)))
}

/// Log out the current user
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged out", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, Error> {
    session.clear().await;

    Ok(Json(MessageDto {
        success: true,
        message: "Logged out".to_string(),
    }))
}

/// Get the currently logged-in staff user
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user", body = StaffUserDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn me(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = current_user(&state, &session).await?;

    Ok(Json(StaffUserDto::from(user)))
}

#[cfg(test)]
mod tests {
    mod login_tests {
        use axum::extract::State;
        use axum::Json;
        use entity::staff_user::StaffRole;
        use muster_test_utils::constant::TEST_PASSWORD;
        use muster_test_utils::prelude::*;

        use crate::model::auth::LoginDto;
        use crate::server::controller::auth::{login, me};
        use crate::server::error::Error;

        /// Expect login to store the session so `me` resolves afterwards
        #[tokio::test]
        async fn test_login_then_me() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::StaffUser)?;

            fixtures::staff::create_staff_user(
                &test.state.db,
                "crewing",
                StaffRole::CrewingManager,
            )
            .await?;

            let result = login(
                State(test.state()),
                test.session.clone(),
                Json(LoginDto {
                    username: "crewing".to_string(),
                    password: TEST_PASSWORD.to_string(),
                }),
            )
            .await;
            assert!(result.is_ok());

            let result = me(State(test.state()), test.session.clone()).await;
            assert!(result.is_ok());

            Ok(())
        }

        /// Expect a failed login to leave the session empty
        #[tokio::test]
        async fn test_failed_login_leaves_session_empty() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::StaffUser)?;

            fixtures::staff::create_staff_user(
                &test.state.db,
                "crewing",
                StaffRole::CrewingManager,
            )
            .await?;

            let result = login(
                State(test.state()),
                test.session.clone(),
                Json(LoginDto {
                    username: "crewing".to_string(),
                    password: "wrong".to_string(),
                }),
            )
            .await;
            assert!(matches!(result, Err(Error::AuthError(_))));

            let result = me(State(test.state()), test.session.clone()).await;
            assert!(matches!(result, Err(Error::AuthError(_))));

            Ok(())
        }
    }
}
