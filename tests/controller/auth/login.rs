use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use entity::staff_user::StaffRole;
use muster::model::auth::LoginDto;
use muster::server::controller::auth::login;
use muster_test_utils::constant::TEST_PASSWORD;

use super::*;

/// Expect 200 OK and a stored session for valid credentials
#[tokio::test]
async fn success_with_valid_credentials() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::StaffUser)?;

    fixtures::staff::create_staff_user(&test.state.db, "crewing", StaffRole::CrewingManager)
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
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 401 UNAUTHORIZED for a wrong password
#[tokio::test]
async fn unauthorized_with_wrong_password() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::StaffUser)?;

    fixtures::staff::create_staff_user(&test.state.db, "crewing", StaffRole::CrewingManager)
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

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect 401 UNAUTHORIZED for an unknown username
#[tokio::test]
async fn unauthorized_with_unknown_username() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::StaffUser)?;

    let result = login(
        State(test.state()),
        test.session.clone(),
        Json(LoginDto {
            username: "nobody".to_string(),
            password: TEST_PASSWORD.to_string(),
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
