use axum::{extract::State, http::StatusCode, response::IntoResponse};
use entity::staff_user::StaffRole;
use muster::server::controller::auth::{logout, me};
use muster::server::model::session::SessionUserId;

use super::*;

/// Expect logout to clear the session so `me` fails afterwards
#[tokio::test]
async fn logout_clears_session() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::StaffUser)?;

    let user =
        fixtures::staff::create_staff_user(&test.state.db, "crewing", StaffRole::CrewingManager)
            .await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let result = logout(test.session.clone()).await;
    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let result = me(State(test.state()), test.session.clone()).await;
    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
