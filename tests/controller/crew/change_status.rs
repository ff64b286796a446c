use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::crew::CrewStatus;
use entity::staff_user::StaffRole;
use muster::model::crew::CrewStatusChangeDto;
use muster::server::controller::crew::change_status;
use muster::server::model::session::SessionUserId;

use super::*;

fn change_to(status: &str) -> Json<CrewStatusChangeDto> {
    Json(CrewStatusChangeDto {
        new_status: status.to_string(),
        reason: None,
        notes: None,
    })
}

/// Expect 401 UNAUTHORIZED without a logged-in user
#[tokio::test]
async fn unauthorized_without_login() -> Result<(), TestError> {
    let test = test_setup_with_staff_tables!()?;

    let crew = fixtures::crew::create_crew(&test.state.db, "HGF-0001", CrewStatus::Standby).await?;

    let result = change_status(
        State(test.state()),
        test.session.clone(),
        Path(crew.id),
        change_to("ONBOARD"),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect 200 OK when operational staff signs an ONBOARD crew member off
#[tokio::test]
async fn success_for_gated_role() -> Result<(), TestError> {
    let test = test_setup_with_staff_tables!()?;

    let user =
        fixtures::staff::create_staff_user(&test.state.db, "ops", StaffRole::OperationalStaff)
            .await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let crew = fixtures::crew::create_crew(&test.state.db, "HGF-0001", CrewStatus::Onboard).await?;

    let result = change_status(
        State(test.state()),
        test.session.clone(),
        Path(crew.id),
        change_to("SIGN_OFF"),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 403 FORBIDDEN for a role outside the transition's gate
#[tokio::test]
async fn forbidden_for_role_outside_gate() -> Result<(), TestError> {
    let test = test_setup_with_staff_tables!()?;

    let user = fixtures::staff::create_staff_user(
        &test.state.db,
        "accounting",
        StaffRole::AccountingOfficer,
    )
    .await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let crew = fixtures::crew::create_crew(&test.state.db, "HGF-0001", CrewStatus::Standby).await?;

    let result = change_status(
        State(test.state()),
        test.session.clone(),
        Path(crew.id),
        change_to("ONBOARD"),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

/// Expect 409 CONFLICT for a target outside the transition table
#[tokio::test]
async fn conflict_for_illegal_target() -> Result<(), TestError> {
    let test = test_setup_with_staff_tables!()?;

    let user =
        fixtures::staff::create_staff_user(&test.state.db, "director", StaffRole::Director)
            .await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let crew =
        fixtures::crew::create_crew(&test.state.db, "HGF-0001", CrewStatus::Applicant).await?;

    let result = change_status(
        State(test.state()),
        test.session.clone(),
        Path(crew.id),
        change_to("ONBOARD"),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}
