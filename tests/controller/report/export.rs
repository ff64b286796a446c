use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use entity::crew::CrewStatus;
use muster::server::controller::report::{export, ExportQuery};

use super::*;

/// Expect a CSV attachment with the crew register
#[tokio::test]
async fn crew_export_is_csv_attachment() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Crew)?;

    fixtures::crew::create_crew(&test.state.db, "HGF-0001", CrewStatus::Standby).await?;

    let result = export(
        State(test.state()),
        Query(ExportQuery {
            export_type: "crew".to_string(),
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get("content-type").unwrap(),
        "text/csv; charset=utf-8"
    );
    assert_eq!(
        resp.headers().get("content-disposition").unwrap(),
        "attachment; filename=\"crew.csv\""
    );

    Ok(())
}

/// Expect 400 BAD REQUEST for an unknown export type
#[tokio::test]
async fn bad_request_for_unknown_type() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Crew)?;

    let result = export(
        State(test.state()),
        Query(ExportQuery {
            export_type: "cargo".to_string(),
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
