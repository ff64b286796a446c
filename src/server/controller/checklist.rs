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
        api::ErrorDto,
        checklist::{ChecklistCreatedDto, ChecklistDto, ChecklistItem, CreateChecklistDto},
    },
    server::{
        catalog::ChecklistTemplate,
        controller::util::current_user::current_user,
        data::{
            certificate::CertificateRepository, checklist::ChecklistRepository,
            crew::CrewRepository,
        },
        error::Error,
        model::app::AppState,
    },
};

pub static CHECKLIST_TAG: &str = "checklists";

#[derive(Deserialize, IntoParams)]
pub struct ChecklistListQuery {
    pub crew_id: Option<i32>,
    pub application_id: Option<i32>,
}

/// List checklist templates or completed instances.
///
/// Without a filter this returns the catalog templates; with `crew_id` or
/// `application_id` it returns the stored instances.
#[utoipa::path(
    get,
    path = "/api/checklists",
    tag = CHECKLIST_TAG,
    params(ChecklistListQuery),
    responses(
        (status = 200, description = "Templates or instances", body = Vec<ChecklistDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ChecklistListQuery>,
) -> Result<axum::response::Response, Error> {
    if query.crew_id.is_none() && query.application_id.is_none() {
        let templates: Vec<ChecklistTemplate> = state.catalog.checklists.clone();
        return Ok(Json(templates).into_response());
    }

    let checklists = ChecklistRepository::new(&state.db)
        .list(query.crew_id, query.application_id)
        .await?;

    let mut dtos = Vec::with_capacity(checklists.len());
    for checklist in checklists {
        let items: Vec<ChecklistItem> = serde_json::from_str(&checklist.items)?;
        dtos.push(ChecklistDto::from_model(checklist, items));
    }

    Ok(Json(dtos).into_response())
}

/// Complete a document checklist for a crew member.
///
/// Items checked off against a catalog certificate type are cross-checked:
/// a missing or expired certificate lands in `warnings` without blocking
/// the checklist.
#[utoipa::path(
    post,
    path = "/api/checklists",
    tag = CHECKLIST_TAG,
    request_body = CreateChecklistDto,
    responses(
        (status = 201, description = "Checklist stored", body = ChecklistCreatedDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Crew not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<CreateChecklistDto>,
) -> Result<impl IntoResponse, Error> {
    let user = current_user(&state, &session).await?;

    CrewRepository::new(&state.db)
        .get_by_id(dto.crew_id)
        .await?
        .ok_or_else(|| Error::NotFound(format!("Crew {}", dto.crew_id)))?;

    let certificates = CertificateRepository::new(&state.db)
        .list(Some(dto.crew_id))
        .await?;
    let today = chrono::Utc::now().date_naive();

    let mut warnings = Vec::new();
    for item in dto.items.iter().filter(|item| item.ok) {
        if state.catalog.certificate_type(&item.code).is_none() {
            continue;
        }

        match certificates.iter().find(|cert| cert.r#type == item.code) {
            None => warnings.push(format!("{}: no certificate on file", item.label)),
            Some(cert) => {
                if cert.expiry_date.is_some_and(|expiry| expiry < today) {
                    warnings.push(format!("{}: certificate expired", item.label));
                }
            }
        }
    }

    let items = serde_json::to_string(&dto.items)?;
    let checklist = ChecklistRepository::new(&state.db)
        .create(
            dto.crew_id,
            dto.application_id,
            items,
            dto.remarks,
            Some(user.full_name),
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ChecklistCreatedDto {
            checklist: ChecklistDto::from_model(checklist, dto.items),
            warnings,
        }),
    ))
}

#[cfg(test)]
mod tests {
    mod create_tests {
        use axum::extract::State;
        use axum::Json;
        use chrono::{Duration, Utc};
        use entity::crew::CrewStatus;
        use entity::staff_user::StaffRole;
        use muster_test_utils::prelude::*;
        use sea_orm::EntityTrait;

        use crate::model::checklist::{ChecklistItem, CreateChecklistDto};
        use crate::server::controller::checklist::create;
        use crate::server::model::session::SessionUserId;

        fn item(code: &str, label: &str, ok: bool) -> ChecklistItem {
            ChecklistItem {
                code: code.to_string(),
                label: label.to_string(),
                ok,
                remarks: None,
            }
        }

        /// Expect warnings for a checked-off certificate that is expired
        /// and one that is missing, while the checklist is still stored.
        #[tokio::test]
        async fn test_warnings_for_expired_and_missing() -> Result<(), TestError> {
            let test = test_setup_with_tables!(
                entity::prelude::StaffUser,
                entity::prelude::Crew,
                entity::prelude::Certificate,
                entity::prelude::EmploymentApplication,
                entity::prelude::DocumentChecklist,
            )?;

            let user = fixtures::staff::create_staff_user(
                &test.state.db,
                "crewing",
                StaffRole::CrewingManager,
            )
            .await?;
            SessionUserId::insert(&test.session, user.id).await.unwrap();

            let crew =
                fixtures::crew::create_crew(&test.state.db, "HGF-0001", CrewStatus::Standby)
                    .await?;

            let expired = Utc::now().date_naive() - Duration::days(10);
            fixtures::certificate::create_certificate(
                &test.state.db,
                crew.id,
                "PASSPORT",
                Some(expired),
            )
            .await?;

            let result = create(
                State(test.state()),
                test.session.clone(),
                Json(CreateChecklistDto {
                    crew_id: crew.id,
                    application_id: None,
                    items: vec![
                        item("PASSPORT", "Passport", true),
                        item("MEDICAL", "Medical certificate", true),
                        item("PHOTO", "Photographs", true),
                    ],
                    remarks: None,
                }),
            )
            .await;
            assert!(result.is_ok());

            let stored = entity::prelude::DocumentChecklist::find()
                .all(&test.state.db)
                .await?;
            assert_eq!(stored.len(), 1);
            assert_eq!(stored[0].completed_by.as_deref(), Some("Test crewing"));

            Ok(())
        }
    }
}
