use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        vessel::{CreateOwnerDto, OwnerDto, UpdateOwnerDto},
    },
    server::{
        controller::util::current_user::current_user,
        data::{owner::OwnerRepository, vessel::VesselRepository},
        error::Error,
        model::app::AppState,
    },
};

pub static OWNER_TAG: &str = "owners";

#[derive(Deserialize, IntoParams)]
pub struct OwnerListQuery {
    /// Count each owner's vessels.
    #[serde(default)]
    pub include_count: bool,
}

/// List vessel owners
#[utoipa::path(
    get,
    path = "/api/owners",
    tag = OWNER_TAG,
    params(OwnerListQuery),
    responses(
        (status = 200, description = "Owners", body = Vec<OwnerDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<OwnerListQuery>,
) -> Result<impl IntoResponse, Error> {
    let vessel_repo = VesselRepository::new(&state.db);

    let mut owners = Vec::new();
    for owner in OwnerRepository::new(&state.db).list().await? {
        let mut dto = OwnerDto::from(owner);
        if query.include_count {
            dto.vessel_count = Some(vessel_repo.count_by_owner(dto.id).await?);
        }
        owners.push(dto);
    }

    Ok(Json(owners))
}

/// Register a vessel owner
#[utoipa::path(
    post,
    path = "/api/owners",
    tag = OWNER_TAG,
    request_body = CreateOwnerDto,
    responses(
        (status = 201, description = "Owner created", body = OwnerDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<CreateOwnerDto>,
) -> Result<impl IntoResponse, Error> {
    current_user(&state, &session).await?;

    let owner = OwnerRepository::new(&state.db).create(&dto).await?;

    Ok((StatusCode::CREATED, Json(OwnerDto::from(owner))))
}

/// Update a vessel owner
#[utoipa::path(
    put,
    path = "/api/owners/{id}",
    tag = OWNER_TAG,
    params(("id" = i32, Path, description = "Owner ID")),
    request_body = UpdateOwnerDto,
    responses(
        (status = 200, description = "Updated owner", body = OwnerDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Owner not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(dto): Json<UpdateOwnerDto>,
) -> Result<impl IntoResponse, Error> {
    current_user(&state, &session).await?;

    let owner = OwnerRepository::new(&state.db)
        .update(id, &dto)
        .await?
        .ok_or_else(|| Error::NotFound(format!("Owner {id}")))?;

    Ok(Json(OwnerDto::from(owner)))
}

/// Delete a vessel owner. Fails while vessels still reference the owner.
#[utoipa::path(
    delete,
    path = "/api/owners/{id}",
    tag = OWNER_TAG,
    params(("id" = i32, Path, description = "Owner ID")),
    responses(
        (status = 200, description = "Owner deleted", body = MessageDto),
        (status = 400, description = "Owner still has vessels", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Owner not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    current_user(&state, &session).await?;

    let vessels = VesselRepository::new(&state.db).count_by_owner(id).await?;
    if vessels > 0 {
        return Err(Error::Validation(format!(
            "Owner {id} still has {vessels} vessels"
        )));
    }

    let result = OwnerRepository::new(&state.db).delete(id).await?;

    if result.rows_affected == 0 {
        return Err(Error::NotFound(format!("Owner {id}")));
    }

    Ok(Json(MessageDto {
        success: true,
        message: "Owner deleted".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    mod delete_tests {
        use axum::extract::{Path, State};
        use entity::staff_user::StaffRole;
        use muster_test_utils::prelude::*;

        use crate::server::controller::owner::delete;
        use crate::server::error::Error;
        use crate::server::model::session::SessionUserId;

        /// Expect deleting an owner with vessels to fail validation
        #[tokio::test]
        async fn test_delete_owner_with_vessels() -> Result<(), TestError> {
            let test = test_setup_with_tables!(
                entity::prelude::StaffUser,
                entity::prelude::Owner,
                entity::prelude::Vessel,
            )?;

            let user = fixtures::staff::create_staff_user(
                &test.state.db,
                "crewing",
                StaffRole::CrewingManager,
            )
            .await?;
            SessionUserId::insert(&test.session, user.id).await.unwrap();

            let owner = fixtures::fleet::create_owner(&test.state.db, "Nordwind", 7).await?;
            fixtures::fleet::create_vessel(&test.state.db, "MV Nordwind", Some(owner.id)).await?;

            let result = delete(State(test.state()), test.session.clone(), Path(owner.id)).await;

            assert!(matches!(result, Err(Error::Validation(_))));

            Ok(())
        }
    }
}
