use chrono::{NaiveDate, Utc};
use entity::assignment::AssignmentStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};

use crate::error::TestError;

pub async fn create_owner(
    db: &DatabaseConnection,
    name: &str,
    contract_months: i32,
) -> Result<entity::owner::Model, TestError> {
    let now = Utc::now().naive_utc();

    let owner = entity::owner::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        contract_months: ActiveValue::Set(contract_months),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    };

    Ok(owner.insert(db).await?)
}

pub async fn create_vessel(
    db: &DatabaseConnection,
    name: &str,
    owner_id: Option<i32>,
) -> Result<entity::vessel::Model, TestError> {
    let now = Utc::now().naive_utc();

    let vessel = entity::vessel::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        flag: ActiveValue::Set("PANAMA".to_string()),
        owner_id: ActiveValue::Set(owner_id),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    };

    Ok(vessel.insert(db).await?)
}

pub async fn create_assignment(
    db: &DatabaseConnection,
    crew_id: i32,
    vessel: &entity::vessel::Model,
    status: AssignmentStatus,
    sign_on: Option<NaiveDate>,
) -> Result<entity::assignment::Model, TestError> {
    let now = Utc::now().naive_utc();

    let assignment = entity::assignment::ActiveModel {
        crew_id: ActiveValue::Set(crew_id),
        vessel_id: ActiveValue::Set(Some(vessel.id)),
        vessel_name: ActiveValue::Set(vessel.name.clone()),
        rank: ActiveValue::Set("AB".to_string()),
        status: ActiveValue::Set(status),
        sign_on: ActiveValue::Set(sign_on),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    };

    Ok(assignment.insert(db).await?)
}
