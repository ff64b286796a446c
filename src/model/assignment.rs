use chrono::NaiveDate;
use sea_orm::ActiveEnum;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct AssignmentDto {
    pub id: i32,
    pub crew_id: i32,
    pub crew_name: Option<String>,
    pub vessel_id: Option<i32>,
    pub vessel_name: String,
    pub rank: String,
    pub status: String,
    pub sign_on: Option<NaiveDate>,
    pub sign_off: Option<NaiveDate>,
}

impl AssignmentDto {
    pub fn from_model(assignment: entity::assignment::Model, crew_name: Option<String>) -> Self {
        Self {
            id: assignment.id,
            crew_id: assignment.crew_id,
            crew_name,
            vessel_id: assignment.vessel_id,
            vessel_name: assignment.vessel_name,
            rank: assignment.rank,
            status: assignment.status.to_value(),
            sign_on: assignment.sign_on,
            sign_off: assignment.sign_off,
        }
    }
}

/// Body of `POST /api/assignments` (sign-on).
#[derive(Deserialize, ToSchema)]
pub struct CreateAssignmentDto {
    pub crew_id: i32,
    pub vessel_id: Option<i32>,
    /// Required when `vessel_id` is absent.
    pub vessel_name: Option<String>,
    /// Defaults to the crew member's current rank.
    pub rank: Option<String>,
    pub sign_on: NaiveDate,
}

#[derive(Deserialize, ToSchema)]
pub struct ExtendAssignmentDto {
    pub new_sign_off: NaiveDate,
}
