use chrono::{NaiveDate, NaiveDateTime};
use sea_orm::ActiveEnum;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct CrewDto {
    pub id: i32,
    pub crew_code: String,
    pub full_name: String,
    pub rank: String,
    pub crew_status: String,
    pub vessel: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub place_of_birth: Option<String>,
    pub nationality: Option<String>,
    pub religion: Option<String>,
    pub marital_status: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub reported_to_office: bool,
    pub inactive_reason: Option<String>,
    pub last_offboard_date: Option<NaiveDateTime>,
}

impl From<entity::crew::Model> for CrewDto {
    fn from(crew: entity::crew::Model) -> Self {
        Self {
            id: crew.id,
            crew_code: crew.crew_code,
            full_name: crew.full_name,
            rank: crew.rank,
            crew_status: crew.crew_status.to_value(),
            vessel: crew.vessel,
            date_of_birth: crew.date_of_birth,
            place_of_birth: crew.place_of_birth,
            nationality: crew.nationality,
            religion: crew.religion,
            marital_status: crew.marital_status,
            address: crew.address,
            phone: crew.phone,
            email: crew.email,
            reported_to_office: crew.reported_to_office,
            inactive_reason: crew.inactive_reason,
            last_offboard_date: crew.last_offboard_date,
        }
    }
}

#[derive(Deserialize, ToSchema)]
pub struct CreateCrewDto {
    pub crew_code: String,
    pub full_name: String,
    pub rank: String,
    pub date_of_birth: Option<NaiveDate>,
    pub place_of_birth: Option<String>,
    pub nationality: Option<String>,
    pub religion: Option<String>,
    pub marital_status: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

#[derive(Deserialize, ToSchema)]
pub struct UpdateCrewDto {
    pub full_name: Option<String>,
    pub rank: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub place_of_birth: Option<String>,
    pub nationality: Option<String>,
    pub religion: Option<String>,
    pub marital_status: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

/// Body of `PATCH /api/crew/{id}/status`.
#[derive(Deserialize, ToSchema)]
pub struct CrewStatusChangeDto {
    pub new_status: String,
    pub reason: Option<String>,
    pub notes: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct CrewStatusChangedDto {
    pub success: bool,
    pub message: String,
    pub crew_id: i32,
    pub previous_status: String,
    pub new_status: String,
}

/// Transitions available to the current user for one crew member.
#[derive(Serialize, ToSchema)]
pub struct CrewTransitionsDto {
    pub current_status: String,
    pub available_transitions: Vec<String>,
    pub can_transition: bool,
}
