use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct SeaServiceDto {
    pub id: i32,
    pub crew_id: i32,
    pub vessel_name: String,
    pub rank: String,
    pub grt: Option<i32>,
    pub dwt: Option<i32>,
    pub engine_type: Option<String>,
    pub bhp: Option<i32>,
    pub company_name: Option<String>,
    pub flag: Option<String>,
    pub sign_on: Option<NaiveDate>,
    pub sign_off: Option<NaiveDate>,
    pub remarks: Option<String>,
}

impl From<entity::sea_service::Model> for SeaServiceDto {
    fn from(record: entity::sea_service::Model) -> Self {
        Self {
            id: record.id,
            crew_id: record.crew_id,
            vessel_name: record.vessel_name,
            rank: record.rank,
            grt: record.grt,
            dwt: record.dwt,
            engine_type: record.engine_type,
            bhp: record.bhp,
            company_name: record.company_name,
            flag: record.flag,
            sign_on: record.sign_on,
            sign_off: record.sign_off,
            remarks: record.remarks,
        }
    }
}

#[derive(Deserialize, ToSchema)]
pub struct CreateSeaServiceDto {
    pub crew_id: i32,
    pub vessel_name: String,
    pub rank: String,
    pub grt: Option<i32>,
    pub dwt: Option<i32>,
    pub engine_type: Option<String>,
    pub bhp: Option<i32>,
    pub company_name: Option<String>,
    pub flag: Option<String>,
    pub sign_on: Option<NaiveDate>,
    pub sign_off: Option<NaiveDate>,
    pub remarks: Option<String>,
}

/// Body of `PUT /api/sea-service`; the target row is `id`.
#[derive(Deserialize, ToSchema)]
pub struct UpdateSeaServiceDto {
    pub id: i32,
    pub vessel_name: Option<String>,
    pub rank: Option<String>,
    pub grt: Option<i32>,
    pub dwt: Option<i32>,
    pub engine_type: Option<String>,
    pub bhp: Option<i32>,
    pub company_name: Option<String>,
    pub flag: Option<String>,
    pub sign_on: Option<NaiveDate>,
    pub sign_off: Option<NaiveDate>,
    pub remarks: Option<String>,
}
