use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct OwnerDto {
    pub id: i32,
    pub name: String,
    pub code: Option<String>,
    pub country: Option<String>,
    pub contact: Option<String>,
    pub email: Option<String>,
    pub notes: Option<String>,
    pub contract_months: i32,
    /// Present when the list was requested with `include_count`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vessel_count: Option<u64>,
}

impl From<entity::owner::Model> for OwnerDto {
    fn from(owner: entity::owner::Model) -> Self {
        Self {
            id: owner.id,
            name: owner.name,
            code: owner.code,
            country: owner.country,
            contact: owner.contact,
            email: owner.email,
            notes: owner.notes,
            contract_months: owner.contract_months,
            vessel_count: None,
        }
    }
}

#[derive(Deserialize, ToSchema)]
pub struct CreateOwnerDto {
    pub name: String,
    pub code: Option<String>,
    pub country: Option<String>,
    pub contact: Option<String>,
    pub email: Option<String>,
    pub notes: Option<String>,
    pub contract_months: Option<i32>,
}

#[derive(Deserialize, ToSchema)]
pub struct UpdateOwnerDto {
    pub name: Option<String>,
    pub code: Option<String>,
    pub country: Option<String>,
    pub contact: Option<String>,
    pub email: Option<String>,
    pub notes: Option<String>,
    pub contract_months: Option<i32>,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct VesselDto {
    pub id: i32,
    pub name: String,
    pub flag: String,
    pub vessel_type: Option<String>,
    pub grt: Option<i32>,
    pub dwt: Option<i32>,
    pub imo: Option<String>,
    pub call_sign: Option<String>,
    pub owner_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<OwnerDto>,
    /// Present when the list was requested with `include_count`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crew_onboard: Option<u64>,
}

impl From<entity::vessel::Model> for VesselDto {
    fn from(vessel: entity::vessel::Model) -> Self {
        Self {
            id: vessel.id,
            name: vessel.name,
            flag: vessel.flag,
            vessel_type: vessel.vessel_type,
            grt: vessel.grt,
            dwt: vessel.dwt,
            imo: vessel.imo,
            call_sign: vessel.call_sign,
            owner_id: vessel.owner_id,
            owner: None,
            crew_onboard: None,
        }
    }
}

#[derive(Deserialize, ToSchema)]
pub struct CreateVesselDto {
    pub name: String,
    pub flag: String,
    pub vessel_type: Option<String>,
    pub grt: Option<i32>,
    pub dwt: Option<i32>,
    pub imo: Option<String>,
    pub call_sign: Option<String>,
    pub owner_id: Option<i32>,
}

#[derive(Deserialize, ToSchema)]
pub struct UpdateVesselDto {
    pub name: Option<String>,
    pub flag: Option<String>,
    pub vessel_type: Option<String>,
    pub grt: Option<i32>,
    pub dwt: Option<i32>,
    pub imo: Option<String>,
    pub call_sign: Option<String>,
    pub owner_id: Option<i32>,
}
