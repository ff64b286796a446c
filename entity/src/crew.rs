//! Seafarer profile. Crew are never hard-deleted; deactivation goes through
//! the status machine (EX_CREW / BLACKLISTED).

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum CrewStatus {
    #[sea_orm(string_value = "APPLICANT")]
    Applicant,
    #[sea_orm(string_value = "APPROVED")]
    Approved,
    #[sea_orm(string_value = "STANDBY")]
    Standby,
    #[sea_orm(string_value = "ONBOARD")]
    Onboard,
    #[sea_orm(string_value = "SIGN_OFF")]
    SignOff,
    #[sea_orm(string_value = "VACATION")]
    Vacation,
    #[sea_orm(string_value = "EX_CREW")]
    ExCrew,
    #[sea_orm(string_value = "BLACKLISTED")]
    Blacklisted,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "crew")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub crew_code: String,
    pub full_name: String,
    pub rank: String,
    pub crew_status: CrewStatus,
    /// Denormalized name of the vessel the crew member is currently on.
    #[sea_orm(nullable)]
    pub vessel: Option<String>,
    #[sea_orm(nullable)]
    pub date_of_birth: Option<Date>,
    #[sea_orm(nullable)]
    pub place_of_birth: Option<String>,
    #[sea_orm(nullable)]
    pub nationality: Option<String>,
    #[sea_orm(nullable)]
    pub religion: Option<String>,
    #[sea_orm(nullable)]
    pub marital_status: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub address: Option<String>,
    #[sea_orm(nullable)]
    pub phone: Option<String>,
    #[sea_orm(nullable)]
    pub email: Option<String>,
    pub reported_to_office: bool,
    #[sea_orm(nullable)]
    pub reported_to_office_date: Option<DateTime>,
    #[sea_orm(nullable)]
    pub inactive_reason: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub offboard_notes: Option<String>,
    #[sea_orm(nullable)]
    pub last_offboard_date: Option<DateTime>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::certificate::Entity")]
    Certificate,
    #[sea_orm(has_many = "super::assignment::Entity")]
    Assignment,
    #[sea_orm(has_many = "super::sea_service::Entity")]
    SeaService,
    #[sea_orm(has_many = "super::employment_application::Entity")]
    EmploymentApplication,
    #[sea_orm(has_many = "super::document_checklist::Entity")]
    DocumentChecklist,
}

impl Related<super::certificate::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Certificate.def()
    }
}

impl Related<super::assignment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assignment.def()
    }
}

impl Related<super::sea_service::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SeaService.def()
    }
}

impl Related<super::employment_application::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EmploymentApplication.def()
    }
}

impl Related<super::document_checklist::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DocumentChecklist.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
