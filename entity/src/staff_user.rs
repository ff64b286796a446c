//! Back-office staff account with a role used for workflow authorization.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Staff roles; approval chains and status transitions are gated on these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
pub enum StaffRole {
    #[sea_orm(string_value = "DIRECTOR")]
    Director,
    #[sea_orm(string_value = "CREWING_MANAGER")]
    CrewingManager,
    #[sea_orm(string_value = "EXPERT_STAFF")]
    ExpertStaff,
    #[sea_orm(string_value = "DOCUMENTATION_OFFICER")]
    DocumentationOfficer,
    #[sea_orm(string_value = "ACCOUNTING_OFFICER")]
    AccountingOfficer,
    #[sea_orm(string_value = "TRAINING_OFFICER")]
    TrainingOfficer,
    #[sea_orm(string_value = "OPERATIONAL_STAFF")]
    OperationalStaff,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "staff_user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub full_name: String,
    pub role: StaffRole,
    pub is_active: bool,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::approval_decision::Entity")]
    ApprovalDecision,
}

impl Related<super::approval_decision::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ApprovalDecision.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
