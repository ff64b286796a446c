//! One recorded decision in an application's approval chain.
//!
//! Unique on (application_id, level); a second decision at the same level is
//! a constraint violation rather than a silent overwrite.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::staff_user::StaffRole;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum ApprovalAction {
    #[sea_orm(string_value = "APPROVED")]
    Approved,
    #[sea_orm(string_value = "REJECTED")]
    Rejected,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "approval_decision")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub application_id: i32,
    /// Approval level 1 through 4.
    pub level: i32,
    pub role: StaffRole,
    pub decision: ApprovalAction,
    #[sea_orm(column_type = "Text", nullable)]
    pub comments: Option<String>,
    pub decided_by: i32,
    pub decided_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::employment_application::Entity",
        from = "Column::ApplicationId",
        to = "super::employment_application::Column::Id"
    )]
    EmploymentApplication,
    #[sea_orm(
        belongs_to = "super::staff_user::Entity",
        from = "Column::DecidedBy",
        to = "super::staff_user::Column::Id"
    )]
    StaffUser,
}

impl Related<super::employment_application::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EmploymentApplication.def()
    }
}

impl Related<super::staff_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StaffUser.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
