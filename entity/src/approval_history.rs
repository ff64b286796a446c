//! Append-only audit log of approval actions. Rows are never updated or
//! deleted after insertion.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::approval_decision::ApprovalAction;
use crate::staff_user::StaffRole;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "approval_history")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub application_id: i32,
    pub user_id: i32,
    pub user_role: StaffRole,
    pub action: ApprovalAction,
    #[sea_orm(column_type = "Text", nullable)]
    pub comments: Option<String>,
    /// Display name of the acting user.
    pub created_by: String,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::employment_application::Entity",
        from = "Column::ApplicationId",
        to = "super::employment_application::Column::Id"
    )]
    EmploymentApplication,
}

impl Related<super::employment_application::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EmploymentApplication.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
