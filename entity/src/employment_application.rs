//! Employment application moving through the four-level approval chain.
//!
//! Per-level decisions live in `approval_decision` rows rather than flattened
//! columns; `current_approval_level` is the next level that still has to act.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum ApplicationStatus {
    #[sea_orm(string_value = "APPLIED")]
    Applied,
    #[sea_orm(string_value = "SHORTLISTED")]
    Shortlisted,
    #[sea_orm(string_value = "INTERVIEW")]
    Interview,
    #[sea_orm(string_value = "APPROVED")]
    Approved,
    #[sea_orm(string_value = "ACCEPTED")]
    Accepted,
    #[sea_orm(string_value = "REJECTED")]
    Rejected,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "employment_application")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub crew_id: i32,
    pub applied_rank: String,
    pub status: ApplicationStatus,
    /// Next approval level that has to act, 1 through 4. Frozen on rejection.
    pub current_approval_level: i32,
    pub application_date: Date,
    /// Typed JSON metadata (availability, expected salary, interview record).
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    #[sea_orm(nullable)]
    pub rejection_reason: Option<String>,
    #[sea_orm(nullable)]
    pub offered_date: Option<DateTime>,
    #[sea_orm(nullable)]
    pub accepted_date: Option<DateTime>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::crew::Entity",
        from = "Column::CrewId",
        to = "super::crew::Column::Id"
    )]
    Crew,
    #[sea_orm(has_many = "super::approval_decision::Entity")]
    ApprovalDecision,
    #[sea_orm(has_many = "super::approval_history::Entity")]
    ApprovalHistory,
}

impl Related<super::crew::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Crew.def()
    }
}

impl Related<super::approval_decision::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ApprovalDecision.def()
    }
}

impl Related<super::approval_history::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ApprovalHistory.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
