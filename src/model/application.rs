use chrono::{NaiveDate, NaiveDateTime};
use sea_orm::ActiveEnum;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Structured metadata carried on an application's `notes` column. Parsed
/// strictly: a notes value that is not valid metadata fails the request.
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct ApplicationMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_salary: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interview: Option<InterviewRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct InterviewRecord {
    pub date: NaiveDate,
    pub interviewer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct ApplicationDto {
    pub id: i32,
    pub crew_id: i32,
    pub crew_name: Option<String>,
    pub applied_rank: String,
    pub status: String,
    pub current_approval_level: i32,
    pub application_date: NaiveDate,
    pub metadata: Option<ApplicationMetadata>,
    pub rejection_reason: Option<String>,
    pub offered_date: Option<NaiveDateTime>,
    pub accepted_date: Option<NaiveDateTime>,
}

impl ApplicationDto {
    pub fn from_model(
        application: entity::employment_application::Model,
        crew_name: Option<String>,
        metadata: Option<ApplicationMetadata>,
    ) -> Self {
        Self {
            id: application.id,
            crew_id: application.crew_id,
            crew_name,
            applied_rank: application.applied_rank,
            status: application.status.to_value(),
            current_approval_level: application.current_approval_level,
            application_date: application.application_date,
            metadata,
            rejection_reason: application.rejection_reason,
            offered_date: application.offered_date,
            accepted_date: application.accepted_date,
        }
    }
}

#[derive(Deserialize, ToSchema)]
pub struct CreateApplicationDto {
    pub crew_id: i32,
    pub applied_rank: String,
    #[serde(default)]
    pub metadata: Option<ApplicationMetadata>,
}

/// Body of `POST /api/applications/{id}/approve`.
#[derive(Deserialize, ToSchema)]
pub struct ApprovalRequestDto {
    /// `APPROVED` or `REJECTED`.
    pub action: String,
    pub comments: Option<String>,
}

/// One slot of the four-level approval chain. Levels without a recorded
/// decision surface as `PENDING`.
#[derive(Clone, Serialize, ToSchema)]
pub struct ApprovalSlotDto {
    pub level: i32,
    pub role: String,
    pub decision: String,
    pub comments: Option<String>,
    pub decided_by: Option<String>,
    pub decided_at: Option<NaiveDateTime>,
}

#[derive(Serialize, ToSchema)]
pub struct ApprovalHistoryDto {
    pub id: i32,
    pub user_role: String,
    pub action: String,
    pub comments: Option<String>,
    pub created_by: String,
    pub created_at: NaiveDateTime,
}

impl From<entity::approval_history::Model> for ApprovalHistoryDto {
    fn from(row: entity::approval_history::Model) -> Self {
        Self {
            id: row.id,
            user_role: row.user_role.to_value(),
            action: row.action.to_value(),
            comments: row.comments,
            created_by: row.created_by,
            created_at: row.created_at,
        }
    }
}

/// Response of `GET /api/applications/{id}/approve`.
#[derive(Serialize, ToSchema)]
pub struct ApprovalStatusDto {
    pub application: ApplicationDto,
    pub chain: Vec<ApprovalSlotDto>,
    /// Whether the current user's role matches the pending level.
    pub can_act: bool,
    /// Oldest first.
    pub history: Vec<ApprovalHistoryDto>,
}

/// Response of `POST /api/applications/{id}/approve`.
#[derive(Serialize, ToSchema)]
pub struct ApprovalResultDto {
    pub success: bool,
    pub message: String,
    pub status: String,
    pub current_approval_level: i32,
}
