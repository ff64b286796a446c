use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One line of a checklist instance, stored as JSON on the row.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ChecklistItem {
    pub code: String,
    pub label: String,
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct ChecklistDto {
    pub id: i32,
    pub crew_id: i32,
    pub application_id: Option<i32>,
    pub items: Vec<ChecklistItem>,
    pub remarks: Option<String>,
    pub completed_by: Option<String>,
    pub created_at: NaiveDateTime,
}

impl ChecklistDto {
    pub fn from_model(
        checklist: entity::document_checklist::Model,
        items: Vec<ChecklistItem>,
    ) -> Self {
        Self {
            id: checklist.id,
            crew_id: checklist.crew_id,
            application_id: checklist.application_id,
            items,
            remarks: checklist.remarks,
            completed_by: checklist.completed_by,
            created_at: checklist.created_at,
        }
    }
}

#[derive(Deserialize, ToSchema)]
pub struct CreateChecklistDto {
    pub crew_id: i32,
    pub application_id: Option<i32>,
    pub items: Vec<ChecklistItem>,
    pub remarks: Option<String>,
}

/// Creation response; `warnings` lists checked-off document items whose
/// matching certificate is expired or missing.
#[derive(Serialize, ToSchema)]
pub struct ChecklistCreatedDto {
    pub checklist: ChecklistDto,
    pub warnings: Vec<String>,
}
