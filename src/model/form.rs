use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use sea_orm::ActiveEnum;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Typed field schema of a form template. Stored as JSON on the
/// `form_template` row and in the bundled catalog; parse-or-fail.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FormField {
    Text {
        name: String,
        label: String,
        required: bool,
    },
    Date {
        name: String,
        label: String,
        required: bool,
    },
    Number {
        name: String,
        label: String,
        required: bool,
    },
    Checkbox {
        name: String,
        label: String,
        required: bool,
    },
    Select {
        name: String,
        label: String,
        required: bool,
        options: Vec<String>,
    },
}

impl FormField {
    pub fn name(&self) -> &str {
        match self {
            Self::Text { name, .. }
            | Self::Date { name, .. }
            | Self::Number { name, .. }
            | Self::Checkbox { name, .. }
            | Self::Select { name, .. } => name,
        }
    }

    pub fn required(&self) -> bool {
        match self {
            Self::Text { required, .. }
            | Self::Date { required, .. }
            | Self::Number { required, .. }
            | Self::Checkbox { required, .. }
            | Self::Select { required, .. } => *required,
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct FormTemplateDto {
    pub id: i32,
    pub code: String,
    pub title: String,
    pub category: String,
    pub pages: i32,
    pub fields: Vec<FormField>,
}

impl FormTemplateDto {
    pub fn from_model(template: entity::form_template::Model, fields: Vec<FormField>) -> Self {
        Self {
            id: template.id,
            code: template.code,
            title: template.title,
            category: template.category,
            pages: template.pages,
            fields,
        }
    }
}

/// One department group in the form list.
#[derive(Serialize, ToSchema)]
pub struct FormCategoryDto {
    pub category: String,
    pub forms: Vec<FormSummaryDto>,
}

#[derive(Serialize, ToSchema)]
pub struct FormSummaryDto {
    pub code: String,
    pub title: String,
    pub pages: i32,
}

/// Body of `POST /api/forms/generate`.
#[derive(Deserialize, ToSchema)]
pub struct GenerateFormDto {
    pub code: String,
    pub crew_id: i32,
}

/// Placeholder map resolved from crew data. The caller fills the actual
/// document; this endpoint only supplies the values.
#[derive(Serialize, ToSchema)]
pub struct GeneratedFormDto {
    pub code: String,
    pub title: String,
    pub values: BTreeMap<String, serde_json::Value>,
    /// Placeholders the crew record had no value for.
    pub missing: Vec<String>,
}

#[derive(Serialize, ToSchema)]
pub struct FormSubmissionDto {
    pub id: i32,
    pub template_id: i32,
    pub template_code: Option<String>,
    pub crew_id: Option<i32>,
    pub application_id: Option<i32>,
    pub status: String,
    pub form_data: BTreeMap<String, serde_json::Value>,
    pub created_at: NaiveDateTime,
}

impl FormSubmissionDto {
    pub fn from_model(
        submission: entity::form_submission::Model,
        template_code: Option<String>,
        form_data: BTreeMap<String, serde_json::Value>,
    ) -> Self {
        Self {
            id: submission.id,
            template_id: submission.template_id,
            template_code,
            crew_id: submission.crew_id,
            application_id: submission.application_id,
            status: submission.status.to_value(),
            form_data,
            created_at: submission.created_at,
        }
    }
}

#[derive(Deserialize, ToSchema)]
pub struct CreateFormSubmissionDto {
    pub template_code: String,
    pub crew_id: Option<i32>,
    pub application_id: Option<i32>,
    /// `DRAFT` (default) or `SUBMITTED`.
    pub status: Option<String>,
    pub form_data: BTreeMap<String, serde_json::Value>,
}
