//! Form template from the QMS catalog (e.g. HGF-CR-02). `fields` holds the
//! typed field schema as JSON; submissions are validated against it.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "form_template")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub code: String,
    pub title: String,
    /// Department code: CREWING, ADMIN, ACCOUNTING.
    pub category: String,
    pub pages: i32,
    #[sea_orm(column_type = "Text")]
    pub fields: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::form_submission::Entity")]
    FormSubmission,
}

impl Related<super::form_submission::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FormSubmission.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
