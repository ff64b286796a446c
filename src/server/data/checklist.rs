use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

pub struct ChecklistRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ChecklistRepository<'a> {
    /// Creates a new instance of [`ChecklistRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a checklist instance. `items` is the serialized item list,
    /// already validated by the service layer.
    pub async fn create(
        &self,
        crew_id: i32,
        application_id: Option<i32>,
        items: String,
        remarks: Option<String>,
        completed_by: Option<String>,
    ) -> Result<entity::document_checklist::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let checklist = entity::document_checklist::ActiveModel {
            crew_id: ActiveValue::Set(crew_id),
            application_id: ActiveValue::Set(application_id),
            items: ActiveValue::Set(items),
            remarks: ActiveValue::Set(remarks),
            completed_by: ActiveValue::Set(completed_by),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        checklist.insert(self.db).await
    }

    pub async fn list(
        &self,
        crew_id: Option<i32>,
        application_id: Option<i32>,
    ) -> Result<Vec<entity::document_checklist::Model>, DbErr> {
        let mut query = entity::prelude::DocumentChecklist::find();

        if let Some(crew_id) = crew_id {
            query = query.filter(entity::document_checklist::Column::CrewId.eq(crew_id));
        }
        if let Some(application_id) = application_id {
            query =
                query.filter(entity::document_checklist::Column::ApplicationId.eq(application_id));
        }

        query
            .order_by_desc(entity::document_checklist::Column::Id)
            .all(self.db)
            .await
    }
}
