use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use entity::form_submission::SubmissionStatus;

pub struct FormTemplateRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FormTemplateRepository<'a> {
    /// Creates a new instance of [`FormTemplateRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a template row. `fields` is the serialized field schema.
    pub async fn create(
        &self,
        code: String,
        title: String,
        category: String,
        pages: i32,
        fields: String,
    ) -> Result<entity::form_template::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let template = entity::form_template::ActiveModel {
            code: ActiveValue::Set(code),
            title: ActiveValue::Set(title),
            category: ActiveValue::Set(category),
            pages: ActiveValue::Set(pages),
            fields: ActiveValue::Set(fields),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        template.insert(self.db).await
    }

    pub async fn get_by_code(
        &self,
        code: &str,
    ) -> Result<Option<entity::form_template::Model>, DbErr> {
        entity::prelude::FormTemplate::find()
            .filter(entity::form_template::Column::Code.eq(code))
            .one(self.db)
            .await
    }

    pub async fn list(&self) -> Result<Vec<entity::form_template::Model>, DbErr> {
        entity::prelude::FormTemplate::find()
            .order_by_asc(entity::form_template::Column::Code)
            .all(self.db)
            .await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::FormTemplate::find().count(self.db).await
    }
}

pub struct FormSubmissionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FormSubmissionRepository<'a> {
    /// Creates a new instance of [`FormSubmissionRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a submission. `form_data` is the serialized value map,
    /// already validated against the template schema.
    pub async fn create(
        &self,
        template_id: i32,
        crew_id: Option<i32>,
        application_id: Option<i32>,
        status: SubmissionStatus,
        form_data: String,
    ) -> Result<entity::form_submission::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let submission = entity::form_submission::ActiveModel {
            template_id: ActiveValue::Set(template_id),
            crew_id: ActiveValue::Set(crew_id),
            application_id: ActiveValue::Set(application_id),
            status: ActiveValue::Set(status),
            form_data: ActiveValue::Set(form_data),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        submission.insert(self.db).await
    }

    /// Lists submissions with their template, newest first.
    pub async fn list_with_template(
        &self,
        crew_id: Option<i32>,
    ) -> Result<
        Vec<(
            entity::form_submission::Model,
            Option<entity::form_template::Model>,
        )>,
        DbErr,
    > {
        let mut query = entity::prelude::FormSubmission::find();

        if let Some(crew_id) = crew_id {
            query = query.filter(entity::form_submission::Column::CrewId.eq(crew_id));
        }

        query
            .find_also_related(entity::form_template::Entity)
            .order_by_desc(entity::form_submission::Column::Id)
            .all(self.db)
            .await
    }
}
