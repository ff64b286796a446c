use chrono::Utc;
use entity::employment_application::ApplicationStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};

use crate::error::TestError;

pub async fn create_application(
    db: &DatabaseConnection,
    crew_id: i32,
    status: ApplicationStatus,
    current_approval_level: i32,
) -> Result<entity::employment_application::Model, TestError> {
    let now = Utc::now().naive_utc();

    let application = entity::employment_application::ActiveModel {
        crew_id: ActiveValue::Set(crew_id),
        applied_rank: ActiveValue::Set("AB".to_string()),
        status: ActiveValue::Set(status),
        current_approval_level: ActiveValue::Set(current_approval_level),
        application_date: ActiveValue::Set(now.date()),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    };

    Ok(application.insert(db).await?)
}
