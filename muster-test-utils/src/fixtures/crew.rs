use chrono::Utc;
use entity::crew::CrewStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};

use crate::constant::TEST_CREW_NAME;
use crate::error::TestError;

pub async fn create_crew(
    db: &DatabaseConnection,
    crew_code: &str,
    status: CrewStatus,
) -> Result<entity::crew::Model, TestError> {
    let now = Utc::now().naive_utc();

    let crew = entity::crew::ActiveModel {
        crew_code: ActiveValue::Set(crew_code.to_string()),
        full_name: ActiveValue::Set(TEST_CREW_NAME.to_string()),
        rank: ActiveValue::Set("AB".to_string()),
        crew_status: ActiveValue::Set(status),
        reported_to_office: ActiveValue::Set(false),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    };

    Ok(crew.insert(db).await?)
}
