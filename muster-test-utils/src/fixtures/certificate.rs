use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};

use crate::error::TestError;

pub async fn create_certificate(
    db: &DatabaseConnection,
    crew_id: i32,
    certificate_type: &str,
    expiry_date: Option<NaiveDate>,
) -> Result<entity::certificate::Model, TestError> {
    let now = Utc::now().naive_utc();

    let certificate = entity::certificate::ActiveModel {
        crew_id: ActiveValue::Set(crew_id),
        r#type: ActiveValue::Set(certificate_type.to_string()),
        expiry_date: ActiveValue::Set(expiry_date),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    };

    Ok(certificate.insert(db).await?)
}
