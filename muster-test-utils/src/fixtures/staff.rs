use argon2::password_hash::SaltString;
use argon2::{Argon2, PasswordHasher};
use chrono::Utc;
use entity::staff_user::StaffRole;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};

use crate::constant::TEST_PASSWORD;
use crate::error::TestError;

/// Argon2 hash of [`TEST_PASSWORD`] with a fixed salt, so fixture users can
/// log in through the real verification path.
pub fn test_password_hash() -> Result<String, TestError> {
    let salt = SaltString::encode_b64(b"muster-test-salt")?;
    let hash = Argon2::default().hash_password(TEST_PASSWORD.as_bytes(), &salt)?;

    Ok(hash.to_string())
}

pub async fn create_staff_user(
    db: &DatabaseConnection,
    username: &str,
    role: StaffRole,
) -> Result<entity::staff_user::Model, TestError> {
    let now = Utc::now().naive_utc();

    let user = entity::staff_user::ActiveModel {
        username: ActiveValue::Set(username.to_string()),
        email: ActiveValue::Set(format!("{username}@example.test")),
        password_hash: ActiveValue::Set(test_password_hash()?),
        full_name: ActiveValue::Set(format!("Test {username}")),
        role: ActiveValue::Set(role),
        is_active: ActiveValue::Set(true),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    };

    Ok(user.insert(db).await?)
}

pub async fn create_inactive_staff_user(
    db: &DatabaseConnection,
    username: &str,
    role: StaffRole,
) -> Result<entity::staff_user::Model, TestError> {
    let now = Utc::now().naive_utc();

    let user = entity::staff_user::ActiveModel {
        username: ActiveValue::Set(username.to_string()),
        email: ActiveValue::Set(format!("{username}@example.test")),
        password_hash: ActiveValue::Set(test_password_hash()?),
        full_name: ActiveValue::Set(format!("Test {username}")),
        role: ActiveValue::Set(role),
        is_active: ActiveValue::Set(false),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    };

    Ok(user.insert(db).await?)
}
