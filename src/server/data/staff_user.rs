use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use entity::staff_user::StaffRole;

pub struct StaffUserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StaffUserRepository<'a> {
    /// Creates a new instance of [`StaffUserRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new staff user. `password_hash` must already be an argon2
    /// PHC string.
    pub async fn create(
        &self,
        username: String,
        email: String,
        password_hash: String,
        full_name: String,
        role: StaffRole,
    ) -> Result<entity::staff_user::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let user = entity::staff_user::ActiveModel {
            username: ActiveValue::Set(username),
            email: ActiveValue::Set(email),
            password_hash: ActiveValue::Set(password_hash),
            full_name: ActiveValue::Set(full_name),
            role: ActiveValue::Set(role),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    pub async fn get_by_id(
        &self,
        user_id: i32,
    ) -> Result<Option<entity::staff_user::Model>, DbErr> {
        entity::prelude::StaffUser::find_by_id(user_id)
            .one(self.db)
            .await
    }

    pub async fn get_by_username(
        &self,
        username: &str,
    ) -> Result<Option<entity::staff_user::Model>, DbErr> {
        entity::prelude::StaffUser::find()
            .filter(entity::staff_user::Column::Username.eq(username))
            .one(self.db)
            .await
    }
}
