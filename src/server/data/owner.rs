use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryOrder,
};

use crate::model::vessel::{CreateOwnerDto, UpdateOwnerDto};

/// Contract length assumed when an owner is created without one.
pub const DEFAULT_CONTRACT_MONTHS: i32 = 7;

pub struct OwnerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OwnerRepository<'a> {
    /// Creates a new instance of [`OwnerRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, dto: &CreateOwnerDto) -> Result<entity::owner::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let owner = entity::owner::ActiveModel {
            name: ActiveValue::Set(dto.name.clone()),
            code: ActiveValue::Set(dto.code.clone()),
            country: ActiveValue::Set(dto.country.clone()),
            contact: ActiveValue::Set(dto.contact.clone()),
            email: ActiveValue::Set(dto.email.clone()),
            notes: ActiveValue::Set(dto.notes.clone()),
            contract_months: ActiveValue::Set(dto.contract_months.unwrap_or(DEFAULT_CONTRACT_MONTHS)),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        owner.insert(self.db).await
    }

    pub async fn get_by_id(&self, owner_id: i32) -> Result<Option<entity::owner::Model>, DbErr> {
        entity::prelude::Owner::find_by_id(owner_id).one(self.db).await
    }

    pub async fn list(&self) -> Result<Vec<entity::owner::Model>, DbErr> {
        entity::prelude::Owner::find()
            .order_by_asc(entity::owner::Column::Name)
            .all(self.db)
            .await
    }

    pub async fn update(
        &self,
        owner_id: i32,
        dto: &UpdateOwnerDto,
    ) -> Result<Option<entity::owner::Model>, DbErr> {
        let Some(owner) = self.get_by_id(owner_id).await? else {
            return Ok(None);
        };

        let mut owner = owner.into_active_model();

        if let Some(name) = &dto.name {
            owner.name = ActiveValue::Set(name.clone());
        }
        if let Some(code) = &dto.code {
            owner.code = ActiveValue::Set(Some(code.clone()));
        }
        if let Some(country) = &dto.country {
            owner.country = ActiveValue::Set(Some(country.clone()));
        }
        if let Some(contact) = &dto.contact {
            owner.contact = ActiveValue::Set(Some(contact.clone()));
        }
        if let Some(email) = &dto.email {
            owner.email = ActiveValue::Set(Some(email.clone()));
        }
        if let Some(notes) = &dto.notes {
            owner.notes = ActiveValue::Set(Some(notes.clone()));
        }
        if let Some(contract_months) = dto.contract_months {
            owner.contract_months = ActiveValue::Set(contract_months);
        }
        owner.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        owner.update(self.db).await.map(Some)
    }

    /// Deletes an owner. The service layer refuses the delete while vessels
    /// still reference the owner.
    pub async fn delete(&self, owner_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Owner::delete_by_id(owner_id)
            .exec(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    mod create_tests {
        use muster_test_utils::prelude::*;

        use crate::model::vessel::CreateOwnerDto;
        use crate::server::data::owner::{OwnerRepository, DEFAULT_CONTRACT_MONTHS};

        /// Expect the default contract length when none is given
        #[tokio::test]
        async fn test_create_owner_default_contract_months() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::Owner)?;
            let repository = OwnerRepository::new(&test.state.db);

            let owner = repository
                .create(&CreateOwnerDto {
                    name: "Nordwind Shipping".to_string(),
                    code: None,
                    country: None,
                    contact: None,
                    email: None,
                    notes: None,
                    contract_months: None,
                })
                .await?;

            assert_eq!(owner.contract_months, DEFAULT_CONTRACT_MONTHS);

            Ok(())
        }

        /// Expect an explicit contract length to be kept
        #[tokio::test]
        async fn test_create_owner_explicit_contract_months() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::Owner)?;
            let repository = OwnerRepository::new(&test.state.db);

            let owner = repository
                .create(&CreateOwnerDto {
                    name: "Meridian Lines".to_string(),
                    code: None,
                    country: None,
                    contact: None,
                    email: None,
                    notes: None,
                    contract_months: Some(9),
                })
                .await?;

            assert_eq!(owner.contract_months, 9);

            Ok(())
        }
    }
}
