use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::vessel::{CreateVesselDto, UpdateVesselDto};

pub struct VesselRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VesselRepository<'a> {
    /// Creates a new instance of [`VesselRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, dto: &CreateVesselDto) -> Result<entity::vessel::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let vessel = entity::vessel::ActiveModel {
            name: ActiveValue::Set(dto.name.clone()),
            flag: ActiveValue::Set(dto.flag.clone()),
            vessel_type: ActiveValue::Set(dto.vessel_type.clone()),
            grt: ActiveValue::Set(dto.grt),
            dwt: ActiveValue::Set(dto.dwt),
            imo: ActiveValue::Set(dto.imo.clone()),
            call_sign: ActiveValue::Set(dto.call_sign.clone()),
            owner_id: ActiveValue::Set(dto.owner_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        vessel.insert(self.db).await
    }

    pub async fn get_by_id(&self, vessel_id: i32) -> Result<Option<entity::vessel::Model>, DbErr> {
        entity::prelude::Vessel::find_by_id(vessel_id)
            .one(self.db)
            .await
    }

    pub async fn list(&self) -> Result<Vec<entity::vessel::Model>, DbErr> {
        entity::prelude::Vessel::find()
            .order_by_asc(entity::vessel::Column::Name)
            .all(self.db)
            .await
    }

    /// Lists vessels together with their owner.
    pub async fn list_with_owner(
        &self,
    ) -> Result<Vec<(entity::vessel::Model, Option<entity::owner::Model>)>, DbErr> {
        entity::prelude::Vessel::find()
            .find_also_related(entity::owner::Entity)
            .order_by_asc(entity::vessel::Column::Name)
            .all(self.db)
            .await
    }

    pub async fn update(
        &self,
        vessel_id: i32,
        dto: &UpdateVesselDto,
    ) -> Result<Option<entity::vessel::Model>, DbErr> {
        let Some(vessel) = self.get_by_id(vessel_id).await? else {
            return Ok(None);
        };

        let mut vessel = vessel.into_active_model();

        if let Some(name) = &dto.name {
            vessel.name = ActiveValue::Set(name.clone());
        }
        if let Some(flag) = &dto.flag {
            vessel.flag = ActiveValue::Set(flag.clone());
        }
        if let Some(vessel_type) = &dto.vessel_type {
            vessel.vessel_type = ActiveValue::Set(Some(vessel_type.clone()));
        }
        if let Some(grt) = dto.grt {
            vessel.grt = ActiveValue::Set(Some(grt));
        }
        if let Some(dwt) = dto.dwt {
            vessel.dwt = ActiveValue::Set(Some(dwt));
        }
        if let Some(imo) = &dto.imo {
            vessel.imo = ActiveValue::Set(Some(imo.clone()));
        }
        if let Some(call_sign) = &dto.call_sign {
            vessel.call_sign = ActiveValue::Set(Some(call_sign.clone()));
        }
        if let Some(owner_id) = dto.owner_id {
            vessel.owner_id = ActiveValue::Set(Some(owner_id));
        }
        vessel.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        vessel.update(self.db).await.map(Some)
    }

    pub async fn delete(&self, vessel_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Vessel::delete_by_id(vessel_id)
            .exec(self.db)
            .await
    }

    pub async fn count_by_owner(&self, owner_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Vessel::find()
            .filter(entity::vessel::Column::OwnerId.eq(owner_id))
            .count(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    mod count_by_owner_tests {
        use muster_test_utils::prelude::*;

        use crate::server::data::vessel::VesselRepository;

        /// Expect only vessels of the given owner to be counted
        #[tokio::test]
        async fn test_count_by_owner() -> Result<(), TestError> {
            let test =
                test_setup_with_tables!(entity::prelude::Owner, entity::prelude::Vessel)?;
            let repository = VesselRepository::new(&test.state.db);

            let owner = fixtures::fleet::create_owner(&test.state.db, "Nordwind", 7).await?;
            let other = fixtures::fleet::create_owner(&test.state.db, "Meridian", 7).await?;

            fixtures::fleet::create_vessel(&test.state.db, "MV Nordwind", Some(owner.id)).await?;
            fixtures::fleet::create_vessel(&test.state.db, "MV Ostsee", Some(owner.id)).await?;
            fixtures::fleet::create_vessel(&test.state.db, "MV Meridian", Some(other.id)).await?;

            assert_eq!(repository.count_by_owner(owner.id).await?, 2);
            assert_eq!(repository.count_by_owner(other.id).await?, 1);

            Ok(())
        }
    }

    mod list_with_owner_tests {
        use muster_test_utils::prelude::*;

        use crate::server::data::vessel::VesselRepository;

        /// Expect the owner to ride along when linked
        #[tokio::test]
        async fn test_list_with_owner() -> Result<(), TestError> {
            let test =
                test_setup_with_tables!(entity::prelude::Owner, entity::prelude::Vessel)?;
            let repository = VesselRepository::new(&test.state.db);

            let owner = fixtures::fleet::create_owner(&test.state.db, "Nordwind", 7).await?;
            fixtures::fleet::create_vessel(&test.state.db, "MV Nordwind", Some(owner.id)).await?;
            fixtures::fleet::create_vessel(&test.state.db, "MV Orphan", None).await?;

            let listed = repository.list_with_owner().await?;

            assert_eq!(listed.len(), 2);
            let nordwind = listed.iter().find(|(v, _)| v.name == "MV Nordwind").unwrap();
            assert!(nordwind.1.is_some());
            let orphan = listed.iter().find(|(v, _)| v.name == "MV Orphan").unwrap();
            assert!(orphan.1.is_none());

            Ok(())
        }
    }
}
