use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::model::sea_service::{CreateSeaServiceDto, UpdateSeaServiceDto};

pub struct SeaServiceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SeaServiceRepository<'a> {
    /// Creates a new instance of [`SeaServiceRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        dto: &CreateSeaServiceDto,
    ) -> Result<entity::sea_service::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let record = entity::sea_service::ActiveModel {
            crew_id: ActiveValue::Set(dto.crew_id),
            vessel_name: ActiveValue::Set(dto.vessel_name.clone()),
            rank: ActiveValue::Set(dto.rank.clone()),
            grt: ActiveValue::Set(dto.grt),
            dwt: ActiveValue::Set(dto.dwt),
            engine_type: ActiveValue::Set(dto.engine_type.clone()),
            bhp: ActiveValue::Set(dto.bhp),
            company_name: ActiveValue::Set(dto.company_name.clone()),
            flag: ActiveValue::Set(dto.flag.clone()),
            sign_on: ActiveValue::Set(dto.sign_on),
            sign_off: ActiveValue::Set(dto.sign_off),
            remarks: ActiveValue::Set(dto.remarks.clone()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        record.insert(self.db).await
    }

    pub async fn get_by_id(
        &self,
        record_id: i32,
    ) -> Result<Option<entity::sea_service::Model>, DbErr> {
        entity::prelude::SeaService::find_by_id(record_id)
            .one(self.db)
            .await
    }

    /// Lists sea-service records, newest sign-on first.
    pub async fn list(
        &self,
        crew_id: Option<i32>,
    ) -> Result<Vec<entity::sea_service::Model>, DbErr> {
        let mut query = entity::prelude::SeaService::find();

        if let Some(crew_id) = crew_id {
            query = query.filter(entity::sea_service::Column::CrewId.eq(crew_id));
        }

        query
            .order_by_desc(entity::sea_service::Column::SignOn)
            .all(self.db)
            .await
    }

    pub async fn update(
        &self,
        dto: &UpdateSeaServiceDto,
    ) -> Result<Option<entity::sea_service::Model>, DbErr> {
        let Some(record) = self.get_by_id(dto.id).await? else {
            return Ok(None);
        };

        let mut record = record.into_active_model();

        if let Some(vessel_name) = &dto.vessel_name {
            record.vessel_name = ActiveValue::Set(vessel_name.clone());
        }
        if let Some(rank) = &dto.rank {
            record.rank = ActiveValue::Set(rank.clone());
        }
        if let Some(grt) = dto.grt {
            record.grt = ActiveValue::Set(Some(grt));
        }
        if let Some(dwt) = dto.dwt {
            record.dwt = ActiveValue::Set(Some(dwt));
        }
        if let Some(engine_type) = &dto.engine_type {
            record.engine_type = ActiveValue::Set(Some(engine_type.clone()));
        }
        if let Some(bhp) = dto.bhp {
            record.bhp = ActiveValue::Set(Some(bhp));
        }
        if let Some(company_name) = &dto.company_name {
            record.company_name = ActiveValue::Set(Some(company_name.clone()));
        }
        if let Some(flag) = &dto.flag {
            record.flag = ActiveValue::Set(Some(flag.clone()));
        }
        if let Some(sign_on) = dto.sign_on {
            record.sign_on = ActiveValue::Set(Some(sign_on));
        }
        if let Some(sign_off) = dto.sign_off {
            record.sign_off = ActiveValue::Set(Some(sign_off));
        }
        if let Some(remarks) = &dto.remarks {
            record.remarks = ActiveValue::Set(Some(remarks.clone()));
        }
        record.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        record.update(self.db).await.map(Some)
    }

    pub async fn delete(&self, record_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::SeaService::delete_by_id(record_id)
            .exec(self.db)
            .await
    }
}
