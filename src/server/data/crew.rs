use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use entity::crew::CrewStatus;

use crate::model::crew::{CreateCrewDto, UpdateCrewDto};

/// Field updates applied together with a crew status change. The status
/// machine decides which effects a transition carries.
#[derive(Default)]
pub struct StatusEffects {
    pub stamp_last_offboard: bool,
    pub mark_reported_to_office: bool,
    pub set_inactive_reason: Option<String>,
    pub clear_inactive_reason: bool,
    pub clear_vessel: bool,
    pub offboard_notes: Option<String>,
}

pub struct CrewRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CrewRepository<'a> {
    /// Creates a new instance of [`CrewRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new crew member; new entries always start as APPLICANT.
    pub async fn create(&self, dto: &CreateCrewDto) -> Result<entity::crew::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let crew = entity::crew::ActiveModel {
            crew_code: ActiveValue::Set(dto.crew_code.clone()),
            full_name: ActiveValue::Set(dto.full_name.clone()),
            rank: ActiveValue::Set(dto.rank.clone()),
            crew_status: ActiveValue::Set(CrewStatus::Applicant),
            date_of_birth: ActiveValue::Set(dto.date_of_birth),
            place_of_birth: ActiveValue::Set(dto.place_of_birth.clone()),
            nationality: ActiveValue::Set(dto.nationality.clone()),
            religion: ActiveValue::Set(dto.religion.clone()),
            marital_status: ActiveValue::Set(dto.marital_status.clone()),
            address: ActiveValue::Set(dto.address.clone()),
            phone: ActiveValue::Set(dto.phone.clone()),
            email: ActiveValue::Set(dto.email.clone()),
            reported_to_office: ActiveValue::Set(false),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        crew.insert(self.db).await
    }

    pub async fn get_by_id(&self, crew_id: i32) -> Result<Option<entity::crew::Model>, DbErr> {
        entity::prelude::Crew::find_by_id(crew_id).one(self.db).await
    }

    pub async fn get_by_code(&self, crew_code: &str) -> Result<Option<entity::crew::Model>, DbErr> {
        entity::prelude::Crew::find()
            .filter(entity::crew::Column::CrewCode.eq(crew_code))
            .one(self.db)
            .await
    }

    /// Lists crew, optionally filtered by status and a case-insensitive
    /// search over crew code and full name.
    pub async fn list(
        &self,
        status: Option<CrewStatus>,
        search: Option<&str>,
    ) -> Result<Vec<entity::crew::Model>, DbErr> {
        let mut query = entity::prelude::Crew::find();

        if let Some(status) = status {
            query = query.filter(entity::crew::Column::CrewStatus.eq(status));
        }
        if let Some(term) = search {
            let pattern = format!("%{}%", term);
            query = query.filter(
                Condition::any()
                    .add(entity::crew::Column::CrewCode.like(&pattern))
                    .add(entity::crew::Column::FullName.like(&pattern)),
            );
        }

        query
            .order_by_asc(entity::crew::Column::CrewCode)
            .all(self.db)
            .await
    }

    /// Updates profile fields; `None` fields are left unchanged. Returns
    /// `None` if the crew member does not exist.
    pub async fn update(
        &self,
        crew_id: i32,
        dto: &UpdateCrewDto,
    ) -> Result<Option<entity::crew::Model>, DbErr> {
        let Some(crew) = self.get_by_id(crew_id).await? else {
            return Ok(None);
        };

        let mut crew = crew.into_active_model();

        if let Some(full_name) = &dto.full_name {
            crew.full_name = ActiveValue::Set(full_name.clone());
        }
        if let Some(rank) = &dto.rank {
            crew.rank = ActiveValue::Set(rank.clone());
        }
        if let Some(date_of_birth) = dto.date_of_birth {
            crew.date_of_birth = ActiveValue::Set(Some(date_of_birth));
        }
        if let Some(place_of_birth) = &dto.place_of_birth {
            crew.place_of_birth = ActiveValue::Set(Some(place_of_birth.clone()));
        }
        if let Some(nationality) = &dto.nationality {
            crew.nationality = ActiveValue::Set(Some(nationality.clone()));
        }
        if let Some(religion) = &dto.religion {
            crew.religion = ActiveValue::Set(Some(religion.clone()));
        }
        if let Some(marital_status) = &dto.marital_status {
            crew.marital_status = ActiveValue::Set(Some(marital_status.clone()));
        }
        if let Some(address) = &dto.address {
            crew.address = ActiveValue::Set(Some(address.clone()));
        }
        if let Some(phone) = &dto.phone {
            crew.phone = ActiveValue::Set(Some(phone.clone()));
        }
        if let Some(email) = &dto.email {
            crew.email = ActiveValue::Set(Some(email.clone()));
        }
        crew.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        crew.update(self.db).await.map(Some)
    }

    /// Moves a crew member to a new status, applying the transition's side
    /// effects in the same update.
    pub async fn apply_status_change(
        &self,
        crew: entity::crew::Model,
        new_status: CrewStatus,
        effects: StatusEffects,
    ) -> Result<entity::crew::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let mut crew = crew.into_active_model();

        crew.crew_status = ActiveValue::Set(new_status);

        if effects.stamp_last_offboard {
            crew.last_offboard_date = ActiveValue::Set(Some(now));
        }
        if effects.mark_reported_to_office {
            crew.reported_to_office = ActiveValue::Set(true);
            crew.reported_to_office_date = ActiveValue::Set(Some(now));
        }
        if let Some(reason) = effects.set_inactive_reason {
            crew.inactive_reason = ActiveValue::Set(Some(reason));
        } else if effects.clear_inactive_reason {
            crew.inactive_reason = ActiveValue::Set(None);
        }
        if effects.clear_vessel {
            crew.vessel = ActiveValue::Set(None);
        }
        if let Some(notes) = effects.offboard_notes {
            crew.offboard_notes = ActiveValue::Set(Some(notes));
        }
        crew.updated_at = ActiveValue::Set(now);

        crew.update(self.db).await
    }

    /// Puts a crew member onboard the named vessel. Used by assignment
    /// sign-on, which bypasses the request-level status machine.
    pub async fn set_onboard(
        &self,
        crew: entity::crew::Model,
        vessel_name: &str,
    ) -> Result<entity::crew::Model, DbErr> {
        let mut crew = crew.into_active_model();

        crew.crew_status = ActiveValue::Set(CrewStatus::Onboard);
        crew.vessel = ActiveValue::Set(Some(vessel_name.to_string()));
        crew.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        crew.update(self.db).await
    }

    /// Sets the bare status with no side effects. Used by the application
    /// approval chain when an accepted applicant becomes APPROVED crew.
    pub async fn set_status(
        &self,
        crew: entity::crew::Model,
        new_status: CrewStatus,
    ) -> Result<entity::crew::Model, DbErr> {
        let mut crew = crew.into_active_model();

        crew.crew_status = ActiveValue::Set(new_status);
        crew.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        crew.update(self.db).await
    }
}

#[cfg(test)]
mod tests {
    use crate::model::crew::CreateCrewDto;

    fn create_dto(crew_code: &str) -> CreateCrewDto {
        CreateCrewDto {
            crew_code: crew_code.to_string(),
            full_name: "Arief Santoso".to_string(),
            rank: "AB".to_string(),
            date_of_birth: None,
            place_of_birth: None,
            nationality: Some("Indonesian".to_string()),
            religion: None,
            marital_status: None,
            address: None,
            phone: None,
            email: None,
        }
    }

    mod create_tests {
        use entity::crew::CrewStatus;
        use muster_test_utils::prelude::*;

        use crate::server::data::crew::{tests::create_dto, CrewRepository};

        /// Expect new crew to start as APPLICANT
        #[tokio::test]
        async fn test_create_crew_starts_as_applicant() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::Crew)?;
            let repository = CrewRepository::new(&test.state.db);

            let crew = repository.create(&create_dto("HGF-0001")).await?;

            assert_eq!(crew.crew_status, CrewStatus::Applicant);
            assert!(!crew.reported_to_office);

            Ok(())
        }

        /// Expect Error when the crew code is already taken
        #[tokio::test]
        async fn test_create_crew_duplicate_code() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::Crew)?;
            let repository = CrewRepository::new(&test.state.db);

            repository.create(&create_dto("HGF-0001")).await?;
            let result = repository.create(&create_dto("HGF-0001")).await;

            assert!(result.is_err());

            Ok(())
        }
    }

    mod list_tests {
        use entity::crew::CrewStatus;
        use muster_test_utils::prelude::*;

        use crate::server::data::crew::CrewRepository;

        /// Expect status filter to narrow the list
        #[tokio::test]
        async fn test_list_filtered_by_status() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::Crew)?;
            let repository = CrewRepository::new(&test.state.db);

            fixtures::crew::create_crew(&test.state.db, "HGF-0001", CrewStatus::Standby).await?;
            fixtures::crew::create_crew(&test.state.db, "HGF-0002", CrewStatus::Onboard).await?;

            let standby = repository.list(Some(CrewStatus::Standby), None).await?;

            assert_eq!(standby.len(), 1);
            assert_eq!(standby[0].crew_code, "HGF-0001");

            Ok(())
        }

        /// Expect search to match on crew code
        #[tokio::test]
        async fn test_list_search_by_code() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::Crew)?;
            let repository = CrewRepository::new(&test.state.db);

            fixtures::crew::create_crew(&test.state.db, "HGF-0001", CrewStatus::Standby).await?;
            fixtures::crew::create_crew(&test.state.db, "HGF-0042", CrewStatus::Standby).await?;

            let found = repository.list(None, Some("0042")).await?;

            assert_eq!(found.len(), 1);
            assert_eq!(found[0].crew_code, "HGF-0042");

            Ok(())
        }
    }

    mod status_change_tests {
        use entity::crew::CrewStatus;
        use muster_test_utils::prelude::*;

        use crate::server::data::crew::{CrewRepository, StatusEffects};

        /// Expect side-effect fields to be written together with the status
        #[tokio::test]
        async fn test_apply_status_change_effects() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::Crew)?;
            let repository = CrewRepository::new(&test.state.db);

            let crew =
                fixtures::crew::create_crew(&test.state.db, "HGF-0001", CrewStatus::Onboard)
                    .await?;

            let updated = repository
                .apply_status_change(
                    crew,
                    CrewStatus::SignOff,
                    StatusEffects {
                        stamp_last_offboard: true,
                        clear_vessel: true,
                        offboard_notes: Some("end of contract".to_string()),
                        ..Default::default()
                    },
                )
                .await?;

            assert_eq!(updated.crew_status, CrewStatus::SignOff);
            assert!(updated.last_offboard_date.is_some());
            assert!(updated.vessel.is_none());
            assert_eq!(updated.offboard_notes.as_deref(), Some("end of contract"));

            Ok(())
        }
    }
}
