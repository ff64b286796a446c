use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use entity::assignment::AssignmentStatus;

pub struct AssignmentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AssignmentRepository<'a> {
    /// Creates a new instance of [`AssignmentRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an ONBOARD assignment for a sign-on.
    pub async fn create_onboard(
        &self,
        crew_id: i32,
        vessel_id: Option<i32>,
        vessel_name: String,
        rank: String,
        sign_on: NaiveDate,
    ) -> Result<entity::assignment::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let assignment = entity::assignment::ActiveModel {
            crew_id: ActiveValue::Set(crew_id),
            vessel_id: ActiveValue::Set(vessel_id),
            vessel_name: ActiveValue::Set(vessel_name),
            rank: ActiveValue::Set(rank),
            status: ActiveValue::Set(AssignmentStatus::Onboard),
            sign_on: ActiveValue::Set(Some(sign_on)),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        assignment.insert(self.db).await
    }

    pub async fn get_by_id(
        &self,
        assignment_id: i32,
    ) -> Result<Option<entity::assignment::Model>, DbErr> {
        entity::prelude::Assignment::find_by_id(assignment_id)
            .one(self.db)
            .await
    }

    pub async fn list(
        &self,
        vessel_id: Option<i32>,
        status: Option<AssignmentStatus>,
    ) -> Result<Vec<entity::assignment::Model>, DbErr> {
        let mut query = entity::prelude::Assignment::find();

        if let Some(vessel_id) = vessel_id {
            query = query.filter(entity::assignment::Column::VesselId.eq(vessel_id));
        }
        if let Some(status) = status {
            query = query.filter(entity::assignment::Column::Status.eq(status));
        }

        query
            .order_by_desc(entity::assignment::Column::SignOn)
            .all(self.db)
            .await
    }

    /// The crew member's current ONBOARD assignment, if any. Application
    /// logic keeps this unique per crew member.
    pub async fn find_onboard_by_crew(
        &self,
        crew_id: i32,
    ) -> Result<Option<entity::assignment::Model>, DbErr> {
        entity::prelude::Assignment::find()
            .filter(entity::assignment::Column::CrewId.eq(crew_id))
            .filter(entity::assignment::Column::Status.eq(AssignmentStatus::Onboard))
            .one(self.db)
            .await
    }

    /// All ONBOARD assignments with their crew member, for contract alerting.
    pub async fn list_onboard_with_crew(
        &self,
    ) -> Result<Vec<(entity::assignment::Model, Option<entity::crew::Model>)>, DbErr> {
        entity::prelude::Assignment::find()
            .filter(entity::assignment::Column::Status.eq(AssignmentStatus::Onboard))
            .find_also_related(entity::crew::Entity)
            .all(self.db)
            .await
    }

    /// Completes an assignment, stamping the sign-off date.
    pub async fn complete(
        &self,
        assignment: entity::assignment::Model,
        sign_off: NaiveDate,
    ) -> Result<entity::assignment::Model, DbErr> {
        let mut assignment = assignment.into_active_model();

        assignment.status = ActiveValue::Set(AssignmentStatus::Completed);
        assignment.sign_off = ActiveValue::Set(Some(sign_off));
        assignment.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        assignment.update(self.db).await
    }

    /// Moves the planned sign-off date of an assignment.
    pub async fn extend(
        &self,
        assignment: entity::assignment::Model,
        new_sign_off: NaiveDate,
    ) -> Result<entity::assignment::Model, DbErr> {
        let mut assignment = assignment.into_active_model();

        assignment.sign_off = ActiveValue::Set(Some(new_sign_off));
        assignment.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        assignment.update(self.db).await
    }
}

#[cfg(test)]
mod tests {
    mod find_onboard_tests {
        use chrono::NaiveDate;
        use entity::assignment::AssignmentStatus;
        use entity::crew::CrewStatus;
        use muster_test_utils::prelude::*;

        use crate::server::data::assignment::AssignmentRepository;

        /// Expect only the ONBOARD assignment of the crew member
        #[tokio::test]
        async fn test_find_onboard_by_crew() -> Result<(), TestError> {
            let test = test_setup_with_tables!(
                entity::prelude::Crew,
                entity::prelude::Owner,
                entity::prelude::Vessel,
                entity::prelude::Assignment,
            )?;
            let repository = AssignmentRepository::new(&test.state.db);

            let crew =
                fixtures::crew::create_crew(&test.state.db, "HGF-0001", CrewStatus::Onboard)
                    .await?;
            let vessel = fixtures::fleet::create_vessel(&test.state.db, "MV Nordwind", None).await?;

            let sign_on = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
            fixtures::fleet::create_assignment(
                &test.state.db,
                crew.id,
                &vessel,
                AssignmentStatus::Completed,
                Some(sign_on),
            )
            .await?;
            let onboard = fixtures::fleet::create_assignment(
                &test.state.db,
                crew.id,
                &vessel,
                AssignmentStatus::Onboard,
                Some(sign_on),
            )
            .await?;

            let found = repository.find_onboard_by_crew(crew.id).await?;

            assert_eq!(found.map(|a| a.id), Some(onboard.id));

            Ok(())
        }
    }

    mod complete_tests {
        use chrono::NaiveDate;
        use entity::assignment::AssignmentStatus;
        use entity::crew::CrewStatus;
        use muster_test_utils::prelude::*;

        use crate::server::data::assignment::AssignmentRepository;

        /// Expect COMPLETED status and the sign-off date stamped
        #[tokio::test]
        async fn test_complete_assignment() -> Result<(), TestError> {
            let test = test_setup_with_tables!(
                entity::prelude::Crew,
                entity::prelude::Owner,
                entity::prelude::Vessel,
                entity::prelude::Assignment,
            )?;
            let repository = AssignmentRepository::new(&test.state.db);

            let crew =
                fixtures::crew::create_crew(&test.state.db, "HGF-0001", CrewStatus::Onboard)
                    .await?;
            let vessel = fixtures::fleet::create_vessel(&test.state.db, "MV Nordwind", None).await?;
            let assignment = fixtures::fleet::create_assignment(
                &test.state.db,
                crew.id,
                &vessel,
                AssignmentStatus::Onboard,
                NaiveDate::from_ymd_opt(2026, 1, 15),
            )
            .await?;

            let sign_off = NaiveDate::from_ymd_opt(2026, 8, 15).unwrap();
            let completed = repository.complete(assignment, sign_off).await?;

            assert_eq!(completed.status, AssignmentStatus::Completed);
            assert_eq!(completed.sign_off, Some(sign_off));

            Ok(())
        }
    }
}
