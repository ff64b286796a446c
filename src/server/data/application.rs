use chrono::{NaiveDateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use entity::approval_decision::ApprovalAction;
use entity::employment_application::ApplicationStatus;
use entity::staff_user::StaffRole;

pub struct ApplicationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ApplicationRepository<'a> {
    /// Creates a new instance of [`ApplicationRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an application at level 1 in status APPLIED. `notes` is the
    /// serialized metadata blob, already validated by the service layer.
    pub async fn create(
        &self,
        crew_id: i32,
        applied_rank: String,
        notes: Option<String>,
    ) -> Result<entity::employment_application::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let application = entity::employment_application::ActiveModel {
            crew_id: ActiveValue::Set(crew_id),
            applied_rank: ActiveValue::Set(applied_rank),
            status: ActiveValue::Set(ApplicationStatus::Applied),
            current_approval_level: ActiveValue::Set(1),
            application_date: ActiveValue::Set(now.date()),
            notes: ActiveValue::Set(notes),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        application.insert(self.db).await
    }

    pub async fn get_by_id(
        &self,
        application_id: i32,
    ) -> Result<Option<entity::employment_application::Model>, DbErr> {
        entity::prelude::EmploymentApplication::find_by_id(application_id)
            .one(self.db)
            .await
    }

    pub async fn get_with_crew(
        &self,
        application_id: i32,
    ) -> Result<
        Option<(
            entity::employment_application::Model,
            Option<entity::crew::Model>,
        )>,
        DbErr,
    > {
        entity::prelude::EmploymentApplication::find_by_id(application_id)
            .find_also_related(entity::crew::Entity)
            .one(self.db)
            .await
    }

    /// Lists applications with their applicant, newest first.
    pub async fn list_with_crew(
        &self,
        status: Option<ApplicationStatus>,
    ) -> Result<
        Vec<(
            entity::employment_application::Model,
            Option<entity::crew::Model>,
        )>,
        DbErr,
    > {
        let mut query = entity::prelude::EmploymentApplication::find();

        if let Some(status) = status {
            query = query.filter(entity::employment_application::Column::Status.eq(status));
        }

        query
            .find_also_related(entity::crew::Entity)
            .order_by_desc(entity::employment_application::Column::ApplicationDate)
            .all(self.db)
            .await
    }

    /// The crew member's most recent application, if any.
    pub async fn latest_for_crew(
        &self,
        crew_id: i32,
    ) -> Result<Option<entity::employment_application::Model>, DbErr> {
        entity::prelude::EmploymentApplication::find()
            .filter(entity::employment_application::Column::CrewId.eq(crew_id))
            .order_by_desc(entity::employment_application::Column::Id)
            .one(self.db)
            .await
    }

    /// Recorded decisions, lowest level first.
    pub async fn decisions_for(
        &self,
        application_id: i32,
    ) -> Result<Vec<entity::approval_decision::Model>, DbErr> {
        entity::prelude::ApprovalDecision::find()
            .filter(entity::approval_decision::Column::ApplicationId.eq(application_id))
            .order_by_asc(entity::approval_decision::Column::Level)
            .all(self.db)
            .await
    }

    /// Records one level's decision together with the deciding user. The
    /// unique (application_id, level) index turns a concurrent double
    /// decision into a constraint error.
    pub async fn insert_decision(
        &self,
        application_id: i32,
        level: i32,
        role: StaffRole,
        decision: ApprovalAction,
        comments: Option<String>,
        decided_by: i32,
    ) -> Result<entity::approval_decision::Model, DbErr> {
        let row = entity::approval_decision::ActiveModel {
            application_id: ActiveValue::Set(application_id),
            level: ActiveValue::Set(level),
            role: ActiveValue::Set(role),
            decision: ActiveValue::Set(decision),
            comments: ActiveValue::Set(comments),
            decided_by: ActiveValue::Set(decided_by),
            decided_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        row.insert(self.db).await
    }

    /// Audit trail, oldest first.
    pub async fn history_for(
        &self,
        application_id: i32,
    ) -> Result<Vec<entity::approval_history::Model>, DbErr> {
        entity::prelude::ApprovalHistory::find()
            .filter(entity::approval_history::Column::ApplicationId.eq(application_id))
            .order_by_asc(entity::approval_history::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn insert_history(
        &self,
        application_id: i32,
        user_id: i32,
        user_role: StaffRole,
        action: ApprovalAction,
        comments: Option<String>,
        created_by: String,
    ) -> Result<entity::approval_history::Model, DbErr> {
        let row = entity::approval_history::ActiveModel {
            application_id: ActiveValue::Set(application_id),
            user_id: ActiveValue::Set(user_id),
            user_role: ActiveValue::Set(user_role),
            action: ActiveValue::Set(action),
            comments: ActiveValue::Set(comments),
            created_by: ActiveValue::Set(created_by),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        row.insert(self.db).await
    }

    /// Applies one approval step's outcome to the application row. `None`
    /// fields are left untouched.
    pub async fn update_progress(
        &self,
        application: entity::employment_application::Model,
        status: ApplicationStatus,
        current_approval_level: i32,
        rejection_reason: Option<String>,
        offered_date: Option<NaiveDateTime>,
        accepted_date: Option<NaiveDateTime>,
    ) -> Result<entity::employment_application::Model, DbErr> {
        let mut application = application.into_active_model();

        application.status = ActiveValue::Set(status);
        application.current_approval_level = ActiveValue::Set(current_approval_level);

        if let Some(reason) = rejection_reason {
            application.rejection_reason = ActiveValue::Set(Some(reason));
        }
        if let Some(offered) = offered_date {
            application.offered_date = ActiveValue::Set(Some(offered));
        }
        if let Some(accepted) = accepted_date {
            application.accepted_date = ActiveValue::Set(Some(accepted));
        }
        application.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        application.update(self.db).await
    }
}

#[cfg(test)]
mod tests {
    mod insert_decision_tests {
        use entity::approval_decision::ApprovalAction;
        use entity::crew::CrewStatus;
        use entity::employment_application::ApplicationStatus;
        use entity::staff_user::StaffRole;
        use muster_test_utils::prelude::*;
        use sea_orm::sea_query::Index;
        use sea_orm::ConnectionTrait;

        use crate::server::data::application::ApplicationRepository;

        /// Expect a second decision at the same level to hit the unique index
        #[tokio::test]
        async fn test_insert_decision_duplicate_level() -> Result<(), TestError> {
            let test = test_setup_with_staff_tables!()?;

            // Schema-from-entity setup creates tables only; the unique
            // (application_id, level) index lives in the migration, so the
            // test creates it the same way.
            let index = Index::create()
                .name("idx-approval_decision-application_id-level")
                .table(entity::approval_decision::Entity)
                .col(entity::approval_decision::Column::ApplicationId)
                .col(entity::approval_decision::Column::Level)
                .unique()
                .to_owned();
            test.state.db.execute(&index).await?;

            let repository = ApplicationRepository::new(&test.state.db);

            let crew =
                fixtures::crew::create_crew(&test.state.db, "HGF-0001", CrewStatus::Applicant)
                    .await?;
            let user = fixtures::staff::create_staff_user(
                &test.state.db,
                "crewing",
                StaffRole::CrewingManager,
            )
            .await?;
            let application = fixtures::application::create_application(
                &test.state.db,
                crew.id,
                ApplicationStatus::Applied,
                1,
            )
            .await?;

            repository
                .insert_decision(
                    application.id,
                    1,
                    StaffRole::CrewingManager,
                    ApprovalAction::Approved,
                    None,
                    user.id,
                )
                .await?;

            let duplicate = repository
                .insert_decision(
                    application.id,
                    1,
                    StaffRole::CrewingManager,
                    ApprovalAction::Rejected,
                    None,
                    user.id,
                )
                .await;

            assert!(duplicate.is_err());

            Ok(())
        }
    }

    mod history_tests {
        use entity::approval_decision::ApprovalAction;
        use entity::crew::CrewStatus;
        use entity::employment_application::ApplicationStatus;
        use entity::staff_user::StaffRole;
        use muster_test_utils::prelude::*;

        use crate::server::data::application::ApplicationRepository;

        /// Expect history rows back in insertion order
        #[tokio::test]
        async fn test_history_oldest_first() -> Result<(), TestError> {
            let test = test_setup_with_staff_tables!()?;
            let repository = ApplicationRepository::new(&test.state.db);

            let crew =
                fixtures::crew::create_crew(&test.state.db, "HGF-0001", CrewStatus::Applicant)
                    .await?;
            let user = fixtures::staff::create_staff_user(
                &test.state.db,
                "crewing",
                StaffRole::CrewingManager,
            )
            .await?;
            let application = fixtures::application::create_application(
                &test.state.db,
                crew.id,
                ApplicationStatus::Applied,
                1,
            )
            .await?;

            repository
                .insert_history(
                    application.id,
                    user.id,
                    StaffRole::CrewingManager,
                    ApprovalAction::Approved,
                    Some("first".to_string()),
                    user.full_name.clone(),
                )
                .await?;
            repository
                .insert_history(
                    application.id,
                    user.id,
                    StaffRole::CrewingManager,
                    ApprovalAction::Approved,
                    Some("second".to_string()),
                    user.full_name.clone(),
                )
                .await?;

            let history = repository.history_for(application.id).await?;

            assert_eq!(history.len(), 2);
            assert_eq!(history[0].comments.as_deref(), Some("first"));
            assert_eq!(history[1].comments.as_deref(), Some("second"));

            Ok(())
        }
    }
}
