//! Four-level approval chain for employment applications.
//!
//! Level 1 is the crewing manager, level 2 the expert staff, level 3 the
//! director, level 4 the director acting as principal. A terminal
//! application (ACCEPTED or REJECTED) never moves again.

use chrono::Utc;
use sea_orm::{ActiveEnum, DatabaseConnection};

use entity::approval_decision::ApprovalAction;
use entity::employment_application::ApplicationStatus;
use entity::staff_user::StaffRole;

use crate::model::application::{
    ApplicationDto, ApplicationMetadata, ApprovalHistoryDto, ApprovalRequestDto, ApprovalResultDto,
    ApprovalSlotDto, ApprovalStatusDto, CreateApplicationDto,
};
use crate::server::data::application::ApplicationRepository;
use crate::server::data::crew::CrewRepository;
use crate::server::data::staff_user::StaffUserRepository;
use crate::server::error::{AuthError, Error};

pub const MAX_APPROVAL_LEVEL: i32 = 4;

/// The role that has to act at a given approval level.
pub fn role_for_level(level: i32) -> Option<StaffRole> {
    match level {
        1 => Some(StaffRole::CrewingManager),
        2 => Some(StaffRole::ExpertStaff),
        3 | 4 => Some(StaffRole::Director),
        _ => None,
    }
}

/// Parses the stored metadata blob; a notes column that does not hold valid
/// metadata fails the request rather than silently dropping data.
pub fn parse_metadata(notes: Option<&str>) -> Result<Option<ApplicationMetadata>, Error> {
    notes
        .map(|raw| {
            serde_json::from_str(raw).map_err(|err| {
                Error::Validation(format!("Malformed application metadata: {err}"))
            })
        })
        .transpose()
}

pub struct ApprovalService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ApprovalService<'a> {
    /// Creates a new instance of [`ApprovalService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an application for an existing crew member at level 1.
    pub async fn create(&self, dto: CreateApplicationDto) -> Result<ApplicationDto, Error> {
        let crew_repo = CrewRepository::new(self.db);
        let crew = crew_repo
            .get_by_id(dto.crew_id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("Crew {}", dto.crew_id)))?;

        let notes = dto
            .metadata
            .as_ref()
            .map(serde_json::to_string)
            .transpose()?;

        let repository = ApplicationRepository::new(self.db);
        let application = repository.create(dto.crew_id, dto.applied_rank, notes).await?;

        Ok(ApplicationDto::from_model(
            application,
            Some(crew.full_name),
            dto.metadata,
        ))
    }

    /// Lists applications, optionally narrowed to one status.
    pub async fn list(&self, status: Option<&str>) -> Result<Vec<ApplicationDto>, Error> {
        let status = status
            .map(|raw| {
                ApplicationStatus::try_from_value(&raw.to_string())
                    .map_err(|_| Error::Validation(format!("Unknown application status {raw}")))
            })
            .transpose()?;

        let repository = ApplicationRepository::new(self.db);
        let rows = repository.list_with_crew(status).await?;

        rows.into_iter()
            .map(|(application, crew)| {
                let metadata = parse_metadata(application.notes.as_deref())?;
                Ok(ApplicationDto::from_model(
                    application,
                    crew.map(|c| c.full_name),
                    metadata,
                ))
            })
            .collect()
    }

    pub async fn get(&self, application_id: i32) -> Result<ApplicationDto, Error> {
        let repository = ApplicationRepository::new(self.db);
        let (application, crew) = repository
            .get_with_crew(application_id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("Application {application_id}")))?;

        let metadata = parse_metadata(application.notes.as_deref())?;

        Ok(ApplicationDto::from_model(
            application,
            crew.map(|c| c.full_name),
            metadata,
        ))
    }

    /// The approval view: application summary, the four-slot chain with
    /// PENDING placeholders, whether `actor` can act, and the audit trail.
    pub async fn status(
        &self,
        application_id: i32,
        actor: &entity::staff_user::Model,
    ) -> Result<ApprovalStatusDto, Error> {
        let repository = ApplicationRepository::new(self.db);
        let staff_repo = StaffUserRepository::new(self.db);

        let (application, crew) = repository
            .get_with_crew(application_id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("Application {application_id}")))?;

        let decisions = repository.decisions_for(application_id).await?;

        let mut chain = Vec::with_capacity(MAX_APPROVAL_LEVEL as usize);
        for level in 1..=MAX_APPROVAL_LEVEL {
            let role = role_for_level(level).unwrap_or(StaffRole::Director);

            match decisions.iter().find(|d| d.level == level) {
                Some(decision) => {
                    let decided_by = staff_repo
                        .get_by_id(decision.decided_by)
                        .await?
                        .map(|user| user.full_name);

                    chain.push(ApprovalSlotDto {
                        level,
                        role: decision.role.to_value(),
                        decision: decision.decision.to_value(),
                        comments: decision.comments.clone(),
                        decided_by,
                        decided_at: Some(decision.decided_at),
                    });
                }
                None => chain.push(ApprovalSlotDto {
                    level,
                    role: role.to_value(),
                    decision: "PENDING".to_string(),
                    comments: None,
                    decided_by: None,
                    decided_at: None,
                }),
            }
        }

        let terminal = matches!(
            application.status,
            ApplicationStatus::Accepted | ApplicationStatus::Rejected
        );
        let can_act =
            !terminal && role_for_level(application.current_approval_level) == Some(actor.role);

        let history = repository
            .history_for(application_id)
            .await?
            .into_iter()
            .map(ApprovalHistoryDto::from)
            .collect();

        let metadata = parse_metadata(application.notes.as_deref())?;

        Ok(ApprovalStatusDto {
            application: ApplicationDto::from_model(
                application,
                crew.map(|c| c.full_name),
                metadata,
            ),
            chain,
            can_act,
            history,
        })
    }

    /// Applies one approval action on behalf of `actor`.
    pub async fn act(
        &self,
        application_id: i32,
        actor: &entity::staff_user::Model,
        dto: ApprovalRequestDto,
    ) -> Result<ApprovalResultDto, Error> {
        let action = ApprovalAction::try_from_value(&dto.action)
            .map_err(|_| Error::Validation(format!("Unknown approval action {}", dto.action)))?;

        let repository = ApplicationRepository::new(self.db);
        let application = repository
            .get_by_id(application_id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("Application {application_id}")))?;

        // Terminal guard comes before the role guard so a director probing a
        // settled application still gets the state conflict.
        if matches!(
            application.status,
            ApplicationStatus::Accepted | ApplicationStatus::Rejected
        ) {
            return Err(Error::Conflict(format!(
                "Application {} is already {}",
                application_id,
                application.status.to_value()
            )));
        }

        let level = application.current_approval_level;
        let expected_role = role_for_level(level).ok_or_else(|| {
            Error::Conflict(format!("Application {application_id} has no pending level"))
        })?;

        if actor.role != expected_role {
            return Err(AuthError::Forbidden {
                role: actor.role.to_value(),
                action: format!("decide approval level {level}"),
            }
            .into());
        }

        repository
            .insert_decision(
                application_id,
                level,
                actor.role,
                action,
                dto.comments.clone(),
                actor.id,
            )
            .await?;

        let now = Utc::now().naive_utc();
        let updated = match action {
            ApprovalAction::Rejected => {
                let reason = dto
                    .comments
                    .clone()
                    .filter(|c| !c.is_empty())
                    .unwrap_or_else(|| format!("Rejected by {}", actor.role.to_value()));

                repository
                    .update_progress(
                        application,
                        ApplicationStatus::Rejected,
                        level,
                        Some(reason),
                        None,
                        None,
                    )
                    .await?
            }
            ApprovalAction::Approved => match level {
                1 => {
                    repository
                        .update_progress(
                            application,
                            ApplicationStatus::Shortlisted,
                            2,
                            None,
                            None,
                            None,
                        )
                        .await?
                }
                2 => {
                    repository
                        .update_progress(
                            application,
                            ApplicationStatus::Interview,
                            3,
                            None,
                            None,
                            None,
                        )
                        .await?
                }
                3 => {
                    repository
                        .update_progress(
                            application,
                            ApplicationStatus::Approved,
                            4,
                            None,
                            Some(now),
                            None,
                        )
                        .await?
                }
                _ => {
                    let accepted = repository
                        .update_progress(
                            application,
                            ApplicationStatus::Accepted,
                            level,
                            None,
                            None,
                            Some(now),
                        )
                        .await?;

                    // Final acceptance flips the applicant to APPROVED crew.
                    let crew_repo = CrewRepository::new(self.db);
                    if let Some(crew) = crew_repo.get_by_id(accepted.crew_id).await? {
                        crew_repo
                            .set_status(crew, entity::crew::CrewStatus::Approved)
                            .await?;
                    }

                    accepted
                }
            },
        };

        repository
            .insert_history(
                application_id,
                actor.id,
                actor.role,
                action,
                dto.comments,
                actor.full_name.clone(),
            )
            .await?;

        tracing::info!(
            application_id,
            level,
            action = action.to_value(),
            by = actor.username,
            status = updated.status.to_value(),
            "approval action recorded"
        );

        let message = match action {
            ApprovalAction::Approved => format!("Application approved at level {level}"),
            ApprovalAction::Rejected => format!("Application rejected at level {level}"),
        };

        Ok(ApprovalResultDto {
            success: true,
            message,
            status: updated.status.to_value(),
            current_approval_level: updated.current_approval_level,
        })
    }
}

#[cfg(test)]
mod tests {
    use entity::staff_user::StaffRole;
    use muster_test_utils::prelude::*;
    use sea_orm::DatabaseConnection;

    use crate::model::application::ApprovalRequestDto;

    async fn staff(
        db: &DatabaseConnection,
    ) -> Result<
        (
            entity::staff_user::Model,
            entity::staff_user::Model,
            entity::staff_user::Model,
        ),
        TestError,
    > {
        let crewing =
            fixtures::staff::create_staff_user(db, "crewing", StaffRole::CrewingManager).await?;
        let expert =
            fixtures::staff::create_staff_user(db, "expert", StaffRole::ExpertStaff).await?;
        let director =
            fixtures::staff::create_staff_user(db, "director", StaffRole::Director).await?;

        Ok((crewing, expert, director))
    }

    fn approve() -> ApprovalRequestDto {
        ApprovalRequestDto {
            action: "APPROVED".to_string(),
            comments: None,
        }
    }

    fn reject(comments: Option<&str>) -> ApprovalRequestDto {
        ApprovalRequestDto {
            action: "REJECTED".to_string(),
            comments: comments.map(str::to_string),
        }
    }

    mod act_tests {
        use entity::crew::CrewStatus;
        use entity::employment_application::ApplicationStatus;
        use muster_test_utils::prelude::*;
        use sea_orm::EntityTrait;

        use crate::server::error::Error;
        use crate::server::service::approval::tests::{approve, reject, staff};
        use crate::server::service::approval::ApprovalService;

        /// Expect the full chain: four approvals end in ACCEPTED with the
        /// crew member flipped to APPROVED and four audit rows.
        #[tokio::test]
        async fn test_full_approval_chain() -> Result<(), TestError> {
            let test = test_setup_with_staff_tables!()?;
            let service = ApprovalService::new(&test.state.db);
            let (crewing, expert, director) = staff(&test.state.db).await?;

            let crew =
                fixtures::crew::create_crew(&test.state.db, "HGF-0001", CrewStatus::Applicant)
                    .await?;
            let application = fixtures::application::create_application(
                &test.state.db,
                crew.id,
                ApplicationStatus::Applied,
                1,
            )
            .await?;

            let step = service.act(application.id, &crewing, approve()).await.unwrap();
            assert_eq!(step.status, "SHORTLISTED");
            assert_eq!(step.current_approval_level, 2);

            let step = service.act(application.id, &expert, approve()).await.unwrap();
            assert_eq!(step.status, "INTERVIEW");
            assert_eq!(step.current_approval_level, 3);

            let step = service.act(application.id, &director, approve()).await.unwrap();
            assert_eq!(step.status, "APPROVED");
            assert_eq!(step.current_approval_level, 4);

            let step = service.act(application.id, &director, approve()).await.unwrap();
            assert_eq!(step.status, "ACCEPTED");
            assert_eq!(step.current_approval_level, 4);

            let application =
                entity::prelude::EmploymentApplication::find_by_id(application.id)
                    .one(&test.state.db)
                    .await?
                    .unwrap();
            assert_eq!(application.status, ApplicationStatus::Accepted);
            assert!(application.accepted_date.is_some());
            assert!(application.offered_date.is_some());

            let crew = entity::prelude::Crew::find_by_id(crew.id)
                .one(&test.state.db)
                .await?
                .unwrap();
            assert_eq!(crew.crew_status, CrewStatus::Approved);

            let history = entity::prelude::ApprovalHistory::find()
                .all(&test.state.db)
                .await?;
            assert_eq!(history.len(), 4);
            assert!(history.iter().all(|row| !row.created_by.is_empty()));

            Ok(())
        }

        /// Expect a level-2 approval by EXPERT_STAFF to land on level 3 in
        /// INTERVIEW with exactly one history row carrying that role.
        #[tokio::test]
        async fn test_level_two_approval() -> Result<(), TestError> {
            let test = test_setup_with_staff_tables!()?;
            let service = ApprovalService::new(&test.state.db);
            let (_, expert, _) = staff(&test.state.db).await?;

            let crew =
                fixtures::crew::create_crew(&test.state.db, "HGF-0001", CrewStatus::Applicant)
                    .await?;
            let application = fixtures::application::create_application(
                &test.state.db,
                crew.id,
                ApplicationStatus::Shortlisted,
                2,
            )
            .await?;

            let result = service.act(application.id, &expert, approve()).await.unwrap();

            assert_eq!(result.status, "INTERVIEW");
            assert_eq!(result.current_approval_level, 3);

            let history = entity::prelude::ApprovalHistory::find()
                .all(&test.state.db)
                .await?;
            assert_eq!(history.len(), 1);
            assert_eq!(
                history[0].user_role,
                entity::staff_user::StaffRole::ExpertStaff
            );

            Ok(())
        }

        /// Expect a role/level mismatch to change nothing and fail 403
        #[tokio::test]
        async fn test_wrong_role_leaves_state_unchanged() -> Result<(), TestError> {
            let test = test_setup_with_staff_tables!()?;
            let service = ApprovalService::new(&test.state.db);
            let (_, expert, _) = staff(&test.state.db).await?;

            let crew =
                fixtures::crew::create_crew(&test.state.db, "HGF-0001", CrewStatus::Applicant)
                    .await?;
            let application = fixtures::application::create_application(
                &test.state.db,
                crew.id,
                ApplicationStatus::Applied,
                1,
            )
            .await?;

            let result = service.act(application.id, &expert, approve()).await;
            assert!(matches!(result, Err(Error::AuthError(_))));

            let application =
                entity::prelude::EmploymentApplication::find_by_id(application.id)
                    .one(&test.state.db)
                    .await?
                    .unwrap();
            assert_eq!(application.status, ApplicationStatus::Applied);
            assert_eq!(application.current_approval_level, 1);

            let decisions = entity::prelude::ApprovalDecision::find()
                .all(&test.state.db)
                .await?;
            assert!(decisions.is_empty());

            Ok(())
        }

        /// Expect rejection to freeze the level and default the reason
        #[tokio::test]
        async fn test_rejection_freezes_level() -> Result<(), TestError> {
            let test = test_setup_with_staff_tables!()?;
            let service = ApprovalService::new(&test.state.db);
            let (_, expert, _) = staff(&test.state.db).await?;

            let crew =
                fixtures::crew::create_crew(&test.state.db, "HGF-0001", CrewStatus::Applicant)
                    .await?;
            let application = fixtures::application::create_application(
                &test.state.db,
                crew.id,
                ApplicationStatus::Shortlisted,
                2,
            )
            .await?;

            let result = service.act(application.id, &expert, reject(None)).await.unwrap();

            assert_eq!(result.status, "REJECTED");
            assert_eq!(result.current_approval_level, 2);

            let application =
                entity::prelude::EmploymentApplication::find_by_id(application.id)
                    .one(&test.state.db)
                    .await?
                    .unwrap();
            assert_eq!(
                application.rejection_reason.as_deref(),
                Some("Rejected by EXPERT_STAFF")
            );

            Ok(())
        }

        /// Expect any action on a terminal application to hit the state
        /// guard, even from the right role.
        #[tokio::test]
        async fn test_terminal_application_conflicts() -> Result<(), TestError> {
            let test = test_setup_with_staff_tables!()?;
            let service = ApprovalService::new(&test.state.db);
            let (crewing, _, _) = staff(&test.state.db).await?;

            let crew =
                fixtures::crew::create_crew(&test.state.db, "HGF-0001", CrewStatus::Applicant)
                    .await?;
            let application = fixtures::application::create_application(
                &test.state.db,
                crew.id,
                ApplicationStatus::Rejected,
                1,
            )
            .await?;

            let result = service.act(application.id, &crewing, approve()).await;

            assert!(matches!(result, Err(Error::Conflict(_))));

            Ok(())
        }
    }

    mod status_tests {
        use entity::crew::CrewStatus;
        use entity::employment_application::ApplicationStatus;
        use muster_test_utils::prelude::*;

        use crate::server::service::approval::tests::{approve, staff};
        use crate::server::service::approval::ApprovalService;

        /// Expect a four-slot chain with PENDING placeholders after one
        /// decision, and can_act to track the pending level's role.
        #[tokio::test]
        async fn test_status_chain_and_can_act() -> Result<(), TestError> {
            let test = test_setup_with_staff_tables!()?;
            let service = ApprovalService::new(&test.state.db);
            let (crewing, expert, _) = staff(&test.state.db).await?;

            let crew =
                fixtures::crew::create_crew(&test.state.db, "HGF-0001", CrewStatus::Applicant)
                    .await?;
            let application = fixtures::application::create_application(
                &test.state.db,
                crew.id,
                ApplicationStatus::Applied,
                1,
            )
            .await?;

            service.act(application.id, &crewing, approve()).await.unwrap();

            let status = service.status(application.id, &expert).await.unwrap();

            assert_eq!(status.chain.len(), 4);
            assert_eq!(status.chain[0].decision, "APPROVED");
            assert_eq!(status.chain[0].decided_by.as_deref(), Some("Test crewing"));
            assert_eq!(status.chain[1].decision, "PENDING");
            assert_eq!(status.chain[1].role, "EXPERT_STAFF");
            assert!(status.can_act);
            assert_eq!(status.history.len(), 1);

            let status = service.status(application.id, &crewing).await.unwrap();
            assert!(!status.can_act);

            Ok(())
        }
    }
}
