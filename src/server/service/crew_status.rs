//! Crew status machine. Transitions are table-driven; each source state
//! lists its legal targets and the roles allowed to move crew out of it.
//! DIRECTOR can always act.

use sea_orm::{ActiveEnum, DatabaseConnection};

use entity::crew::CrewStatus;
use entity::staff_user::StaffRole;

use crate::model::crew::{CrewStatusChangeDto, CrewStatusChangedDto, CrewTransitionsDto};
use crate::server::data::crew::{CrewRepository, StatusEffects};
use crate::server::error::{AuthError, Error};

struct TransitionRule {
    from: CrewStatus,
    targets: &'static [CrewStatus],
    roles: &'static [StaffRole],
}

/// One rule per source state. An empty role list means DIRECTOR only.
static TRANSITIONS: &[TransitionRule] = &[
    TransitionRule {
        from: CrewStatus::Applicant,
        targets: &[CrewStatus::Approved, CrewStatus::ExCrew],
        roles: &[StaffRole::CrewingManager],
    },
    TransitionRule {
        from: CrewStatus::Approved,
        targets: &[CrewStatus::Standby, CrewStatus::ExCrew],
        roles: &[StaffRole::CrewingManager, StaffRole::DocumentationOfficer],
    },
    TransitionRule {
        from: CrewStatus::Standby,
        targets: &[CrewStatus::Onboard, CrewStatus::Vacation, CrewStatus::ExCrew],
        roles: &[StaffRole::CrewingManager, StaffRole::OperationalStaff],
    },
    TransitionRule {
        from: CrewStatus::Onboard,
        targets: &[CrewStatus::SignOff, CrewStatus::ExCrew],
        roles: &[StaffRole::CrewingManager, StaffRole::OperationalStaff],
    },
    TransitionRule {
        from: CrewStatus::SignOff,
        targets: &[CrewStatus::Vacation, CrewStatus::ExCrew],
        roles: &[StaffRole::CrewingManager, StaffRole::OperationalStaff],
    },
    TransitionRule {
        from: CrewStatus::Vacation,
        targets: &[CrewStatus::Standby, CrewStatus::Onboard, CrewStatus::ExCrew],
        roles: &[StaffRole::CrewingManager, StaffRole::OperationalStaff],
    },
    TransitionRule {
        from: CrewStatus::ExCrew,
        targets: &[CrewStatus::Blacklisted, CrewStatus::Standby],
        roles: &[StaffRole::CrewingManager],
    },
    TransitionRule {
        from: CrewStatus::Blacklisted,
        targets: &[CrewStatus::ExCrew],
        roles: &[],
    },
];

fn rule_for(from: CrewStatus) -> &'static TransitionRule {
    TRANSITIONS
        .iter()
        .find(|rule| rule.from == from)
        .unwrap_or_else(|| unreachable!("every status has a transition rule"))
}

fn role_may_act(rule: &TransitionRule, role: StaffRole) -> bool {
    role == StaffRole::Director || rule.roles.contains(&role)
}

/// Targets the given role may move this crew member to.
pub fn available_transitions(from: CrewStatus, role: StaffRole) -> Vec<CrewStatus> {
    let rule = rule_for(from);

    if role_may_act(rule, role) {
        rule.targets.to_vec()
    } else {
        Vec::new()
    }
}

/// Checks a transition; a target outside the table is a state conflict, an
/// actor outside the gate an authorization failure.
pub fn check_transition(from: CrewStatus, to: CrewStatus, role: StaffRole) -> Result<(), Error> {
    let rule = rule_for(from);

    if !rule.targets.contains(&to) {
        return Err(Error::Conflict(format!(
            "Cannot change crew status from {} to {}",
            from.to_value(),
            to.to_value()
        )));
    }
    if !role_may_act(rule, role) {
        return Err(AuthError::Forbidden {
            role: role.to_value(),
            action: format!("change crew status to {}", to.to_value()),
        }
        .into());
    }

    Ok(())
}

/// Field side effects a transition carries.
fn effects_for(
    from: CrewStatus,
    to: CrewStatus,
    reason: Option<String>,
    notes: Option<String>,
) -> StatusEffects {
    match to {
        CrewStatus::Vacation => StatusEffects {
            stamp_last_offboard: true,
            mark_reported_to_office: true,
            clear_vessel: true,
            offboard_notes: notes,
            ..Default::default()
        },
        CrewStatus::SignOff => StatusEffects {
            stamp_last_offboard: true,
            clear_vessel: true,
            offboard_notes: notes,
            ..Default::default()
        },
        CrewStatus::ExCrew | CrewStatus::Blacklisted => StatusEffects {
            set_inactive_reason: Some(
                reason.unwrap_or_else(|| format!("Moved to {}", to.to_value())),
            ),
            clear_vessel: true,
            offboard_notes: notes,
            ..Default::default()
        },
        CrewStatus::Standby if matches!(from, CrewStatus::Vacation | CrewStatus::ExCrew) => {
            StatusEffects {
                mark_reported_to_office: true,
                clear_inactive_reason: true,
                ..Default::default()
            }
        }
        _ => StatusEffects::default(),
    }
}

pub struct CrewStatusService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CrewStatusService<'a> {
    /// Creates a new instance of [`CrewStatusService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Moves a crew member through the status machine on behalf of `actor`.
    pub async fn change_status(
        &self,
        crew_id: i32,
        actor: &entity::staff_user::Model,
        dto: CrewStatusChangeDto,
    ) -> Result<CrewStatusChangedDto, Error> {
        let new_status = CrewStatus::try_from_value(&dto.new_status)
            .map_err(|_| Error::Validation(format!("Unknown crew status {}", dto.new_status)))?;

        let crew_repo = CrewRepository::new(self.db);
        let crew = crew_repo
            .get_by_id(crew_id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("Crew {crew_id}")))?;

        let previous = crew.crew_status;
        check_transition(previous, new_status, actor.role)?;

        let effects = effects_for(previous, new_status, dto.reason, dto.notes);
        let updated = crew_repo
            .apply_status_change(crew, new_status, effects)
            .await?;

        tracing::info!(
            crew_id,
            from = previous.to_value(),
            to = updated.crew_status.to_value(),
            by = actor.username,
            "crew status changed"
        );

        Ok(CrewStatusChangedDto {
            success: true,
            message: format!(
                "Crew status changed from {} to {}",
                previous.to_value(),
                updated.crew_status.to_value()
            ),
            crew_id,
            previous_status: previous.to_value(),
            new_status: updated.crew_status.to_value(),
        })
    }

    /// The transitions `actor` may apply to a crew member right now.
    pub async fn transitions(
        &self,
        crew_id: i32,
        actor: &entity::staff_user::Model,
    ) -> Result<CrewTransitionsDto, Error> {
        let crew_repo = CrewRepository::new(self.db);
        let crew = crew_repo
            .get_by_id(crew_id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("Crew {crew_id}")))?;

        let targets = available_transitions(crew.crew_status, actor.role);

        Ok(CrewTransitionsDto {
            current_status: crew.crew_status.to_value(),
            can_transition: !targets.is_empty(),
            available_transitions: targets.iter().map(|status| status.to_value()).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    mod table_tests {
        use entity::crew::CrewStatus;
        use entity::staff_user::StaffRole;

        use crate::server::error::Error;
        use crate::server::service::crew_status::{available_transitions, check_transition};

        #[test]
        fn director_can_always_act() {
            assert!(check_transition(
                CrewStatus::Blacklisted,
                CrewStatus::ExCrew,
                StaffRole::Director
            )
            .is_ok());
        }

        #[test]
        fn target_outside_table_is_conflict() {
            let result = check_transition(
                CrewStatus::Applicant,
                CrewStatus::Onboard,
                StaffRole::Director,
            );

            assert!(matches!(result, Err(Error::Conflict(_))));
        }

        #[test]
        fn role_outside_gate_is_forbidden() {
            let result = check_transition(
                CrewStatus::Standby,
                CrewStatus::Onboard,
                StaffRole::AccountingOfficer,
            );

            assert!(matches!(result, Err(Error::AuthError(_))));
        }

        #[test]
        fn blacklist_release_is_director_only() {
            let result = check_transition(
                CrewStatus::Blacklisted,
                CrewStatus::ExCrew,
                StaffRole::CrewingManager,
            );

            assert!(matches!(result, Err(Error::AuthError(_))));
        }

        #[test]
        fn gated_role_sees_no_transitions() {
            assert!(
                available_transitions(CrewStatus::Onboard, StaffRole::AccountingOfficer)
                    .is_empty()
            );
            assert_eq!(
                available_transitions(CrewStatus::Onboard, StaffRole::OperationalStaff),
                vec![CrewStatus::SignOff, CrewStatus::ExCrew]
            );
        }
    }

    mod change_status_tests {
        use entity::crew::CrewStatus;
        use entity::staff_user::StaffRole;
        use muster_test_utils::prelude::*;
        use sea_orm::EntityTrait;

        use crate::model::crew::CrewStatusChangeDto;
        use crate::server::service::crew_status::CrewStatusService;

        fn change_to(status: &str) -> CrewStatusChangeDto {
            CrewStatusChangeDto {
                new_status: status.to_string(),
                reason: None,
                notes: None,
            }
        }

        /// Expect VACATION entry to stamp offboard fields and mark the crew
        /// member as reported to office
        #[tokio::test]
        async fn test_vacation_side_effects() -> Result<(), TestError> {
            let test = test_setup_with_staff_tables!()?;
            let service = CrewStatusService::new(&test.state.db);

            let actor = fixtures::staff::create_staff_user(
                &test.state.db,
                "ops",
                StaffRole::OperationalStaff,
            )
            .await?;
            let crew =
                fixtures::crew::create_crew(&test.state.db, "HGF-0001", CrewStatus::SignOff)
                    .await?;

            let result = service
                .change_status(crew.id, &actor, change_to("VACATION"))
                .await
                .unwrap();

            assert_eq!(result.previous_status, "SIGN_OFF");
            assert_eq!(result.new_status, "VACATION");

            let crew = entity::prelude::Crew::find_by_id(crew.id)
                .one(&test.state.db)
                .await?
                .unwrap();
            assert!(crew.last_offboard_date.is_some());
            assert!(crew.reported_to_office);

            Ok(())
        }

        /// Expect STANDBY from VACATION to clear the inactive reason
        #[tokio::test]
        async fn test_standby_clears_inactive_reason() -> Result<(), TestError> {
            let test = test_setup_with_staff_tables!()?;
            let service = CrewStatusService::new(&test.state.db);

            let actor = fixtures::staff::create_staff_user(
                &test.state.db,
                "crewing",
                StaffRole::CrewingManager,
            )
            .await?;
            let crew =
                fixtures::crew::create_crew(&test.state.db, "HGF-0001", CrewStatus::ExCrew)
                    .await?;

            service
                .change_status(crew.id, &actor, change_to("STANDBY"))
                .await
                .unwrap();

            let crew = entity::prelude::Crew::find_by_id(crew.id)
                .one(&test.state.db)
                .await?
                .unwrap();
            assert_eq!(crew.crew_status, CrewStatus::Standby);
            assert!(crew.inactive_reason.is_none());
            assert!(crew.reported_to_office);

            Ok(())
        }

        /// Expect an unknown status string to fail validation
        #[tokio::test]
        async fn test_unknown_status_rejected() -> Result<(), TestError> {
            let test = test_setup_with_staff_tables!()?;
            let service = CrewStatusService::new(&test.state.db);

            let actor = fixtures::staff::create_staff_user(
                &test.state.db,
                "director",
                StaffRole::Director,
            )
            .await?;
            let crew =
                fixtures::crew::create_crew(&test.state.db, "HGF-0001", CrewStatus::Standby)
                    .await?;

            let result = service
                .change_status(crew.id, &actor, change_to("RETIRED"))
                .await;

            assert!(matches!(
                result,
                Err(crate::server::error::Error::Validation(_))
            ));

            Ok(())
        }
    }
}
