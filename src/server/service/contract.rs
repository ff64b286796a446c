//! Contract-end alerting for crew currently onboard. Contract length comes
//! from the vessel owner's `contract_months`; crew one month or less from
//! the end surface as warnings, crew at or past it as critical.

use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

use entity::crew::CrewStatus;

use crate::model::report::ContractAlertDto;
use crate::server::data::assignment::AssignmentRepository;
use crate::server::data::owner::{OwnerRepository, DEFAULT_CONTRACT_MONTHS};
use crate::server::data::vessel::VesselRepository;
use crate::server::error::Error;

/// Whole months onboard, 30-day months, rounded down.
pub fn months_onboard(sign_on: NaiveDate, today: NaiveDate) -> i64 {
    (today - sign_on).num_days() / 30
}

/// `Some("critical")` at or past the contract end, `Some("warning")` in the
/// final month before it, `None` otherwise.
pub fn alert_severity(months_onboard: i64, contract_months: i32) -> Option<&'static str> {
    let contract_months = i64::from(contract_months);

    if months_onboard >= contract_months {
        Some("critical")
    } else if months_onboard >= contract_months - 1 {
        Some("warning")
    } else {
        None
    }
}

pub struct ContractAlertService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ContractAlertService<'a> {
    /// Creates a new instance of [`ContractAlertService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Builds the alert list for all ONBOARD assignments as of `today`.
    /// Assignments without a sign-on date or whose crew member is no longer
    /// ONBOARD are skipped.
    pub async fn alerts(&self, today: NaiveDate) -> Result<Vec<ContractAlertDto>, Error> {
        let assignment_repo = AssignmentRepository::new(self.db);
        let vessel_repo = VesselRepository::new(self.db);
        let owner_repo = OwnerRepository::new(self.db);

        let mut alerts = Vec::new();

        for (assignment, crew) in assignment_repo.list_onboard_with_crew().await? {
            let Some(crew) = crew else {
                continue;
            };
            if crew.crew_status != CrewStatus::Onboard {
                continue;
            }
            let Some(sign_on) = assignment.sign_on else {
                continue;
            };

            let mut owner = None;
            if let Some(vessel_id) = assignment.vessel_id {
                if let Some(vessel) = vessel_repo.get_by_id(vessel_id).await? {
                    if let Some(owner_id) = vessel.owner_id {
                        owner = owner_repo.get_by_id(owner_id).await?;
                    }
                }
            }

            let contract_months = owner
                .as_ref()
                .map(|o| o.contract_months)
                .unwrap_or(DEFAULT_CONTRACT_MONTHS);

            let onboard = months_onboard(sign_on, today);
            let Some(severity) = alert_severity(onboard, contract_months) else {
                continue;
            };

            alerts.push(ContractAlertDto {
                assignment_id: assignment.id,
                crew_id: crew.id,
                crew_name: crew.full_name,
                rank: assignment.rank,
                vessel_name: assignment.vessel_name,
                owner_name: owner.map(|o| o.name),
                sign_on,
                months_onboard: onboard,
                contract_months,
                severity: severity.to_string(),
            });
        }

        Ok(alerts)
    }
}

#[cfg(test)]
mod tests {
    mod severity_tests {
        use chrono::{Duration, NaiveDate};

        use crate::server::service::contract::{alert_severity, months_onboard};

        fn today() -> NaiveDate {
            NaiveDate::from_ymd_opt(2026, 6, 15).unwrap()
        }

        #[test]
        fn months_round_down() {
            let sign_on = today() - Duration::days(8 * 30 + 29);

            assert_eq!(months_onboard(sign_on, today()), 8);
        }

        /// 9-month contract: 8 months onboard warns, 9 is critical.
        #[test]
        fn warning_then_critical() {
            assert_eq!(alert_severity(8, 9), Some("warning"));
            assert_eq!(alert_severity(9, 9), Some("critical"));
            assert_eq!(alert_severity(10, 9), Some("critical"));
            assert_eq!(alert_severity(7, 9), None);
        }
    }

    mod alerts_tests {
        use chrono::{Duration, Utc};
        use entity::assignment::AssignmentStatus;
        use entity::crew::CrewStatus;
        use muster_test_utils::prelude::*;
        use sea_orm::{ActiveModelTrait, ActiveValue, IntoActiveModel};

        use crate::server::service::contract::ContractAlertService;

        /// Expect crew 6 months into a default 7-month contract to warn, and
        /// crew under a longer owner contract to stay silent.
        #[tokio::test]
        async fn test_alerts_respect_owner_contract() -> Result<(), TestError> {
            let test = test_setup_with_tables!(
                entity::prelude::Crew,
                entity::prelude::Owner,
                entity::prelude::Vessel,
                entity::prelude::Assignment,
            )?;
            let today = Utc::now().date_naive();

            let short_owner = fixtures::fleet::create_owner(&test.state.db, "Nordwind", 7).await?;
            let long_owner = fixtures::fleet::create_owner(&test.state.db, "Meridian", 12).await?;
            let short_vessel =
                fixtures::fleet::create_vessel(&test.state.db, "MV Nordwind", Some(short_owner.id))
                    .await?;
            let long_vessel =
                fixtures::fleet::create_vessel(&test.state.db, "MV Meridian", Some(long_owner.id))
                    .await?;

            let near_end =
                fixtures::crew::create_crew(&test.state.db, "HGF-0001", CrewStatus::Onboard)
                    .await?;
            let fresh =
                fixtures::crew::create_crew(&test.state.db, "HGF-0002", CrewStatus::Onboard)
                    .await?;

            fixtures::fleet::create_assignment(
                &test.state.db,
                near_end.id,
                &short_vessel,
                AssignmentStatus::Onboard,
                Some(today - Duration::days(6 * 30 + 5)),
            )
            .await?;
            fixtures::fleet::create_assignment(
                &test.state.db,
                fresh.id,
                &long_vessel,
                AssignmentStatus::Onboard,
                Some(today - Duration::days(6 * 30 + 5)),
            )
            .await?;

            let service = ContractAlertService::new(&test.state.db);
            let alerts = service.alerts(today).await.unwrap();

            assert_eq!(alerts.len(), 1);
            assert_eq!(alerts[0].crew_id, near_end.id);
            assert_eq!(alerts[0].severity, "warning");
            assert_eq!(alerts[0].contract_months, 7);

            Ok(())
        }

        /// Expect crew no longer ONBOARD to drop out even with an open
        /// assignment row.
        #[tokio::test]
        async fn test_alerts_skip_offboarded_crew() -> Result<(), TestError> {
            let test = test_setup_with_tables!(
                entity::prelude::Crew,
                entity::prelude::Owner,
                entity::prelude::Vessel,
                entity::prelude::Assignment,
            )?;
            let today = Utc::now().date_naive();

            let owner = fixtures::fleet::create_owner(&test.state.db, "Nordwind", 7).await?;
            let vessel =
                fixtures::fleet::create_vessel(&test.state.db, "MV Nordwind", Some(owner.id))
                    .await?;
            let crew =
                fixtures::crew::create_crew(&test.state.db, "HGF-0001", CrewStatus::Onboard)
                    .await?;
            fixtures::fleet::create_assignment(
                &test.state.db,
                crew.id,
                &vessel,
                AssignmentStatus::Onboard,
                Some(today - Duration::days(8 * 30)),
            )
            .await?;

            let mut crew = crew.into_active_model();
            crew.crew_status = ActiveValue::Set(CrewStatus::SignOff);
            crew.update(&test.state.db).await?;

            let service = ContractAlertService::new(&test.state.db);
            let alerts = service.alerts(today).await.unwrap();

            assert!(alerts.is_empty());

            Ok(())
        }
    }
}
