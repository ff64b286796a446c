//! Read-time certificate expiry classification. Nothing here is persisted;
//! every list and report reclassifies against the current date.

use chrono::{Duration, NaiveDate};
use sea_orm::{ActiveEnum, DatabaseConnection};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::report::ExpiringCertificateDto;
use crate::server::data::certificate::CertificateRepository;
use crate::server::error::Error;

/// Days before expiry at which a certificate becomes CRITICAL.
pub const CRITICAL_DAYS: i64 = 30;
/// Default warning window for certificate lists.
pub const DEFAULT_WARNING_DAYS: i64 = 60;
/// Default warning window for the expiring-certificates report.
pub const REPORT_WARNING_DAYS: i64 = 90;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExpiryStatus {
    NoDate,
    Expired,
    Critical,
    Warning,
    Valid,
}

/// Classifies an expiry date against `today`. `warning_days` widens the
/// WARNING band beyond the fixed 30-day CRITICAL band.
pub fn classify(expiry: Option<NaiveDate>, today: NaiveDate, warning_days: i64) -> ExpiryStatus {
    let Some(expiry) = expiry else {
        return ExpiryStatus::NoDate;
    };

    if expiry < today {
        ExpiryStatus::Expired
    } else if expiry <= today + Duration::days(CRITICAL_DAYS) {
        ExpiryStatus::Critical
    } else if expiry <= today + Duration::days(warning_days) {
        ExpiryStatus::Warning
    } else {
        ExpiryStatus::Valid
    }
}

/// Days until expiry, negative when already expired.
pub fn days_remaining(expiry: Option<NaiveDate>, today: NaiveDate) -> Option<i64> {
    expiry.map(|date| (date - today).num_days())
}

pub struct ExpiryReportService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ExpiryReportService<'a> {
    /// Creates a new instance of [`ExpiryReportService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// The expiring-certificates report: every certificate inside the
    /// warning window, earliest expiry first. VALID and undated
    /// certificates stay out of the report.
    pub async fn expiring(
        &self,
        today: NaiveDate,
        warning_days: Option<i64>,
    ) -> Result<Vec<ExpiringCertificateDto>, Error> {
        let warning_days = warning_days.unwrap_or(REPORT_WARNING_DAYS);

        let repository = CertificateRepository::new(self.db);
        let rows = repository.list_with_crew().await?;

        let mut report = Vec::new();
        for (certificate, crew) in rows {
            let Some(crew) = crew else {
                continue;
            };

            let alert = classify(certificate.expiry_date, today, warning_days);
            if matches!(alert, ExpiryStatus::Valid | ExpiryStatus::NoDate) {
                continue;
            }

            report.push(ExpiringCertificateDto {
                certificate_id: certificate.id,
                crew_id: crew.id,
                crew_name: crew.full_name,
                rank: crew.rank,
                crew_status: crew.crew_status.to_value(),
                certificate_type: certificate.r#type,
                certificate_number: certificate.certificate_number,
                expiry_date: certificate.expiry_date,
                days_remaining: days_remaining(certificate.expiry_date, today),
                alert,
            });
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate};

    use super::{classify, days_remaining, ExpiryStatus, DEFAULT_WARNING_DAYS, REPORT_WARNING_DAYS};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 6, 15).unwrap()
    }

    #[test]
    fn missing_date_is_no_date() {
        assert_eq!(
            classify(None, today(), DEFAULT_WARNING_DAYS),
            ExpiryStatus::NoDate
        );
    }

    #[test]
    fn yesterday_is_expired() {
        let expiry = today() - Duration::days(1);

        assert_eq!(
            classify(Some(expiry), today(), DEFAULT_WARNING_DAYS),
            ExpiryStatus::Expired
        );
    }

    #[test]
    fn ten_days_out_is_critical() {
        let expiry = today() + Duration::days(10);

        assert_eq!(
            classify(Some(expiry), today(), DEFAULT_WARNING_DAYS),
            ExpiryStatus::Critical
        );
    }

    /// 75 days out is inside a 90-day window but outside a 60-day one.
    #[test]
    fn warning_band_depends_on_window() {
        let expiry = today() + Duration::days(75);

        assert_eq!(
            classify(Some(expiry), today(), REPORT_WARNING_DAYS),
            ExpiryStatus::Warning
        );
        assert_eq!(
            classify(Some(expiry), today(), DEFAULT_WARNING_DAYS),
            ExpiryStatus::Valid
        );
    }

    #[test]
    fn expiring_today_is_critical() {
        assert_eq!(
            classify(Some(today()), today(), DEFAULT_WARNING_DAYS),
            ExpiryStatus::Critical
        );
    }

    #[test]
    fn days_remaining_negative_when_expired() {
        let expiry = today() - Duration::days(3);

        assert_eq!(days_remaining(Some(expiry), today()), Some(-3));
        assert_eq!(days_remaining(None, today()), None);
    }

    mod report_tests {
        use chrono::Duration;
        use entity::crew::CrewStatus;
        use muster_test_utils::prelude::*;

        use crate::server::service::expiry::tests::today;
        use crate::server::service::expiry::{ExpiryReportService, ExpiryStatus};

        /// Expect only certificates inside the window, earliest first,
        /// with expired ones carrying negative days_remaining.
        #[tokio::test]
        async fn test_expiring_report_window() -> Result<(), TestError> {
            let test = test_setup_with_staff_tables!(entity::prelude::Certificate)?;
            let service = ExpiryReportService::new(&test.state.db);

            let crew =
                fixtures::crew::create_crew(&test.state.db, "HGF-0001", CrewStatus::Onboard)
                    .await?;

            fixtures::certificate::create_certificate(
                &test.state.db,
                crew.id,
                "PASSPORT",
                Some(today() - Duration::days(5)),
            )
            .await?;
            fixtures::certificate::create_certificate(
                &test.state.db,
                crew.id,
                "MEDICAL",
                Some(today() + Duration::days(45)),
            )
            .await?;
            fixtures::certificate::create_certificate(
                &test.state.db,
                crew.id,
                "COC",
                Some(today() + Duration::days(400)),
            )
            .await?;
            fixtures::certificate::create_certificate(&test.state.db, crew.id, "GOC", None)
                .await?;

            let report = service.expiring(today(), None).await.unwrap();

            assert_eq!(report.len(), 2);
            assert_eq!(report[0].certificate_type, "PASSPORT");
            assert_eq!(report[0].alert, ExpiryStatus::Expired);
            assert_eq!(report[0].days_remaining, Some(-5));
            assert_eq!(report[1].certificate_type, "MEDICAL");
            assert_eq!(report[1].alert, ExpiryStatus::Warning);

            let narrow = service.expiring(today(), Some(30)).await.unwrap();
            assert_eq!(narrow.len(), 1);

            Ok(())
        }
    }
}
