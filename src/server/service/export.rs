//! CSV exports for `GET /api/export`. The writer renders into memory; the
//! controller attaches the Content-Disposition header.

use chrono::NaiveDate;
use sea_orm::{ActiveEnum, DatabaseConnection};

use crate::server::data::crew::CrewRepository;
use crate::server::data::vessel::VesselRepository;
use crate::server::error::Error;

pub struct CsvExport {
    pub filename: &'static str,
    pub content: Vec<u8>,
}

pub struct ExportService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ExportService<'a> {
    /// Creates a new instance of [`ExportService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn export(&self, export_type: &str) -> Result<CsvExport, Error> {
        match export_type {
            "crew" => self.crew().await,
            "vessels" => self.vessels().await,
            other => Err(Error::Validation(format!("Unknown export type {other}"))),
        }
    }

    /// The full crew roster, ordered by crew code.
    async fn crew(&self) -> Result<CsvExport, Error> {
        let repository = CrewRepository::new(self.db);
        let crew = repository.list(None, None).await?;

        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record([
            "crew_code",
            "full_name",
            "rank",
            "status",
            "vessel",
            "nationality",
            "date_of_birth",
            "phone",
            "email",
        ])?;

        for member in crew {
            writer.write_record([
                member.crew_code.as_str(),
                member.full_name.as_str(),
                member.rank.as_str(),
                &member.crew_status.to_value(),
                member.vessel.as_deref().unwrap_or(""),
                member.nationality.as_deref().unwrap_or(""),
                &format_date(member.date_of_birth),
                member.phone.as_deref().unwrap_or(""),
                member.email.as_deref().unwrap_or(""),
            ])?;
        }

        Ok(CsvExport {
            filename: "crew.csv",
            content: finish(writer)?,
        })
    }

    /// The fleet with owner names, ordered by vessel name.
    async fn vessels(&self) -> Result<CsvExport, Error> {
        let repository = VesselRepository::new(self.db);
        let vessels = repository.list_with_owner().await?;

        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record([
            "name",
            "flag",
            "vessel_type",
            "grt",
            "dwt",
            "imo",
            "call_sign",
            "owner",
        ])?;

        for (vessel, owner) in vessels {
            writer.write_record([
                vessel.name.as_str(),
                vessel.flag.as_str(),
                vessel.vessel_type.as_deref().unwrap_or(""),
                &format_number(vessel.grt),
                &format_number(vessel.dwt),
                vessel.imo.as_deref().unwrap_or(""),
                vessel.call_sign.as_deref().unwrap_or(""),
                owner.map(|o| o.name).as_deref().unwrap_or(""),
            ])?;
        }

        Ok(CsvExport {
            filename: "vessels.csv",
            content: finish(writer)?,
        })
    }
}

fn finish(writer: csv::Writer<Vec<u8>>) -> Result<Vec<u8>, Error> {
    writer
        .into_inner()
        .map_err(|err| Error::ParseError(err.to_string()))
}

fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

fn format_number(value: Option<i32>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    mod export_tests {
        use entity::crew::CrewStatus;
        use muster_test_utils::prelude::*;

        use crate::server::error::Error;
        use crate::server::service::export::ExportService;

        /// Expect a header row plus one line per crew member
        #[tokio::test]
        async fn test_crew_export() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::Crew)?;
            let service = ExportService::new(&test.state.db);

            fixtures::crew::create_crew(&test.state.db, "HGF-0001", CrewStatus::Onboard).await?;
            fixtures::crew::create_crew(&test.state.db, "HGF-0002", CrewStatus::Standby).await?;

            let export = service.export("crew").await.unwrap();
            let content = String::from_utf8(export.content).unwrap();
            let lines: Vec<&str> = content.lines().collect();

            assert_eq!(export.filename, "crew.csv");
            assert_eq!(lines.len(), 3);
            assert!(lines[0].starts_with("crew_code,full_name,rank,status"));
            assert!(lines[1].contains("HGF-0001"));
            assert!(lines[1].contains("ONBOARD"));

            Ok(())
        }

        /// Expect vessels to carry their owner's name
        #[tokio::test]
        async fn test_vessel_export_with_owner() -> Result<(), TestError> {
            let test = test_setup_with_tables!(
                entity::prelude::Owner,
                entity::prelude::Vessel,
            )?;
            let service = ExportService::new(&test.state.db);

            let owner =
                fixtures::fleet::create_owner(&test.state.db, "Nordwind Shipping", 7).await?;
            fixtures::fleet::create_vessel(&test.state.db, "MV Nordwind", Some(owner.id)).await?;

            let export = service.export("vessels").await.unwrap();
            let content = String::from_utf8(export.content).unwrap();

            assert!(content.contains("MV Nordwind"));
            assert!(content.contains("Nordwind Shipping"));

            Ok(())
        }

        /// Expect an unsupported type to fail validation
        #[tokio::test]
        async fn test_unknown_type() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::Crew)?;
            let service = ExportService::new(&test.state.db);

            let result = service.export("cargo").await;

            assert!(matches!(result, Err(Error::Validation(_))));

            Ok(())
        }
    }
}
