pub use sea_orm_migration::prelude::*;

mod m20260115_000001_owner;
mod m20260115_000002_vessel;
mod m20260115_000003_staff_user;
mod m20260115_000004_crew;
mod m20260115_000005_certificate;
mod m20260115_000006_sea_service;
mod m20260115_000007_assignment;
mod m20260115_000008_employment_application;
mod m20260115_000009_approval_decision;
mod m20260115_000010_approval_history;
mod m20260115_000011_document_checklist;
mod m20260115_000012_form_template;
mod m20260115_000013_form_submission;
mod m20260115_000014_managed_document;
mod m20260115_000015_document_revision;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260115_000001_owner::Migration),
            Box::new(m20260115_000002_vessel::Migration),
            Box::new(m20260115_000003_staff_user::Migration),
            Box::new(m20260115_000004_crew::Migration),
            Box::new(m20260115_000005_certificate::Migration),
            Box::new(m20260115_000006_sea_service::Migration),
            Box::new(m20260115_000007_assignment::Migration),
            Box::new(m20260115_000008_employment_application::Migration),
            Box::new(m20260115_000009_approval_decision::Migration),
            Box::new(m20260115_000010_approval_history::Migration),
            Box::new(m20260115_000011_document_checklist::Migration),
            Box::new(m20260115_000012_form_template::Migration),
            Box::new(m20260115_000013_form_submission::Migration),
            Box::new(m20260115_000014_managed_document::Migration),
            Box::new(m20260115_000015_document_revision::Migration),
        ]
    }
}
