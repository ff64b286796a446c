use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::model::certificate::{CreateCertificateDto, UpdateCertificateDto};

pub struct CertificateRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CertificateRepository<'a> {
    /// Creates a new instance of [`CertificateRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        dto: &CreateCertificateDto,
    ) -> Result<entity::certificate::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let certificate = entity::certificate::ActiveModel {
            crew_id: ActiveValue::Set(dto.crew_id),
            r#type: ActiveValue::Set(dto.certificate_type.clone()),
            certificate_number: ActiveValue::Set(dto.certificate_number.clone()),
            issue_date: ActiveValue::Set(dto.issue_date),
            expiry_date: ActiveValue::Set(dto.expiry_date),
            issuer: ActiveValue::Set(dto.issuer.clone()),
            document_path: ActiveValue::Set(dto.document_path.clone()),
            remarks: ActiveValue::Set(dto.remarks.clone()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        certificate.insert(self.db).await
    }

    pub async fn get_by_id(
        &self,
        certificate_id: i32,
    ) -> Result<Option<entity::certificate::Model>, DbErr> {
        entity::prelude::Certificate::find_by_id(certificate_id)
            .one(self.db)
            .await
    }

    pub async fn list(
        &self,
        crew_id: Option<i32>,
    ) -> Result<Vec<entity::certificate::Model>, DbErr> {
        let mut query = entity::prelude::Certificate::find();

        if let Some(crew_id) = crew_id {
            query = query.filter(entity::certificate::Column::CrewId.eq(crew_id));
        }

        query
            .order_by_asc(entity::certificate::Column::ExpiryDate)
            .all(self.db)
            .await
    }

    /// All certificates with their holder, for the expiry report.
    pub async fn list_with_crew(
        &self,
    ) -> Result<Vec<(entity::certificate::Model, Option<entity::crew::Model>)>, DbErr> {
        entity::prelude::Certificate::find()
            .find_also_related(entity::crew::Entity)
            .order_by_asc(entity::certificate::Column::ExpiryDate)
            .all(self.db)
            .await
    }

    pub async fn update(
        &self,
        dto: &UpdateCertificateDto,
    ) -> Result<Option<entity::certificate::Model>, DbErr> {
        let Some(certificate) = self.get_by_id(dto.id).await? else {
            return Ok(None);
        };

        let mut certificate = certificate.into_active_model();

        if let Some(certificate_type) = &dto.certificate_type {
            certificate.r#type = ActiveValue::Set(certificate_type.clone());
        }
        if let Some(certificate_number) = &dto.certificate_number {
            certificate.certificate_number = ActiveValue::Set(Some(certificate_number.clone()));
        }
        if let Some(issue_date) = dto.issue_date {
            certificate.issue_date = ActiveValue::Set(Some(issue_date));
        }
        if let Some(expiry_date) = dto.expiry_date {
            certificate.expiry_date = ActiveValue::Set(Some(expiry_date));
        }
        if let Some(issuer) = &dto.issuer {
            certificate.issuer = ActiveValue::Set(Some(issuer.clone()));
        }
        if let Some(document_path) = &dto.document_path {
            certificate.document_path = ActiveValue::Set(Some(document_path.clone()));
        }
        if let Some(remarks) = &dto.remarks {
            certificate.remarks = ActiveValue::Set(Some(remarks.clone()));
        }
        certificate.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        certificate.update(self.db).await.map(Some)
    }

    pub async fn delete(&self, certificate_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Certificate::delete_by_id(certificate_id)
            .exec(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    mod list_tests {
        use chrono::NaiveDate;
        use entity::crew::CrewStatus;
        use muster_test_utils::prelude::*;

        use crate::server::data::certificate::CertificateRepository;

        /// Expect the crew filter to narrow the list
        #[tokio::test]
        async fn test_list_filtered_by_crew() -> Result<(), TestError> {
            let test =
                test_setup_with_tables!(entity::prelude::Crew, entity::prelude::Certificate)?;
            let repository = CertificateRepository::new(&test.state.db);

            let first =
                fixtures::crew::create_crew(&test.state.db, "HGF-0001", CrewStatus::Standby)
                    .await?;
            let second =
                fixtures::crew::create_crew(&test.state.db, "HGF-0002", CrewStatus::Standby)
                    .await?;

            let expiry = NaiveDate::from_ymd_opt(2027, 3, 1);
            fixtures::certificate::create_certificate(&test.state.db, first.id, "PASSPORT", expiry)
                .await?;
            fixtures::certificate::create_certificate(&test.state.db, second.id, "MEDICAL", expiry)
                .await?;

            let listed = repository.list(Some(first.id)).await?;

            assert_eq!(listed.len(), 1);
            assert_eq!(listed[0].r#type, "PASSPORT");

            Ok(())
        }
    }

    mod delete_tests {
        use entity::crew::CrewStatus;
        use muster_test_utils::prelude::*;

        use crate::server::data::certificate::CertificateRepository;

        /// Expect no rows affected when the certificate does not exist
        #[tokio::test]
        async fn test_delete_certificate_none() -> Result<(), TestError> {
            let test =
                test_setup_with_tables!(entity::prelude::Crew, entity::prelude::Certificate)?;
            let repository = CertificateRepository::new(&test.state.db);

            let crew =
                fixtures::crew::create_crew(&test.state.db, "HGF-0001", CrewStatus::Standby)
                    .await?;
            let certificate =
                fixtures::certificate::create_certificate(&test.state.db, crew.id, "PASSPORT", None)
                    .await?;

            let result = repository.delete(certificate.id + 1).await?;

            assert_eq!(result.rows_affected, 0);

            Ok(())
        }
    }
}
