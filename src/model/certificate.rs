use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::server::service::expiry::ExpiryStatus;

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct CertificateDto {
    pub id: i32,
    pub crew_id: i32,
    #[serde(rename = "type")]
    pub certificate_type: String,
    pub certificate_number: Option<String>,
    pub issue_date: Option<NaiveDate>,
    pub expiry_date: Option<NaiveDate>,
    pub issuer: Option<String>,
    pub document_path: Option<String>,
    pub remarks: Option<String>,
    /// Read-time classification against the caller's warning window.
    pub alert: ExpiryStatus,
}

impl CertificateDto {
    pub fn from_model(cert: entity::certificate::Model, alert: ExpiryStatus) -> Self {
        Self {
            id: cert.id,
            crew_id: cert.crew_id,
            certificate_type: cert.r#type,
            certificate_number: cert.certificate_number,
            issue_date: cert.issue_date,
            expiry_date: cert.expiry_date,
            issuer: cert.issuer,
            document_path: cert.document_path,
            remarks: cert.remarks,
            alert,
        }
    }
}

#[derive(Deserialize, ToSchema)]
pub struct CreateCertificateDto {
    pub crew_id: i32,
    #[serde(rename = "type")]
    pub certificate_type: String,
    pub certificate_number: Option<String>,
    pub issue_date: Option<NaiveDate>,
    pub expiry_date: Option<NaiveDate>,
    pub issuer: Option<String>,
    pub document_path: Option<String>,
    pub remarks: Option<String>,
}

/// Body of `PUT /api/certificates`; the target row is `id`.
#[derive(Deserialize, ToSchema)]
pub struct UpdateCertificateDto {
    pub id: i32,
    #[serde(rename = "type")]
    pub certificate_type: Option<String>,
    pub certificate_number: Option<String>,
    pub issue_date: Option<NaiveDate>,
    pub expiry_date: Option<NaiveDate>,
    pub issuer: Option<String>,
    pub document_path: Option<String>,
    pub remarks: Option<String>,
}
