use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use crate::server::service::expiry::ExpiryStatus;

/// One row of `GET /api/contracts/alerts`.
#[derive(Serialize, ToSchema)]
pub struct ContractAlertDto {
    pub assignment_id: i32,
    pub crew_id: i32,
    pub crew_name: String,
    pub rank: String,
    pub vessel_name: String,
    pub owner_name: Option<String>,
    pub sign_on: NaiveDate,
    pub months_onboard: i64,
    pub contract_months: i32,
    /// `warning` one month before expiry, `critical` at or past it.
    pub severity: String,
}

/// One row of `GET /api/reports/expiring-certificates`.
#[derive(Serialize, ToSchema)]
pub struct ExpiringCertificateDto {
    pub certificate_id: i32,
    pub crew_id: i32,
    pub crew_name: String,
    pub rank: String,
    pub crew_status: String,
    #[serde(rename = "type")]
    pub certificate_type: String,
    pub certificate_number: Option<String>,
    pub expiry_date: Option<NaiveDate>,
    pub days_remaining: Option<i64>,
    pub alert: ExpiryStatus,
}
