//! Service layer for business logic and orchestration between repositories.

pub mod approval;
pub mod auth;
pub mod contract;
pub mod crew_status;
pub mod document;
pub mod expiry;
pub mod export;
pub mod form;
