//! Data access layer; one repository per aggregate. Repositories hold a
//! borrowed [`sea_orm::DatabaseConnection`] and return entity models.

pub mod application;
pub mod assignment;
pub mod certificate;
pub mod checklist;
pub mod crew;
pub mod document;
pub mod form;
pub mod owner;
pub mod sea_service;
pub mod staff_user;
pub mod vessel;
