//! HTTP controller endpoints for the Muster web API.
//!
//! Axum handlers for authentication, crew management, fleet, the employment
//! application workflow, QMS forms and documents, and reports. Controllers
//! parse inputs, call into the service and data layers, and map results to
//! HTTP responses. Session state comes from tower-sessions; every endpoint
//! carries a utoipa annotation for the OpenAPI document.

pub mod application;
pub mod assignment;
pub mod auth;
pub mod catalog;
pub mod certificate;
pub mod checklist;
pub mod crew;
pub mod document;
pub mod form;
pub mod owner;
pub mod report;
pub mod sea_service;
pub mod util;
pub mod vessel;
