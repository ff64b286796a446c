pub mod api;
pub mod application;
pub mod assignment;
pub mod auth;
pub mod certificate;
pub mod checklist;
pub mod crew;
pub mod document;
pub mod form;
pub mod report;
pub mod sea_service;
pub mod vessel;
