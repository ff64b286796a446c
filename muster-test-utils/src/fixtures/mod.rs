pub mod application;
pub mod certificate;
pub mod crew;
pub mod fleet;
pub mod staff;
