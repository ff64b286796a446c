//! Integration tests for HTTP controller endpoints.
//!
//! Handlers are invoked directly with extractor values against an
//! in-memory sqlite database; assertions cover response status codes and
//! database effects.

mod auth;
mod crew;
mod report;

use muster_test_utils::prelude::*;
