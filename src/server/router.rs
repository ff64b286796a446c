//! HTTP routing and OpenAPI documentation.
//!
//! Every endpoint is registered here with its utoipa annotation; the
//! collected document is served at `/api/docs/openapi.json` with Swagger UI
//! at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the HTTP router with all API endpoints and Swagger UI.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Muster", description = "Crew management API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Authentication"),
        (name = controller::crew::CREW_TAG, description = "Crew register and status machine"),
        (name = controller::certificate::CERTIFICATE_TAG, description = "Crew certificates"),
        (name = controller::application::APPLICATION_TAG, description = "Employment applications and the approval chain"),
        (name = controller::assignment::ASSIGNMENT_TAG, description = "Vessel assignments"),
        (name = controller::sea_service::SEA_SERVICE_TAG, description = "Prior sea-service history"),
        (name = controller::vessel::VESSEL_TAG, description = "Fleet"),
        (name = controller::owner::OWNER_TAG, description = "Vessel owners"),
        (name = controller::checklist::CHECKLIST_TAG, description = "Document checklists"),
        (name = controller::form::FORM_TAG, description = "QMS forms"),
        (name = controller::document::DOCUMENT_TAG, description = "Controlled documents"),
        (name = controller::report::REPORT_TAG, description = "Reports and exports"),
        (name = controller::catalog::CATALOG_TAG, description = "Reference data"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::auth::me))
        .routes(routes!(controller::crew::list, controller::crew::create))
        .routes(routes!(controller::crew::list_alias))
        .routes(routes!(controller::crew::search))
        .routes(routes!(controller::crew::get, controller::crew::update))
        .routes(routes!(controller::crew::certificates))
        .routes(routes!(
            controller::crew::transitions,
            controller::crew::change_status
        ))
        .routes(routes!(
            controller::certificate::list,
            controller::certificate::create,
            controller::certificate::update,
            controller::certificate::delete
        ))
        .routes(routes!(
            controller::application::list,
            controller::application::create
        ))
        .routes(routes!(controller::application::get))
        .routes(routes!(
            controller::application::approval_status,
            controller::application::approve
        ))
        .routes(routes!(
            controller::assignment::list,
            controller::assignment::create
        ))
        .routes(routes!(controller::assignment::extend))
        .routes(routes!(
            controller::sea_service::list,
            controller::sea_service::create,
            controller::sea_service::update,
            controller::sea_service::delete
        ))
        .routes(routes!(
            controller::vessel::list,
            controller::vessel::create
        ))
        .routes(routes!(
            controller::vessel::update,
            controller::vessel::delete
        ))
        .routes(routes!(controller::owner::list, controller::owner::create))
        .routes(routes!(
            controller::owner::update,
            controller::owner::delete
        ))
        .routes(routes!(
            controller::checklist::list,
            controller::checklist::create
        ))
        .routes(routes!(controller::form::list))
        .routes(routes!(controller::form::generate))
        .routes(routes!(
            controller::form::submissions,
            controller::form::submit
        ))
        .routes(routes!(controller::form::template))
        .routes(routes!(
            controller::document::list,
            controller::document::create
        ))
        .routes(routes!(controller::document::get))
        .routes(routes!(controller::document::approve))
        .routes(routes!(controller::document::revise))
        .routes(routes!(controller::report::contract_alerts))
        .routes(routes!(controller::report::expiring_certificates))
        .routes(routes!(controller::report::export))
        .routes(routes!(controller::catalog::ranks))
        .routes(routes!(controller::catalog::certificate_types))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
