//! HTTP API server

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

use crate::config::HttpSection;

pub mod error;
pub mod form;
pub mod handlers;
pub mod state;

pub use error::ApiError;
pub use form::ContactSubmission;
pub use state::AppState;

/// Path the OpenAPI document is served from
pub const OPENAPI_PATH: &str = "/openapi.json";

/// OpenAPI description of every route
#[derive(OpenApi)]
#[openapi(
    info(
        title = "itemdesk",
        description = "A small item catalogue and contact-form web service"
    ),
    paths(
        handlers::list_items,
        handlers::get_item,
        handlers::create_item,
        handlers::contact_page,
        handlers::submit_form,
        handlers::list_submissions,
        handlers::health,
    ),
    components(schemas(
        crate::types::Item,
        crate::types::NewItem,
        crate::types::ContactForm,
        handlers::HealthResponse,
        error::ErrorBody,
    )),
    tags(
        (name = "items", description = "Operations with items"),
        (name = "forms", description = "Form submission operations"),
        (name = "health", description = "Health check endpoints")
    )
)]
pub struct ApiDoc;

/// Build the API router using the provided application state
pub fn create_router(state: AppState, http: &HttpSection) -> Router {
    let router = Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/items",
            get(handlers::list_items).post(handlers::create_item),
        )
        .route("/items/:item_id", get(handlers::get_item))
        .route("/contact", get(handlers::contact_page))
        .route("/submit-form", post(handlers::submit_form))
        .route("/submissions", get(handlers::list_submissions))
        .nest_service("/static", ServeDir::new(&http.assets))
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url(OPENAPI_PATH, ApiDoc::openapi()))
        .merge(Redoc::with_url("/redoc", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http());

    if http.cors {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}

/// Convenience helper: seeded state with default HTTP settings
pub fn create_default_router() -> Router {
    create_router(AppState::seeded(), &HttpSection::default())
}
