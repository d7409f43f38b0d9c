//! Solar insolation on a tilted flat collector.
//!
//! The model lives in [`services::insolation_service::calculate_insolation`];
//! the remaining modules wrap it in an HTTP service that samples configured
//! sites in the background.

pub mod api_docs;
pub mod config;
pub mod controllers;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod shared_state;

use axum::{response::Html, routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_scalar::Scalar;

use crate::api_docs::ApiDoc;
use crate::routes::insolation_routes::api_routes;
use crate::shared_state::SharedState;

pub use crate::error::InsolationError;
pub use crate::models::angle::Degrees;
pub use crate::models::insolation::{
    AzimuthModel, CollectorOrientation, Insolation, InsolationInput, ObservationInstant, Site,
};
pub use crate::services::insolation_service::calculate_insolation;

/// Full application router: `/api/*` plus the Scalar OpenAPI UI.
pub fn app(shared: SharedState) -> Router {
    Router::new()
        .nest("/api", api_routes(shared))
        .route("/scalar", get(|| async {
            Html(Scalar::new(ApiDoc::openapi()).to_html())
        }))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
