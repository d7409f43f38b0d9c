use axum::{
    routing::{get, post},
    Router,
};

use crate::controllers::insolation_controller::{
    calculate, daily, get_site_insolation, health, list_sites,
};
use crate::shared_state::SharedState;

/// Build the `/api/*` sub-router.
pub fn api_routes(shared: SharedState) -> Router {
    Router::new()
        .route("/sites",                 get(list_sites))
        .route("/sites/{id}/insolation", get(get_site_insolation))
        .route("/insolation",            post(calculate))
        .route("/insolation/daily",      post(daily))
        .route("/health",                get(health))
        .with_state(shared)
}
