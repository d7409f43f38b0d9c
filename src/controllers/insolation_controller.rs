use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::config::{Config, SiteConfig};
use crate::error::ApiError;
use crate::models::insolation::{
    DailyProfile, DailyProfileRequest, HealthStatus, InsolationInput, InsolationResponse, SiteSnapshot,
};
use crate::services::insolation_service;
use crate::shared_state::AppState;

/// GET /api/sites
/// List all configured sites
///
/// Returns every collector installation the sampler evaluates, with its
/// location, orientation and ground reflectance.
#[utoipa::path(
    get,
    path = "/api/sites",
    responses(
        (status = 200, description = "List of configured sites", body = Vec<SiteConfig>)
    )
)]
pub async fn list_sites(State(config): State<Config>) -> impl IntoResponse {
    Json(config.sites).into_response()
}

/// GET /api/sites/{id}/insolation
/// Latest sampled insolation for a site
///
/// Values are refreshed in the background every `sample_interval_s` seconds
/// using the current UTC instant converted to mean solar time.
#[utoipa::path(
    get,
    path = "/api/sites/{id}/insolation",
    params(
        ("id" = String, Path, description = "Unique site ID")
    ),
    responses(
        (status = 200, description = "Latest snapshot", body = SiteSnapshot),
        (status = 404, description = "Site not found or not sampled yet")
    )
)]
pub async fn get_site_insolation(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> impl IntoResponse {
    match state.get_snapshot(&id) {
        Some(snapshot) => (StatusCode::OK, Json(snapshot)).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "error": "Site not found" })),
        )
            .into_response(),
    }
}

/// POST /api/insolation
/// Evaluate the model for one instant
///
/// Returns beam, diffuse, reflected and total irradiance (W/m²) along with
/// the intermediate solar geometry. A sun below the horizon is reported, not
/// masked.
#[utoipa::path(
    post,
    path = "/api/insolation",
    request_body = InsolationInput,
    responses(
        (status = 200, description = "Insolation on the collector", body = InsolationResponse),
        (status = 422, description = "Input outside the model domain")
    )
)]
pub async fn calculate(Json(input): Json<InsolationInput>) -> Result<Json<InsolationResponse>, ApiError> {
    let insolation = insolation_service::calculate_insolation(&input)?;
    Ok(Json(InsolationResponse::from(insolation)))
}

/// POST /api/insolation/daily
/// Sweep a whole day in solar time
#[utoipa::path(
    post,
    path = "/api/insolation/daily",
    request_body = DailyProfileRequest,
    responses(
        (status = 200, description = "Samples and daily energy totals (Wh/m²)", body = DailyProfile),
        (status = 422, description = "Input outside the model domain")
    )
)]
pub async fn daily(Json(req): Json<DailyProfileRequest>) -> Result<Json<DailyProfile>, ApiError> {
    Ok(Json(insolation_service::daily_profile(&req)?))
}

/// GET /api/health
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service status", body = HealthStatus)
    )
)]
pub async fn health(State(config): State<Config>, State(state): State<AppState>) -> impl IntoResponse {
    Json(HealthStatus {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        sites_total: config.sites.len(),
        sites_sampled: state.sampled_count(),
    })
}
