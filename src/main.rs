use std::net::SocketAddr;
use std::path::Path;

use chrono::Utc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use insolation_calc::config::Config;
use insolation_calc::models::insolation::UNMODELED_EFFECTS;
use insolation_calc::services::sampler;
use insolation_calc::shared_state::{AppState, SharedState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 2. Load configuration
    let path = std::env::var("INSOLATION_CONFIG").unwrap_or_else(|_| "config.json".into());
    let config = if Path::new(&path).exists() {
        Config::load(&path)?
    } else {
        tracing::warn!(%path, "config file not found, using built-in reference site");
        Config::default()
    };
    tracing::info!(
        sites = config.sites.len(),
        azimuth_model = ?config.azimuth_model,
        "configuration loaded"
    );
    for effect in UNMODELED_EFFECTS {
        tracing::info!("{effect}");
    }

    // 3. Evaluate every site once, then keep sampling in the background
    let state = AppState::new();
    sampler::sample_all(&state, &config.sites, config.azimuth_model, Utc::now());
    for site in &config.sites {
        if let Some(snap) = state.get_snapshot(&site.id) {
            let (beam, diffuse, reflected, total) = snap.insolation.as_tuple();
            tracing::info!(
                site = %site.id,
                day = snap.day,
                solar_time = snap.solar_time,
                beam,
                diffuse,
                reflected,
                total,
                sun_up = snap.sun_above_horizon,
                "insolation W/m²"
            );
        }
    }

    tokio::spawn(sampler::run(
        state.clone(),
        config.sites.clone(),
        config.azimuth_model,
        config.sample_interval_s,
    ));

    // 4. HTTP server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    let app = insolation_calc::app(SharedState { app: state, config });

    tracing::info!("API Server listening on http://{}", addr);
    tracing::info!("Scalar UI: http://{}/scalar", addr);

    axum_server::bind(addr)
        .serve(app.into_make_service())
        .await?;

    Ok(())
}
