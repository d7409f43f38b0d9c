//! Background re-evaluation of the configured sites at the current instant.

use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::time::{Instant, Interval};

use crate::config::SiteConfig;
use crate::error::InsolationError;
use crate::models::insolation::{AzimuthModel, InsolationInput, ObservationInstant, SiteSnapshot};
use crate::services::{insolation_service, solar_time};
use crate::shared_state::AppState;

/// Evaluates one site at `now`, converting the clock to mean solar time.
pub fn sample_site(
    site: &SiteConfig,
    model: AzimuthModel,
    now: DateTime<Utc>,
) -> Result<SiteSnapshot, InsolationError> {
    let (day, solar_time) = solar_time::mean_solar_time(now, site.site().longitude);
    let input = InsolationInput::new(site.site(), site.collector(), ObservationInstant { day, solar_time })
        .with_reflectance(site.reflectance)
        .with_azimuth_model(model);
    let insolation = insolation_service::calculate_insolation(&input)?;

    Ok(SiteSnapshot {
        site_id: site.id.clone(),
        timestamp: now,
        day,
        solar_time,
        sun_above_horizon: insolation.sun_above_horizon(),
        insolation,
    })
}

pub fn sample_all(state: &AppState, sites: &[SiteConfig], model: AzimuthModel, now: DateTime<Utc>) {
    for site in sites {
        match sample_site(site, model, now) {
            Ok(snapshot) => {
                tracing::debug!(
                    site = %site.id,
                    day = snapshot.day,
                    solar_time = snapshot.solar_time,
                    total_w_m2 = snapshot.insolation.total(),
                    sun_up = snapshot.sun_above_horizon,
                    "site sampled"
                );
                state.set_snapshot(snapshot);
            }
            Err(e) => tracing::error!(site = %site.id, error = %e, "failed to sample site"),
        }
    }
}

/// Ticks every `interval_s` seconds, first tick one period from now: `main`
/// already samples once at startup.
fn ticker(interval_s: u64) -> Interval {
    let period = Duration::from_secs(interval_s.max(1));
    tokio::time::interval_at(Instant::now() + period, period)
}

pub async fn run(state: AppState, sites: Vec<SiteConfig>, model: AzimuthModel, interval_s: u64) {
    let mut ticker = ticker(interval_s);
    loop {
        ticker.tick().await;
        sample_all(&state, &sites, model, Utc::now());
    }
}
