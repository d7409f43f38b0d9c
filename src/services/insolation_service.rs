//! Entry point of the insolation model.
//!
//! Pipeline:
//!  1. Solar geometry  – declination, hour angle, altitude
//!  2. Atmosphere      – air mass, extraterrestrial flux, optical depth, Ib
//!  3. Solar azimuth   – needs A from step 2 under the legacy model
//!  4. Surface         – beam projection, sky diffuse, ground reflected
//!
//! Pure and deterministic: no shared state, safe to call from any thread.

use crate::error::InsolationError;
use crate::models::insolation::{
    DailyProfile, DailyProfileRequest, DailyTotals, Insolation, InsolationInput, ObservationInstant,
    ProfileSample,
};
use crate::services::{atmosphere, solar_geometry, surface_irradiance};

/// Smallest profile step: one second of solar time.
pub const MIN_STEP_HOURS: f64 = 1.0 / 3600.0;

fn finite(name: &'static str, value: f64) -> Result<f64, InsolationError> {
    if value.is_finite() { Ok(value) } else { Err(InsolationError::NonFinite(name)) }
}

pub fn validate_latitude(latitude: f64) -> Result<(), InsolationError> {
    let latitude = finite("latitude", latitude)?;
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(InsolationError::InvalidLatitude(latitude));
    }
    if latitude.abs() == 90.0 {
        return Err(InsolationError::PolarSingularity(latitude));
    }
    Ok(())
}

pub fn validate_longitude(longitude: f64) -> Result<(), InsolationError> {
    let longitude = finite("longitude", longitude)?;
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(InsolationError::InvalidLongitude(longitude));
    }
    Ok(())
}

pub fn validate_tilt(tilt: f64) -> Result<(), InsolationError> {
    let tilt = finite("collector tilt", tilt)?;
    if !(0.0..=180.0).contains(&tilt) {
        return Err(InsolationError::InvalidTilt(tilt));
    }
    Ok(())
}

pub fn validate_reflectance(reflectance: f64) -> Result<(), InsolationError> {
    let reflectance = finite("reflectance", reflectance)?;
    if !(0.0..=1.0).contains(&reflectance) {
        return Err(InsolationError::InvalidReflectance(reflectance));
    }
    Ok(())
}

pub fn validate_day(day: u32) -> Result<(), InsolationError> {
    if !(1..=366).contains(&day) {
        return Err(InsolationError::InvalidDay(day));
    }
    Ok(())
}

pub fn validate_solar_time(solar_time: f64) -> Result<(), InsolationError> {
    let solar_time = finite("solar time", solar_time)?;
    if !(0.0..=24.0).contains(&solar_time) {
        return Err(InsolationError::InvalidSolarTime(solar_time));
    }
    Ok(())
}

fn validate(input: &InsolationInput) -> Result<(), InsolationError> {
    validate_latitude(input.site.latitude.value())?;
    validate_longitude(input.site.longitude.value())?;
    finite("collector azimuth", input.collector.azimuth.value())?;
    validate_tilt(input.collector.tilt.value())?;
    validate_reflectance(input.reflectance)?;
    validate_day(input.instant.day)?;
    validate_solar_time(input.instant.solar_time)?;
    Ok(())
}

/// Insolation on the collector for one instant.
///
/// Values are returned as computed even when the sun is below the horizon;
/// check [`Insolation::sun_above_horizon`] when physical validity matters.
pub fn calculate_insolation(input: &InsolationInput) -> Result<Insolation, InsolationError> {
    validate(input)?;

    let latitude = input.site.latitude;
    let day = input.instant.day;

    let sun = solar_geometry::locate_sun(latitude, day, input.instant.solar_time);
    let atmosphere = atmosphere::attenuate(sun.altitude, day);
    let azimuth = solar_geometry::solar_azimuth(
        input.azimuth_model,
        latitude,
        &sun,
        atmosphere.extraterrestrial_flux,
    );
    let geometry = sun.with_azimuth(azimuth);

    Ok(surface_irradiance::compose(
        geometry,
        atmosphere,
        &input.collector,
        day,
        input.reflectance,
    ))
}

/// Sweeps solar time over one day at `step_hours`.
///
/// Energy totals integrate with the trapezoid rule and count only samples
/// with the sun above the horizon; the samples themselves are untouched.
pub fn daily_profile(req: &DailyProfileRequest) -> Result<DailyProfile, InsolationError> {
    let step = finite("profile step", req.step_hours)?;
    if !(MIN_STEP_HOURS..=24.0).contains(&step) {
        return Err(InsolationError::InvalidStep(step));
    }

    // At most 86_400 steps once the step is bounded below.
    let steps = (24.0 / step).floor() as usize;
    let capacity = steps.checked_add(1).ok_or(InsolationError::InvalidStep(step))?;
    let mut samples = Vec::with_capacity(capacity);
    for i in 0..=steps {
        let solar_time = (i as f64 * step).min(24.0);
        let input = InsolationInput {
            site: req.site,
            collector: req.collector,
            instant: ObservationInstant { day: req.day, solar_time },
            reflectance: req.reflectance,
            azimuth_model: req.azimuth_model,
        };
        samples.push(ProfileSample {
            solar_time,
            insolation: calculate_insolation(&input)?,
        });
    }

    let mut totals = DailyTotals::default();
    let mut sunlit_hours = 0.0;
    for pair in samples.windows(2) {
        let dt = pair[1].solar_time - pair[0].solar_time;
        let gated = |s: &ProfileSample| {
            if s.insolation.sun_above_horizon() {
                s.insolation.as_tuple()
            } else {
                (0.0, 0.0, 0.0, 0.0)
            }
        };
        let (b0, d0, r0, _) = gated(&pair[0]);
        let (b1, d1, r1, _) = gated(&pair[1]);
        totals.beam_wh_m2 += (b0 + b1) / 2.0 * dt;
        totals.diffuse_wh_m2 += (d0 + d1) / 2.0 * dt;
        totals.reflected_wh_m2 += (r0 + r1) / 2.0 * dt;
        if pair[0].insolation.sun_above_horizon() {
            sunlit_hours += dt;
        }
    }
    totals.total_wh_m2 = totals.beam_wh_m2 + totals.diffuse_wh_m2 + totals.reflected_wh_m2;

    tracing::debug!(
        day = req.day,
        samples = samples.len(),
        total_wh_m2 = totals.total_wh_m2,
        "daily profile computed"
    );

    Ok(DailyProfile {
        day: req.day,
        step_hours: step,
        samples,
        totals,
        sunlit_hours,
    })
}
