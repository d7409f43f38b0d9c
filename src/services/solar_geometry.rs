//! Solar geometry – declination, hour angle, altitude and azimuth of the sun
//! for a day of year, a latitude and a local solar time.

use crate::models::angle::Degrees;
use crate::models::insolation::{AzimuthModel, SolarGeometry};

/// Maximum axial tilt used by the declination approximation.
const OBLIQUITY_DEG: f64 = 23.45;
/// Vernal equinox, day of year.
const EQUINOX_DAY: f64 = 81.0;
/// Stand-in for `tan δ / tan L` at the equator, signed like `tan δ`.
pub const EQUATOR_SENTINEL: f64 = 1e12;
/// Below this `cos β` the sun is treated as at the zenith.
const ZENITH_EPS: f64 = 1e-12;

/// Position of the annual cycle for `day`, `offset` days after the origin.
pub fn annual_phase(day: u32, offset: f64) -> Degrees {
    Degrees(360.0 / 365.0 * (f64::from(day) - offset))
}

pub fn declination(day: u32) -> Degrees {
    Degrees(OBLIQUITY_DEG * annual_phase(day, EQUINOX_DAY).sin())
}

/// 15° per hour, positive before solar noon.
pub fn hour_angle(solar_time: f64) -> Degrees {
    Degrees(15.0 * (12.0 - solar_time))
}

/// Sun angles that depend on time and place only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunPosition {
    pub declination: Degrees,
    pub hour_angle: Degrees,
    pub altitude: Degrees,
}

impl SunPosition {
    pub fn with_azimuth(self, azimuth: Degrees) -> SolarGeometry {
        SolarGeometry {
            declination: self.declination,
            hour_angle: self.hour_angle,
            altitude: self.altitude,
            azimuth,
        }
    }
}

pub fn altitude(latitude: Degrees, declination: Degrees, hour_angle: Degrees) -> Degrees {
    let x = latitude.cos() * declination.cos() * hour_angle.cos() + latitude.sin() * declination.sin();
    Degrees::asin_clamped(x)
}

pub fn locate_sun(latitude: Degrees, day: u32, solar_time: f64) -> SunPosition {
    let declination = declination(day);
    let hour_angle = hour_angle(solar_time);
    let altitude = altitude(latitude, declination, hour_angle);

    #[cfg(feature = "verbose_log")]
    tracing::trace!(
        day,
        solar_time,
        declination = declination.value(),
        hour_angle = hour_angle.value(),
        altitude = altitude.value(),
        "sun located"
    );

    SunPosition { declination, hour_angle, altitude }
}

/// `tan δ / tan L`, the hour-angle cosine that separates the two azimuth
/// branches. Replaced by [`EQUATOR_SENTINEL`] when `tan L` vanishes.
fn branch_threshold(latitude: Degrees, declination: Degrees) -> f64 {
    let tan_l = latitude.tan();
    let tan_d = declination.tan();
    if tan_l.abs() < ZENITH_EPS {
        if tan_d >= 0.0 { EQUATOR_SENTINEL } else { -EQUATOR_SENTINEL }
    } else {
        tan_d / tan_l
    }
}

/// Solar azimuth φs, from south, positive toward east.
///
/// `extraterrestrial_flux` is only read by [`AzimuthModel::Legacy`], which
/// reproduces the historical formula `A · sin(x)`; its values are unverified.
pub fn solar_azimuth(
    model: AzimuthModel,
    latitude: Degrees,
    sun: &SunPosition,
    extraterrestrial_flux: f64,
) -> Degrees {
    let cos_beta = sun.altitude.cos();
    let x = if cos_beta.abs() < ZENITH_EPS {
        0.0
    } else {
        sun.declination.cos() * sun.hour_angle.sin() / cos_beta
    };

    let swing = match model {
        AzimuthModel::Legacy => Degrees(extraterrestrial_flux * x.sin()),
        AzimuthModel::Corrected => Degrees::asin_clamped(x),
    };

    if sun.hour_angle.cos() > branch_threshold(latitude, sun.declination) {
        swing
    } else {
        Degrees(180.0) - swing
    }
}
