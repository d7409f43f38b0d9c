//! Atmospheric attenuation of the direct beam: air mass, apparent
//! extraterrestrial flux, optical depth and the beam-normal irradiance.
//!
//! Empirical clear-sky fits; no elevation or weather correction is applied.

use crate::models::angle::Degrees;
use crate::models::insolation::Atmosphere;
use crate::services::solar_geometry::annual_phase;

/// Relative optical path length through the atmosphere. Grows as the sun
/// approaches the horizon and keeps growing below it.
pub fn air_mass(altitude: Degrees) -> f64 {
    let s = 708.0 * altitude.sin();
    (s.powi(2) + 1417.0).sqrt() - s
}

/// Apparent extraterrestrial flux A (W/m²).
pub fn extraterrestrial_flux(day: u32) -> f64 {
    1160.0 + 75.0 * annual_phase(day, 275.0).sin()
}

/// Optical depth k.
pub fn optical_depth(day: u32) -> f64 {
    0.174 + 0.035 * annual_phase(day, 100.0).sin()
}

/// Beam irradiance normal to the sun's rays. Not clamped: a sun below the
/// horizon yields a large air mass and whatever value the fit produces.
pub fn attenuate(altitude: Degrees, day: u32) -> Atmosphere {
    let air_mass = air_mass(altitude);
    let extraterrestrial_flux = extraterrestrial_flux(day);
    let optical_depth = optical_depth(day);
    let beam_normal = extraterrestrial_flux * (-optical_depth * air_mass).exp();

    #[cfg(feature = "verbose_log")]
    tracing::trace!(
        day,
        air_mass,
        extraterrestrial_flux,
        optical_depth,
        beam_normal,
        "beam attenuated"
    );

    Atmosphere {
        air_mass,
        extraterrestrial_flux,
        optical_depth,
        beam_normal,
    }
}
