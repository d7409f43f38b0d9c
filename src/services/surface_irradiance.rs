//! Projection of the beam onto the tilted collector plus the isotropic sky
//! diffuse and ground-reflected contributions.

use crate::models::angle::Degrees;
use crate::models::insolation::{Atmosphere, CollectorOrientation, Insolation, SolarGeometry};
use crate::services::solar_geometry::annual_phase;

/// Sky diffuse factor C.
pub fn sky_diffuse_factor(day: u32) -> f64 {
    0.095 + 0.04 * annual_phase(day, 100.0).sin()
}

/// Cosine of the incidence angle between the sun and the collector normal.
pub fn incidence_cosine(geometry: &SolarGeometry, collector: &CollectorOrientation) -> f64 {
    let beta = geometry.altitude;
    let tilt = collector.tilt;
    (geometry.azimuth - collector.azimuth).cos() * beta.cos() * tilt.sin() + beta.sin() * tilt.cos()
}

/// Fraction of the sky dome seen by a surface tilted by `tilt`.
fn sky_view(tilt: Degrees) -> f64 {
    (1.0 + tilt.cos()) / 2.0
}

/// Fraction of the ground seen by a surface tilted by `tilt`.
fn ground_view(tilt: Degrees) -> f64 {
    (1.0 - tilt.cos()) / 2.0
}

pub fn compose(
    geometry: SolarGeometry,
    atmosphere: Atmosphere,
    collector: &CollectorOrientation,
    day: u32,
    reflectance: f64,
) -> Insolation {
    let ib = atmosphere.beam_normal;
    let c = sky_diffuse_factor(day);

    let beam = ib * incidence_cosine(&geometry, collector);
    let diffuse = ib * c * sky_view(collector.tilt);
    let reflected = reflectance * ib * (c + geometry.altitude.sin()) * ground_view(collector.tilt);

    #[cfg(feature = "verbose_log")]
    tracing::trace!(day, beam, diffuse, reflected, sky_diffuse_factor = c, "surface composed");

    Insolation::from_components(beam, diffuse, reflected, geometry, atmosphere)
}
