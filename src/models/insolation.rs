use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::angle::Degrees;

// ─── Model limits ────────────────────────────────────────────────────────────

/// Physical effects the model acknowledges but does not correct for.
/// Elevation and longitude on [`Site`] never enter the formulas.
pub const UNMODELED_EFFECTS: &[&str] = &[
    "elevation correction: not modeled",
    "weather/cloud correction: not modeled",
];

/// Reference ground reflectance values.
pub mod reflectance {
    pub const NONE: f64 = 0.0;
    pub const DEFAULT: f64 = 0.2;
    pub const SNOW: f64 = 0.8;
}

fn default_reflectance() -> f64 {
    reflectance::DEFAULT
}

// ─── Inputs ──────────────────────────────────────────────────────────────────

/// How the solar azimuth is derived from the hour angle.
///
/// `Legacy` reproduces the historical formula exactly, including its use of
/// `sin` where an inverse sine was meant and the extraterrestrial flux as the
/// leading multiplier. Its azimuth values are unverified; they only reach the
/// result through `cos(φs − φc)`. `Corrected` uses the inverse sine in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AzimuthModel {
    #[default]
    Legacy,
    Corrected,
}

/// Geographic location of the collector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Site {
    /// Geographic latitude (−90 … +90, north positive)
    pub latitude: Degrees,
    /// Longitude (east positive). Only used to turn clock time into solar time.
    #[serde(default)]
    pub longitude: Degrees,
    /// Height above sea level (m). Not modeled.
    #[serde(default)]
    pub elevation_m: f64,
}

/// Orientation of the collector panel.
///
/// Azimuth is measured from due south, positive toward east; tilt is the
/// angle of the panel from horizontal (0 = facing straight up).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CollectorOrientation {
    pub azimuth: Degrees,
    pub tilt: Degrees,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ObservationInstant {
    /// Day of year (1 … 366)
    pub day: u32,
    /// Local solar time in hours (0 … 24)
    pub solar_time: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct InsolationInput {
    pub site: Site,
    pub collector: CollectorOrientation,
    pub instant: ObservationInstant,
    /// Ground reflectance (0 … 1). 0 = none, 0.2 = typical ground, 0.8 = snow.
    #[serde(default = "default_reflectance")]
    pub reflectance: f64,
    #[serde(default)]
    pub azimuth_model: AzimuthModel,
}

impl InsolationInput {
    pub fn new(site: Site, collector: CollectorOrientation, instant: ObservationInstant) -> Self {
        Self {
            site,
            collector,
            instant,
            reflectance: reflectance::DEFAULT,
            azimuth_model: AzimuthModel::default(),
        }
    }

    pub fn with_reflectance(mut self, reflectance: f64) -> Self {
        self.reflectance = reflectance;
        self
    }

    pub fn with_azimuth_model(mut self, model: AzimuthModel) -> Self {
        self.azimuth_model = model;
        self
    }
}

// ─── Intermediate stages ─────────────────────────────────────────────────────

/// Position of the sun for a site and instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SolarGeometry {
    pub declination: Degrees,
    pub hour_angle: Degrees,
    /// Altitude above the horizon (β). Negative when the sun is below it.
    pub altitude: Degrees,
    /// Solar azimuth (φs), from south, positive toward east.
    pub azimuth: Degrees,
}

/// Atmospheric attenuation of the direct beam.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Atmosphere {
    pub air_mass: f64,
    /// Apparent extraterrestrial flux A (W/m²)
    pub extraterrestrial_flux: f64,
    pub optical_depth: f64,
    /// Beam irradiance on a surface normal to the sun's rays, Ib (W/m²)
    pub beam_normal: f64,
}

// ─── Result ──────────────────────────────────────────────────────────────────

/// Irradiance on the collector, all components in W/m².
///
/// The total is never computed on its own: it is always the sum of the
/// three components.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct Insolation {
    beam: f64,
    diffuse: f64,
    reflected: f64,
    total: f64,
    geometry: SolarGeometry,
    atmosphere: Atmosphere,
}

impl Insolation {
    pub fn from_components(
        beam: f64,
        diffuse: f64,
        reflected: f64,
        geometry: SolarGeometry,
        atmosphere: Atmosphere,
    ) -> Self {
        Self {
            beam,
            diffuse,
            reflected,
            total: beam + diffuse + reflected,
            geometry,
            atmosphere,
        }
    }

    pub fn beam(&self) -> f64 {
        self.beam
    }

    pub fn diffuse(&self) -> f64 {
        self.diffuse
    }

    pub fn reflected(&self) -> f64 {
        self.reflected
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn geometry(&self) -> &SolarGeometry {
        &self.geometry
    }

    pub fn atmosphere(&self) -> &Atmosphere {
        &self.atmosphere
    }

    /// (beam, diffuse, reflected, total)
    pub fn as_tuple(&self) -> (f64, f64, f64, f64) {
        (self.beam, self.diffuse, self.reflected, self.total)
    }

    /// The model does not special-case a sun below the horizon; callers that
    /// need physically meaningful values should gate on this.
    pub fn sun_above_horizon(&self) -> bool {
        self.geometry.altitude.value() > 0.0
    }
}

// ─── Daily profile ───────────────────────────────────────────────────────────

fn default_step_hours() -> f64 {
    0.25
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DailyProfileRequest {
    pub site: Site,
    pub collector: CollectorOrientation,
    pub day: u32,
    #[serde(default = "default_reflectance")]
    pub reflectance: f64,
    #[serde(default)]
    pub azimuth_model: AzimuthModel,
    /// Solar-time step between samples, hours (1/3600 ≤ step ≤ 24)
    #[serde(default = "default_step_hours")]
    pub step_hours: f64,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProfileSample {
    pub solar_time: f64,
    pub insolation: Insolation,
}

/// Energy received over the day (Wh/m²), sun-above-horizon samples only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, ToSchema)]
pub struct DailyTotals {
    pub beam_wh_m2: f64,
    pub diffuse_wh_m2: f64,
    pub reflected_wh_m2: f64,
    pub total_wh_m2: f64,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DailyProfile {
    pub day: u32,
    pub step_hours: f64,
    pub samples: Vec<ProfileSample>,
    pub totals: DailyTotals,
    /// Hours with the sun above the horizon, at sample resolution
    pub sunlit_hours: f64,
}

// ─── REST API response types ─────────────────────────────────────────────────

#[derive(Debug, Serialize, ToSchema)]
pub struct InsolationResponse {
    pub insolation: Insolation,
    pub sun_above_horizon: bool,
    pub unmodeled_effects: Vec<String>,
}

impl From<Insolation> for InsolationResponse {
    fn from(insolation: Insolation) -> Self {
        Self {
            sun_above_horizon: insolation.sun_above_horizon(),
            insolation,
            unmodeled_effects: UNMODELED_EFFECTS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Latest sampled value for a configured site.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SiteSnapshot {
    pub site_id: String,
    pub timestamp: DateTime<Utc>,
    pub day: u32,
    pub solar_time: f64,
    pub insolation: Insolation,
    pub sun_above_horizon: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
    pub sites_total: usize,
    pub sites_sampled: usize,
}
