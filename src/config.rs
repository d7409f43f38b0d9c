use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::ConfigError;
use crate::models::angle::Degrees;
use crate::models::insolation::{reflectance, AzimuthModel, CollectorOrientation, Site};
use crate::services::insolation_service;

fn default_sample_interval_s() -> u64 { 60 }
fn default_reflectance() -> f64 { reflectance::DEFAULT }

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default = "default_sample_interval_s")]
    pub sample_interval_s: u64,
    #[serde(default)]
    pub azimuth_model: AzimuthModel,
    pub sites: Vec<SiteConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

/// A collector installation sampled in the background.
#[derive(Debug, Deserialize, Serialize, Clone, ToSchema)]
pub struct SiteConfig {
    pub id: String,
    pub name: String,
    pub latitude: f64,
    /// East positive
    pub longitude: f64,
    #[serde(default)]
    pub elevation_m: f64,
    pub collector_azimuth: f64,
    pub collector_tilt: f64,
    #[serde(default = "default_reflectance")]
    pub reflectance: f64,
}

impl SiteConfig {
    pub fn site(&self) -> Site {
        Site {
            latitude: Degrees(self.latitude),
            longitude: Degrees(self.longitude),
            elevation_m: self.elevation_m,
        }
    }

    pub fn collector(&self) -> CollectorOrientation {
        CollectorOrientation {
            azimuth: Degrees(self.collector_azimuth),
            tilt: Degrees(self.collector_tilt),
        }
    }
}

impl Default for Config {
    /// Single site matching the reference scenario.
    fn default() -> Self {
        Self {
            server: ServerConfig { port: 8080 },
            sample_interval_s: default_sample_interval_s(),
            azimuth_model: AzimuthModel::default(),
            sites: vec![SiteConfig {
                id: "reference".to_string(),
                name: "Reference collector".to_string(),
                latitude: 33.7,
                longitude: -84.4,
                elevation_m: 75.5,
                collector_azimuth: 20.0,
                collector_tilt: 52.0,
                reflectance: reflectance::DEFAULT,
            }],
        }
    }
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&content, &path.display().to_string())
    }

    pub fn from_json(content: &str, origin: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(content).map_err(|source| ConfigError::Parse {
            path: origin.to_string(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Site parameters are checked once at startup so the sampler never
    /// runs into a domain error.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for s in &self.sites {
            if !seen.insert(s.id.as_str()) {
                return Err(ConfigError::DuplicateSite(s.id.clone()));
            }
            let invalid = |source| ConfigError::InvalidSite { id: s.id.clone(), source };
            insolation_service::validate_latitude(s.latitude).map_err(invalid)?;
            insolation_service::validate_longitude(s.longitude).map_err(invalid)?;
            insolation_service::validate_tilt(s.collector_tilt).map_err(invalid)?;
            insolation_service::validate_reflectance(s.reflectance).map_err(invalid)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InsolationError;

    #[test]
    fn test_parse_with_defaults() {
        let json = r#"{
            "server": { "port": 9000 },
            "sites": [{
                "id": "a", "name": "A", "latitude": 10.0, "longitude": 5.0,
                "collector_azimuth": 0.0, "collector_tilt": 30.0
            }]
        }"#;
        let cfg = Config::from_json(json, "inline").unwrap();
        assert_eq!(cfg.server.port, 9000);
        assert_eq!(cfg.sample_interval_s, 60);
        assert_eq!(cfg.azimuth_model, AzimuthModel::Legacy);
        assert_eq!(cfg.sites[0].reflectance, 0.2);
        assert_eq!(cfg.sites[0].elevation_m, 0.0);
    }

    #[test]
    fn test_rejects_invalid_site() {
        let json = r#"{
            "server": { "port": 9000 },
            "sites": [{
                "id": "bad", "name": "Bad", "latitude": 10.0, "longitude": 5.0,
                "collector_azimuth": 0.0, "collector_tilt": 30.0, "reflectance": 1.5
            }]
        }"#;
        match Config::from_json(json, "inline") {
            Err(ConfigError::InvalidSite { id, source }) => {
                assert_eq!(id, "bad");
                assert_eq!(source, InsolationError::InvalidReflectance(1.5));
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_rejects_out_of_range_longitude() {
        let json = r#"{
            "server": { "port": 9000 },
            "sites": [{
                "id": "far", "name": "Far", "latitude": 10.0, "longitude": 1e20,
                "collector_azimuth": 0.0, "collector_tilt": 30.0
            }]
        }"#;
        match Config::from_json(json, "inline") {
            Err(ConfigError::InvalidSite { id, source }) => {
                assert_eq!(id, "far");
                assert_eq!(source, InsolationError::InvalidLongitude(1e20));
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let mut cfg = Config::default();
        cfg.sites.push(cfg.sites[0].clone());
        assert!(matches!(cfg.validate(), Err(ConfigError::DuplicateSite(id)) if id == "reference"));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(Config::load("/nonexistent/config.json"), Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_default_is_valid() {
        Config::default().validate().unwrap();
    }
}
