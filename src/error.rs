use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// Rejected model inputs. Raised before any computation; there is no
/// partial result.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InsolationError {
    #[error("latitude {0}° is outside [-90, 90]")]
    InvalidLatitude(f64),
    #[error("latitude {0}° is a pole: declination/latitude tangents are singular there")]
    PolarSingularity(f64),
    #[error("collector tilt {0}° is outside [0, 180]")]
    InvalidTilt(f64),
    #[error("reflectance {0} is outside [0, 1]")]
    InvalidReflectance(f64),
    #[error("day of year {0} is outside [1, 366]")]
    InvalidDay(u32),
    #[error("solar time {0} h is outside [0, 24]")]
    InvalidSolarTime(f64),
    #[error("profile step {0} h must be in [1/3600, 24]")]
    InvalidStep(f64),
    #[error("longitude {0}° is outside [-180, 180]")]
    InvalidLongitude(f64),
    #[error("{0} must be a finite number")]
    NonFinite(&'static str),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot parse config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("site {id}: {source}")]
    InvalidSite {
        id: String,
        #[source]
        source: InsolationError,
    },
    #[error("duplicate site id {0}")]
    DuplicateSite(String),
}

/// HTTP face of [`InsolationError`].
#[derive(Debug)]
pub struct ApiError(pub InsolationError);

impl From<InsolationError> for ApiError {
    fn from(err: InsolationError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self.0, "rejected insolation request");
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(serde_json::json!({ "error": self.0.to_string() })),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_descriptive() {
        assert_eq!(
            InsolationError::InvalidLatitude(91.0).to_string(),
            "latitude 91° is outside [-90, 90]"
        );
        assert_eq!(InsolationError::InvalidDay(0).to_string(), "day of year 0 is outside [1, 366]");
    }

    #[test]
    fn test_api_error_status() {
        let resp = ApiError(InsolationError::InvalidTilt(-5.0)).into_response();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
