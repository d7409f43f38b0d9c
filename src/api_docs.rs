use utoipa::OpenApi;

use crate::config;
use crate::controllers::insolation_controller;
use crate::models::{angle, insolation};

#[derive(OpenApi)]
#[openapi(
    paths(
        insolation_controller::list_sites,
        insolation_controller::get_site_insolation,
        insolation_controller::calculate,
        insolation_controller::daily,
        insolation_controller::health
    ),
    components(
        schemas(
            angle::Degrees,
            config::SiteConfig,
            insolation::AzimuthModel,
            insolation::Site,
            insolation::CollectorOrientation,
            insolation::ObservationInstant,
            insolation::InsolationInput,
            insolation::SolarGeometry,
            insolation::Atmosphere,
            insolation::Insolation,
            insolation::InsolationResponse,
            insolation::DailyProfileRequest,
            insolation::DailyProfile,
            insolation::DailyTotals,
            insolation::ProfileSample,
            insolation::SiteSnapshot,
            insolation::HealthStatus
        )
    ),
    tags(
        (name = "insolation-calc", description = "Tilted-collector solar insolation API")
    )
)]
pub struct ApiDoc;
