pub mod atmosphere;
pub mod insolation_service;
pub mod sampler;
pub mod solar_geometry;
pub mod solar_time;
pub mod surface_irradiance;
