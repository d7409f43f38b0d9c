pub mod angle;
pub mod insolation;
