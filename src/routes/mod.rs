pub mod insolation_routes;
