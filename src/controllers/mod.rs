pub mod insolation_controller;
