pub mod configuration;
pub mod error;
pub mod pet;
pub mod routes;
pub mod startup;
pub mod static_site;
pub mod store;
pub mod telemetry;
