pub mod avis;
pub mod config;
pub mod error;
pub mod import;
pub mod tarification;
pub mod telemetry;
