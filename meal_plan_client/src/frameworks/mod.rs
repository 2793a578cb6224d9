// Frameworks layer: configuration, tracing and process wiring.

pub mod config;
pub mod runner;
