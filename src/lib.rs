pub mod common;
pub mod config;
pub mod logging;

// Domain data shapes shared across layers
pub mod domain;

// Discovery API wire formats
pub mod apis;

// Layered boundaries for application and infrastructure
pub mod app;
pub mod infra;

// Screen state for whichever front end hosts the app
pub mod presentation;
