//! # Bundle sync server
//! Exposes the bundle sync as an HTTP endpoint, so that it can be triggered by a scheduler or a webhook instead of
//! from the command line.
//!
//! ## Configuration
//! The server is configured via environment variables. See [config](config/index.html) for more information.
//!
//! ## Routes
//! The server exposes the following routes:
//! * `/health`: A health check route that returns a 200 OK response.
//! * `/sync` (POST): Runs a full sync and reports the outcome of every bundle.

pub mod cli;
pub mod config;
pub mod data_objects;
pub mod errors;
pub mod routes;
pub mod server;
