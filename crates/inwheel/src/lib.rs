//! Wheelchair accessibility inference for places.
//!
//! [`accessibility`] holds the fact model and the status rules, [`ingest`]
//! reads stored rows and OSM tags into that model, and [`places`] evaluates
//! whole places and serves the results over HTTP.

pub mod accessibility;
pub mod config;
pub mod error;
pub mod ingest;
pub mod places;
pub mod telemetry;
