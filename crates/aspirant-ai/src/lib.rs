//! Career guidance engine for defence and civil services aspirants.
//!
//! The library validates candidate submissions, scores officer-like
//! qualities, screens profiles against a fixed role catalog, and turns the
//! top match into a dated study plan. The `services/api` binary exposes the
//! workflows over HTTP and the command line.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
