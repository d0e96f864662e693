//! Shooting form flaw detection and coaching report synthesis.

pub mod coaching;
pub mod config;
pub mod error;
pub mod telemetry;
