//! Commands module for kata CLI
//!
//! Provides command implementations for single evaluations and battery runs.

pub mod check;
pub mod eval;
