//! # Availability Core
//!
//! Data model shared by the availability calendar widget and its hosts:
//! availability blocks, the per-day schedule mapping, theme overrides and
//! the error type returned by widget operations.

pub mod errors;
pub mod models;
