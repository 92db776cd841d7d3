//! Shared utilities for the Lumen indicator expression engine

pub mod error;
