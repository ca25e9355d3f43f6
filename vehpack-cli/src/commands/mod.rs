//! CLI command implementations.

pub mod combine;
pub mod common;
pub mod config;
pub mod convert;
pub mod history;
