//! CLI command implementations.
//!
//! - [`classify`] - Class and zoom band for source identifiers
//! - [`config`] - Configuration management (init, show, path)
//! - [`info`] - Profile metadata
//! - [`sources`] - Source plan listing and checks

pub mod classify;
pub mod config;
pub mod info;
pub mod sources;
