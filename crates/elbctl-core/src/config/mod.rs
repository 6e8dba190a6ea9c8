//! Configuration and profile management for elbctl
//!
// Allow nested config module - this is intentional for the config subsystem

#![allow(clippy::module_inception)]
//!
//! This module provides the configuration system for managing AWS
//! settings across environments.
//!
//! # Features
//!
//! - Multiple named profiles for different accounts and regions
//! - Environment variable expansion in config files
//! - Platform-specific config file locations
//! - Endpoint overrides for local API stand-ins

pub mod config;
pub mod error;

// Re-export main types for convenience
pub use config::{Config, Profile};
pub use error::{ConfigError, Result};
