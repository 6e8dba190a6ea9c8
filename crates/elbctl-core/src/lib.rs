//! # elbctl-core
//!
//! Shared engine for the elbctl CLI: the provider client interface,
//! the batch runner that drives multi-instance operations, and the
//! profile-based configuration system.
//!
//! The CLI consumes this crate through [`ElbClient`], so everything
//! here stays free of terminal concerns and can be exercised with
//! scripted clients in tests.

pub mod aws;
pub mod batch;
pub mod client;
pub mod config;
pub mod error;

// Re-export main types for convenience
pub use aws::AwsElbClient;
pub use batch::{AttachOutcome, AttachRun, DetachOutcome, attach_batch, detach_batch};
pub use client::{ElbClient, LoadBalancer};
pub use config::{Config, ConfigError, Profile};
pub use error::{ApiError, AttachError, DetachError};
