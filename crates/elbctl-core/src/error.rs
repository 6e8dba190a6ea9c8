//! Error types for provider operations
//!
//! Conditions an operator is expected to handle (nothing to attach to,
//! ambiguous target, unknown load balancer) get their own variants so
//! callers can fold them into per-instance outcomes. [`ApiError`] is
//! reserved for faults nobody can recover from mid-run: transport
//! failures, auth problems, provider 5xx.

use thiserror::Error;

/// Transport or provider fault. Always fatal for the current run.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct ApiError {
    message: String,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Why an attach could not be carried out.
#[derive(Error, Debug)]
pub enum AttachError {
    /// The provider reports no load balancers at all
    #[error("no load balancer available")]
    NoLoadBalancerAvailable,

    /// More than one load balancer exists and no target was given
    #[error("multiple load balancers available, a target is required")]
    MultipleLoadBalancersAvailable,

    /// The requested target does not exist
    #[error("load balancer not found")]
    LoadBalancerNotFound,

    /// The instance is already registered with `lb`
    #[error("instance is already attached to {lb}")]
    InstanceAlreadyAttached { lb: String },

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Why a detach could not be carried out.
#[derive(Error, Debug)]
pub enum DetachError {
    /// No known load balancer holds the instance
    #[error("no load balancer holds this instance")]
    LoadBalancerNotFound,

    #[error(transparent)]
    Api(#[from] ApiError),
}
