//! Client interface for load balancer providers
//!
//! Everything above this trait (batch runner, commands) is written
//! against it, so provider behavior can be scripted in tests without
//! touching the network.

use async_trait::async_trait;

use crate::error::{ApiError, AttachError, DetachError};

/// Point-in-time view of one load balancer and its registered instances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadBalancer {
    /// Provider-unique name of the load balancer
    pub id: String,
    /// Instance ids currently registered, in provider order
    pub instances: Vec<String>,
}

/// Narrow interface to the provider's load balancer API.
///
/// `attach` and `detach` report every expected condition through their
/// error enums so callers can branch on them. Only genuine transport or
/// provider faults surface as [`ApiError`].
#[async_trait]
pub trait ElbClient: Send + Sync {
    /// Fetch the current load balancer snapshot, in provider order.
    async fn load_balancers(&self) -> Result<Vec<LoadBalancer>, ApiError>;

    /// Register `instance_id` with `target`, or with the sole load
    /// balancer when no target is given. Returns the id of the load
    /// balancer the instance was registered with.
    async fn attach(
        &self,
        instance_id: &str,
        target: Option<&str>,
    ) -> Result<String, AttachError>;

    /// Deregister `instance_id` from whichever load balancer holds it.
    ///
    /// Returns the holder's id on success, or `Ok(None)` when the
    /// provider accepted the call but still reports the instance as
    /// registered.
    async fn detach(&self, instance_id: &str) -> Result<Option<String>, DetachError>;
}
