//! Batch execution over ordered instance lists
//!
//! One provider call per instance, outcomes collected in input order.
//! Expected per-instance conditions never stop the batch; transport
//! faults abort it.

use tracing::debug;

use crate::client::ElbClient;
use crate::error::{ApiError, AttachError, DetachError};

/// Per-instance result of an attach batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttachOutcome {
    /// Registered with `lb` by this run
    Attached { lb: String },
    /// Was already registered with `lb`, nothing changed
    AlreadyAttached { lb: String },
    /// The requested load balancer does not exist
    NotFound,
    /// The provider has no load balancers at all
    NoneAvailable,
}

/// Per-instance result of a detach batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetachOutcome {
    /// Deregistered from `lb`
    Detached { lb: String },
    /// The provider accepted the call but kept the instance registered
    Unable,
    /// No known load balancer holds the instance
    NotAttached,
}

/// Result of running an attach batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttachRun {
    /// One outcome per instance, in input order
    Complete(Vec<AttachOutcome>),
    /// The provider has several load balancers and no target was
    /// bound. The caller must resolve a target and re-run the batch.
    NeedsTarget,
}

/// Attach every instance in `instances` to `target`.
///
/// Outcomes come back in input order, one per instance. A target
/// ambiguity aborts immediately with [`AttachRun::NeedsTarget`] so the
/// caller can bind a target and retry the whole batch.
pub async fn attach_batch(
    client: &dyn ElbClient,
    instances: &[String],
    target: Option<&str>,
) -> Result<AttachRun, ApiError> {
    let mut outcomes = Vec::with_capacity(instances.len());
    for instance in instances {
        let outcome = match client.attach(instance, target).await {
            Ok(lb) => AttachOutcome::Attached { lb },
            Err(AttachError::InstanceAlreadyAttached { lb }) => {
                AttachOutcome::AlreadyAttached { lb }
            }
            Err(AttachError::LoadBalancerNotFound) => AttachOutcome::NotFound,
            Err(AttachError::NoLoadBalancerAvailable) => AttachOutcome::NoneAvailable,
            Err(AttachError::MultipleLoadBalancersAvailable) => {
                return Ok(AttachRun::NeedsTarget);
            }
            Err(AttachError::Api(err)) => return Err(err),
        };
        debug!("attach {}: {:?}", instance, outcome);
        outcomes.push(outcome);
    }
    Ok(AttachRun::Complete(outcomes))
}

/// Detach every instance in `instances` from whatever holds it.
///
/// Outcomes come back in input order, one per instance.
pub async fn detach_batch(
    client: &dyn ElbClient,
    instances: &[String],
) -> Result<Vec<DetachOutcome>, ApiError> {
    let mut outcomes = Vec::with_capacity(instances.len());
    for instance in instances {
        let outcome = match client.detach(instance).await {
            Ok(Some(lb)) => DetachOutcome::Detached { lb },
            Ok(None) => DetachOutcome::Unable,
            Err(DetachError::LoadBalancerNotFound) => DetachOutcome::NotAttached,
            Err(DetachError::Api(err)) => return Err(err),
        };
        debug!("detach {}: {:?}", instance, outcome);
        outcomes.push(outcome);
    }
    Ok(outcomes)
}
