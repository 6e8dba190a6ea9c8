//! Classic ELB implementation of [`ElbClient`]
//!
//! Wraps the AWS SDK client and folds provider responses into the
//! operation error taxonomy. Attach and detach both work from a fresh
//! snapshot so membership checks reflect the provider's current state,
//! not a cached one.

use async_trait::async_trait;
use aws_sdk_elasticloadbalancing::Client;
use aws_sdk_elasticloadbalancing::error::DisplayErrorContext;
use aws_sdk_elasticloadbalancing::types::Instance;
use tracing::{debug, trace};

use crate::client::{ElbClient, LoadBalancer};
use crate::error::{ApiError, AttachError, DetachError};

/// [`ElbClient`] backed by the Classic ELB API.
pub struct AwsElbClient {
    inner: Client,
}

impl AwsElbClient {
    pub fn new(inner: Client) -> Self {
        Self { inner }
    }

    async fn describe(&self) -> Result<Vec<LoadBalancer>, ApiError> {
        let output = self
            .inner
            .describe_load_balancers()
            .send()
            .await
            .map_err(api_error)?;

        let load_balancers = output
            .load_balancer_descriptions()
            .iter()
            .map(|description| LoadBalancer {
                id: description.load_balancer_name().unwrap_or_default().to_string(),
                instances: description
                    .instances()
                    .iter()
                    .filter_map(|instance| instance.instance_id().map(String::from))
                    .collect(),
            })
            .collect::<Vec<_>>();

        trace!("Snapshot holds {} load balancers", load_balancers.len());
        Ok(load_balancers)
    }
}

#[async_trait]
impl ElbClient for AwsElbClient {
    async fn load_balancers(&self) -> Result<Vec<LoadBalancer>, ApiError> {
        self.describe().await
    }

    async fn attach(
        &self,
        instance_id: &str,
        target: Option<&str>,
    ) -> Result<String, AttachError> {
        let load_balancers = self.describe().await?;
        let lb = select_target(&load_balancers, target)?;

        // Registering an already-registered instance is a provider
        // no-op; report it instead so the operator sees the real state.
        if lb.instances.iter().any(|id| id == instance_id) {
            return Err(AttachError::InstanceAlreadyAttached { lb: lb.id.clone() });
        }

        debug!("Registering {} with {}", instance_id, lb.id);
        self.inner
            .register_instances_with_load_balancer()
            .load_balancer_name(&lb.id)
            .instances(Instance::builder().instance_id(instance_id).build())
            .send()
            .await
            .map_err(api_error)?;

        Ok(lb.id.clone())
    }

    async fn detach(&self, instance_id: &str) -> Result<Option<String>, DetachError> {
        let load_balancers = self.describe().await?;
        let lb = holder(&load_balancers, instance_id).ok_or(DetachError::LoadBalancerNotFound)?;

        debug!("Deregistering {} from {}", instance_id, lb.id);
        let output = self
            .inner
            .deregister_instances_from_load_balancer()
            .load_balancer_name(&lb.id)
            .instances(Instance::builder().instance_id(instance_id).build())
            .send()
            .await
            .map_err(api_error)?;

        // The response lists the instances still registered. The
        // provider can accept the call and keep the instance anyway.
        let still_registered = output
            .instances()
            .iter()
            .filter_map(|instance| instance.instance_id())
            .any(|id| id == instance_id);

        if still_registered {
            return Ok(None);
        }
        Ok(Some(lb.id.clone()))
    }
}

fn api_error(err: impl std::error::Error) -> ApiError {
    ApiError::new(DisplayErrorContext(&err).to_string())
}

/// Pick the load balancer an attach should bind to.
///
/// An explicit target must exist. Without one the choice is only
/// defined when the snapshot holds exactly one load balancer.
fn select_target<'a>(
    load_balancers: &'a [LoadBalancer],
    target: Option<&str>,
) -> Result<&'a LoadBalancer, AttachError> {
    match target {
        Some(name) => load_balancers
            .iter()
            .find(|lb| lb.id == name)
            .ok_or(AttachError::LoadBalancerNotFound),
        None => match load_balancers {
            [] => Err(AttachError::NoLoadBalancerAvailable),
            [only] => Ok(only),
            _ => Err(AttachError::MultipleLoadBalancersAvailable),
        },
    }
}

/// Find the load balancer currently holding `instance_id`.
fn holder<'a>(load_balancers: &'a [LoadBalancer], instance_id: &str) -> Option<&'a LoadBalancer> {
    load_balancers
        .iter()
        .find(|lb| lb.instances.iter().any(|id| id == instance_id))
}
