//! Client construction from configuration profiles
//!
//! Profile settings layer on top of the SDK's default provider chain:
//! region and static credentials only apply when the profile carries
//! them, so a machine with working AWS env vars needs no config at all.

use aws_config::{BehaviorVersion, Region};
use aws_sdk_elasticloadbalancing::config::Credentials;
use tracing::{debug, trace};

use elbctl_core::{AwsElbClient, Config};

use crate::error::Result;

/// Manages the configuration and builds provider clients from it
#[derive(Clone)]
pub struct ConnectionManager {
    pub config: Config,
}

impl ConnectionManager {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Build the load balancer client for the resolved profile.
    pub async fn create_client(&self, profile_name: Option<&str>) -> Result<AwsElbClient> {
        debug!("Creating load balancer client");
        trace!("Profile name: {:?}", profile_name);

        let resolved = self.config.resolve_profile(profile_name)?;
        let profile = match &resolved {
            Some(name) => {
                debug!("Using profile: {}", name);
                self.config.profiles.get(name.as_str())
            }
            None => {
                debug!("No profile configured, using SDK defaults");
                None
            }
        };

        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = profile.and_then(|p| p.region.clone()) {
            debug!("Region from profile: {}", region);
            loader = loader.region(Region::new(region));
        }
        if let Some((key, secret)) = profile.and_then(|p| p.static_credentials()) {
            debug!("Using static credentials from profile");
            loader = loader.credentials_provider(Credentials::new(
                key,
                secret,
                None,
                None,
                "elbctl-profile",
            ));
        }
        let shared_config = loader.load().await;

        let mut builder = aws_sdk_elasticloadbalancing::config::Builder::from(&shared_config);
        if let Some(endpoint) = profile.and_then(|p| p.endpoint_url.clone()) {
            debug!("Endpoint override: {}", endpoint);
            builder = builder.endpoint_url(endpoint);
        }

        let client = aws_sdk_elasticloadbalancing::Client::from_conf(builder.build());
        debug!("Load balancer client created successfully");

        Ok(AwsElbClient::new(client))
    }
}
