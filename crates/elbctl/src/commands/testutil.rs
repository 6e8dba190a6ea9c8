//! Scripted client and IO doubles for command tests

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use elbctl_core::{ApiError, AttachError, DetachError, ElbClient, LoadBalancer};

pub fn lb(id: &str, instances: &[&str]) -> LoadBalancer {
    LoadBalancer {
        id: id.to_string(),
        instances: instances.iter().map(|s| s.to_string()).collect(),
    }
}

/// [`ElbClient`] double: pops one queued result per call and records
/// the calls it saw. `load_balancers` falls back to the fixed snapshot
/// when nothing is queued for it.
#[derive(Default)]
pub struct ScriptedClient {
    pub lbs: Vec<LoadBalancer>,
    pub lb_results: Mutex<VecDeque<Result<Vec<LoadBalancer>, ApiError>>>,
    pub attach_results: Mutex<VecDeque<Result<String, AttachError>>>,
    pub detach_results: Mutex<VecDeque<Result<Option<String>, DetachError>>>,
    pub attach_calls: Mutex<Vec<(String, Option<String>)>>,
}

impl ScriptedClient {
    pub fn new(lbs: Vec<LoadBalancer>) -> Self {
        Self {
            lbs,
            ..Self::default()
        }
    }

    pub fn queue_load_balancers(self, result: Result<Vec<LoadBalancer>, ApiError>) -> Self {
        self.lb_results.lock().unwrap().push_back(result);
        self
    }

    pub fn queue_attach(self, result: Result<String, AttachError>) -> Self {
        self.attach_results.lock().unwrap().push_back(result);
        self
    }

    pub fn queue_detach(self, result: Result<Option<String>, DetachError>) -> Self {
        self.detach_results.lock().unwrap().push_back(result);
        self
    }
}

#[async_trait]
impl ElbClient for ScriptedClient {
    async fn load_balancers(&self) -> Result<Vec<LoadBalancer>, ApiError> {
        match self.lb_results.lock().unwrap().pop_front() {
            Some(result) => result,
            None => Ok(self.lbs.clone()),
        }
    }

    async fn attach(
        &self,
        instance_id: &str,
        target: Option<&str>,
    ) -> Result<String, AttachError> {
        self.attach_calls
            .lock()
            .unwrap()
            .push((instance_id.to_string(), target.map(String::from)));
        self.attach_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(AttachError::NoLoadBalancerAvailable))
    }

    async fn detach(&self, instance_id: &str) -> Result<Option<String>, DetachError> {
        self.detach_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(DetachError::LoadBalancerNotFound))
    }
}

/// Reader that fails the test if the command touches input at all.
pub struct NoInput;

impl std::io::Read for NoInput {
    fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
        panic!("command read from input unexpectedly");
    }
}

impl std::io::BufRead for NoInput {
    fn fill_buf(&mut self) -> std::io::Result<&[u8]> {
        panic!("command read from input unexpectedly");
    }

    fn consume(&mut self, _amt: usize) {}
}

pub fn ids(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|s| s.to_string()).collect()
}
