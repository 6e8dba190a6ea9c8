//! Detach instances from their load balancer

use std::io::Write;

use elbctl_core::{DetachOutcome, ElbClient, detach_batch};

use crate::error::Result;

pub async fn run(client: &dyn ElbClient, instances: &[String], out: &mut dyn Write) -> Result<()> {
    let outcomes = detach_batch(client, instances).await?;

    for (instance, outcome) in instances.iter().zip(&outcomes) {
        writeln!(out, "{}", render(instance, outcome))?;
    }

    Ok(())
}

fn render(instance: &str, outcome: &DetachOutcome) -> String {
    match outcome {
        DetachOutcome::Detached { lb } => {
            format!("{} successfully detached from {}", instance, lb)
        }
        DetachOutcome::Unable => format!("Unable to detach {}", instance),
        DetachOutcome::NotAttached => format!("{} isn't attached to any known ELB", instance),
    }
}
