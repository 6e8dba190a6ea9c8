//! List load balancers and, optionally, their instances

use std::io::Write;

use elbctl_core::ElbClient;

use crate::error::Result;

pub async fn run(client: &dyn ElbClient, show_instances: bool, out: &mut dyn Write) -> Result<()> {
    let load_balancers = client.load_balancers().await?;

    if load_balancers.is_empty() {
        writeln!(out, "No ELB available")?;
        return Ok(());
    }

    writeln!(out, "{} ELB found:", load_balancers.len())?;
    for lb in &load_balancers {
        writeln!(out, " * {}", lb.id)?;
        if show_instances {
            for instance in &lb.instances {
                writeln!(out, "   - {}", instance)?;
            }
        }
    }

    Ok(())
}
