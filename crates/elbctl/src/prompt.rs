//! Interactive load balancer selection
//!
//! Used by attach when several load balancers exist and no --to was
//! given. Reads exactly one line; a bad answer is a hard error, not a
//! re-prompt, so a scripted run can never hang on a second read.

use std::io::{BufRead, Write};

use elbctl_core::LoadBalancer;

use crate::error::{ElbCtlError, Result};

/// Ask the operator to pick one load balancer out of several.
///
/// The list is printed zero-indexed, in the order the provider returned
/// it. Returns the id of the chosen load balancer.
pub fn pick_load_balancer(
    load_balancers: &[LoadBalancer],
    input: &mut dyn BufRead,
    out: &mut dyn Write,
) -> Result<String> {
    writeln!(out, "More than one ELB available, pick one in the list")?;
    for (index, lb) in load_balancers.iter().enumerate() {
        writeln!(out, "{}  {}", index, lb.id)?;
    }
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    let answer = line.trim();

    let index: usize = answer.parse().map_err(|_| ElbCtlError::InvalidSelection {
        input: answer.to_string(),
    })?;
    let lb = load_balancers
        .get(index)
        .ok_or(ElbCtlError::SelectionOutOfRange {
            index,
            count: load_balancers.len(),
        })?;

    Ok(lb.id.clone())
}
