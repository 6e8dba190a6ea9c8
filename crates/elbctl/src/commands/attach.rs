//! Attach instances to a load balancer

use std::io::{BufRead, Write};

use tracing::debug;

use elbctl_core::{AttachOutcome, AttachRun, ElbClient, attach_batch};

use crate::error::{ElbCtlError, Result};
use crate::prompt;

/// Run the attach batch, asking the operator for a target if the
/// provider turns out to have several load balancers.
///
/// The question is asked at most once. Once a target is bound the whole
/// batch re-runs against it, so instances processed before the
/// ambiguity surfaced end up on the same load balancer as the rest.
pub async fn run(
    client: &dyn ElbClient,
    instances: &[String],
    to: Option<String>,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
) -> Result<()> {
    let mut target = to;
    let outcomes = loop {
        match attach_batch(client, instances, target.as_deref()).await? {
            AttachRun::Complete(outcomes) => break outcomes,
            AttachRun::NeedsTarget if target.is_none() => {
                debug!("Multiple load balancers available, asking the operator");
                let load_balancers = client.load_balancers().await?;
                target = Some(prompt::pick_load_balancer(&load_balancers, input, out)?);
            }
            AttachRun::NeedsTarget => {
                return Err(ElbCtlError::TargetStillAmbiguous {
                    target: target.unwrap_or_default(),
                });
            }
        }
    };

    for (instance, outcome) in instances.iter().zip(&outcomes) {
        writeln!(out, "{}", render(instance, outcome))?;
    }

    Ok(())
}

fn render(instance: &str, outcome: &AttachOutcome) -> String {
    match outcome {
        AttachOutcome::Attached { lb } => format!("{} successfully added to {}", instance, lb),
        AttachOutcome::AlreadyAttached { lb } => {
            format!("{} is already attached to {}", instance, lb)
        }
        AttachOutcome::NotFound => format!("{}: ELB not found", instance),
        AttachOutcome::NoneAvailable => format!("{}: No ELB available", instance),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testutil::{NoInput, ScriptedClient, ids, lb};
    use elbctl_core::{ApiError, AttachError};
    use std::io::Cursor;

    async fn run_attach(
        client: &ScriptedClient,
        instances: &[&str],
        to: Option<&str>,
        answer: &str,
    ) -> (Result<()>, String) {
        let mut input = Cursor::new(answer.to_string());
        let mut out = Vec::new();
        let result = run(
            client,
            &ids(instances),
            to.map(String::from),
            &mut input,
            &mut out,
        )
        .await;
        (result, String::from_utf8(out).unwrap())
    }

    #[tokio::test]
    async fn test_attach_prints_success_message() {
        let client = ScriptedClient::new(vec![lb("web-prod", &[])])
            .queue_attach(Ok("web-prod".to_string()));

        let (result, output) = run_attach(&client, &["i-0a1b2c3d"], None, "").await;

        result.unwrap();
        assert!(output.contains("i-0a1b2c3d successfully added to web-prod"));
    }

    #[tokio::test]
    async fn test_attach_reports_already_attached_differently() {
        let client = ScriptedClient::new(vec![lb("web-prod", &["i-0a1b2c3d"])])
            .queue_attach(Err(AttachError::InstanceAlreadyAttached {
                lb: "web-prod".to_string(),
            }))
            .queue_attach(Ok("web-prod".to_string()));

        let (result, output) =
            run_attach(&client, &["i-0a1b2c3d", "i-4e5f6a7b"], None, "").await;

        result.unwrap();
        assert!(output.contains("i-0a1b2c3d is already attached to web-prod"));
        assert!(output.contains("i-4e5f6a7b successfully added to web-prod"));
        assert!(!output.contains("i-0a1b2c3d successfully added"));
    }

    #[tokio::test]
    async fn test_attach_reports_missing_target() {
        let client = ScriptedClient::new(vec![lb("web-prod", &[])])
            .queue_attach(Err(AttachError::LoadBalancerNotFound));

        let (result, output) = run_attach(&client, &["i-0a1b2c3d"], Some("nope"), "").await;

        result.unwrap();
        assert!(output.contains("i-0a1b2c3d: ELB not found"));
    }

    #[tokio::test]
    async fn test_attach_reports_empty_provider() {
        let client =
            ScriptedClient::new(vec![]).queue_attach(Err(AttachError::NoLoadBalancerAvailable));

        let (result, output) = run_attach(&client, &["i-0a1b2c3d"], None, "").await;

        result.unwrap();
        assert!(output.contains("i-0a1b2c3d: No ELB available"));
    }

    #[tokio::test]
    async fn test_batch_output_keeps_input_order() {
        let client = ScriptedClient::new(vec![lb("web-prod", &[])])
            .queue_attach(Ok("web-prod".to_string()))
            .queue_attach(Ok("web-prod".to_string()));

        let (result, output) =
            run_attach(&client, &["i-0a1b2c3d", "i-4e5f6a7b"], Some("web-prod"), "").await;

        result.unwrap();
        let first = output.find("i-0a1b2c3d successfully added to web-prod").unwrap();
        let second = output.find("i-4e5f6a7b successfully added to web-prod").unwrap();
        assert!(first < second);
    }

    #[tokio::test]
    async fn test_ambiguity_prompts_once_and_reruns_the_batch() {
        let client = ScriptedClient::new(vec![lb("web-prod", &[]), lb("web-staging", &[])])
            .queue_attach(Err(AttachError::MultipleLoadBalancersAvailable))
            .queue_attach(Ok("web-staging".to_string()));

        let (result, output) = run_attach(&client, &["i-0a1b2c3d"], None, "1\n").await;

        result.unwrap();
        assert!(output.contains("More than one ELB available, pick one in the list"));
        assert!(output.contains("0  web-prod"));
        assert!(output.contains("1  web-staging"));
        assert!(output.contains("i-0a1b2c3d successfully added to web-staging"));

        let calls = client.attach_calls.lock().unwrap();
        assert_eq!(
            *calls,
            vec![
                ("i-0a1b2c3d".to_string(), None),
                ("i-0a1b2c3d".to_string(), Some("web-staging".to_string())),
            ]
        );
    }

    #[tokio::test]
    async fn test_chosen_target_binds_the_whole_batch() {
        let client = ScriptedClient::new(vec![lb("web-prod", &[]), lb("web-staging", &[])])
            .queue_attach(Err(AttachError::MultipleLoadBalancersAvailable))
            .queue_attach(Ok("web-prod".to_string()))
            .queue_attach(Ok("web-prod".to_string()));

        let (result, output) = run_attach(&client, &["i-0a1b2c3d", "i-4e5f6a7b"], None, "0\n").await;

        result.unwrap();
        assert!(output.contains("i-0a1b2c3d successfully added to web-prod"));
        assert!(output.contains("i-4e5f6a7b successfully added to web-prod"));

        let calls = client.attach_calls.lock().unwrap();
        // first pass stops at the ambiguity, second pass carries the
        // chosen target for every instance
        assert_eq!(
            *calls,
            vec![
                ("i-0a1b2c3d".to_string(), None),
                ("i-0a1b2c3d".to_string(), Some("web-prod".to_string())),
                ("i-4e5f6a7b".to_string(), Some("web-prod".to_string())),
            ]
        );
    }

    #[tokio::test]
    async fn test_explicit_target_never_prompts() {
        let client = ScriptedClient::new(vec![lb("web-prod", &[]), lb("web-staging", &[])])
            .queue_attach(Ok("web-staging".to_string()));

        let mut input = NoInput;
        let mut out = Vec::new();
        let result = run(
            &client,
            &ids(&["i-0a1b2c3d"]),
            Some("web-staging".to_string()),
            &mut input,
            &mut out,
        )
        .await;

        result.unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("i-0a1b2c3d successfully added to web-staging"));
        assert!(!output.contains("pick one in the list"));
    }

    #[tokio::test]
    async fn test_sole_load_balancer_never_prompts() {
        let client = ScriptedClient::new(vec![lb("web-prod", &[])])
            .queue_attach(Ok("web-prod".to_string()));

        let mut input = NoInput;
        let mut out = Vec::new();
        let result = run(&client, &ids(&["i-0a1b2c3d"]), None, &mut input, &mut out).await;

        result.unwrap();
    }

    #[tokio::test]
    async fn test_invalid_answer_aborts_before_any_attach_output() {
        let client = ScriptedClient::new(vec![lb("web-prod", &[]), lb("web-staging", &[])])
            .queue_attach(Err(AttachError::MultipleLoadBalancersAvailable));

        let (result, output) = run_attach(&client, &["i-0a1b2c3d"], None, "banana\n").await;

        assert!(matches!(result, Err(ElbCtlError::InvalidSelection { .. })));
        assert!(!output.contains("successfully added"));
    }

    #[tokio::test]
    async fn test_persistent_ambiguity_is_fatal() {
        let client = ScriptedClient::new(vec![lb("web-prod", &[]), lb("web-staging", &[])])
            .queue_attach(Err(AttachError::MultipleLoadBalancersAvailable))
            .queue_attach(Err(AttachError::MultipleLoadBalancersAvailable));

        let (result, _) = run_attach(&client, &["i-0a1b2c3d"], None, "0\n").await;

        assert!(matches!(
            result,
            Err(ElbCtlError::TargetStillAmbiguous { .. })
        ));
    }

    #[tokio::test]
    async fn test_transport_fault_is_fatal() {
        let client = ScriptedClient::new(vec![lb("web-prod", &[])])
            .queue_attach(Err(ApiError::new("connection reset").into()));

        let (result, output) = run_attach(&client, &["i-0a1b2c3d"], None, "").await;

        assert!(matches!(result, Err(ElbCtlError::Api(_))));
        assert!(output.is_empty());
    }

    #[tokio::test]
    async fn test_snapshot_fault_during_disambiguation_is_fatal() {
        let client = ScriptedClient::new(vec![lb("web-prod", &[]), lb("web-staging", &[])])
            .queue_attach(Err(AttachError::MultipleLoadBalancersAvailable))
            .queue_load_balancers(Err(ApiError::new("connection reset")));

        let (result, output) = run_attach(&client, &["i-0a1b2c3d"], None, "0\n").await;

        assert!(matches!(result, Err(ElbCtlError::Api(_))));
        assert!(output.is_empty());
    }
}
