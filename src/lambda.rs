use aws_sdk_sqs::Client as SqsClient;
use chrono::{DateTime, Utc};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use queue_smoke::config::lambda::{CheckRequest, LambdaConfig};
use queue_smoke::core::report;
use queue_smoke::utils::{logger, validation::Validate};
use queue_smoke::{build_client, CheckOutcome, QueueCheck, SqsQueueLister};
use serde::Serialize;

#[derive(Serialize)]
pub struct Response {
    pub status: String,
    pub expected_queue: String,
    pub queue_url: Option<String>,
    pub message: String,
    pub checked_at: DateTime<Utc>,
}

impl Response {
    fn from_outcome(outcome: &CheckOutcome) -> Self {
        let queue_url = match outcome {
            CheckOutcome::Found(record) => Some(record.url.clone()),
            _ => None,
        };

        Self {
            status: outcome.status().to_string(),
            expected_queue: outcome.expected_name().to_string(),
            queue_url,
            message: report::summary_line(outcome),
            checked_at: Utc::now(),
        }
    }
}

async fn function_handler(
    client: SqsClient,
    event: LambdaEvent<CheckRequest>,
) -> Result<Response, Error> {
    tracing::info!("Starting queue-smoke Lambda function");

    let settings = LambdaConfig::from_env().with_request(event.payload);
    settings.validate()?;
    report::warn_missing_parts(&settings.missing_parts());

    let check = QueueCheck::new(SqsQueueLister::new(client), settings.expected_name());
    let outcome = check.run().await;
    report::log_outcome(&outcome);

    into_result(&outcome, settings.strict)
}

/// 嚴格模式下以函式錯誤回報，讓部署流程失敗
fn into_result(outcome: &CheckOutcome, strict: bool) -> Result<Response, Error> {
    if strict && !outcome.is_found() {
        return Err(anyhow::anyhow!(report::summary_line(outcome)).into());
    }

    Ok(Response::from_outcome(outcome))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::subscriber::set_global_default(logger::lambda_subscriber())?;

    let config = LambdaConfig::from_env();
    let client = build_client(&config.settings.aws).await;

    run(service_fn(move |event: LambdaEvent<CheckRequest>| {
        let client = client.clone();
        async move { function_handler(client, event).await }
    }))
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use queue_smoke::QueueRecord;

    fn found() -> CheckOutcome {
        CheckOutcome::Found(QueueRecord::from_url(
            "https://sqs.us-east-1.amazonaws.com/123456789012/prod-svc-us-east-1",
        ))
    }

    fn missing() -> CheckOutcome {
        CheckOutcome::Missing {
            expected: "prod-svc-us-east-1".to_string(),
            scanned: 2,
        }
    }

    fn failed() -> CheckOutcome {
        CheckOutcome::Failed {
            expected: "prod-svc-us-east-1".to_string(),
            reason: "SQS request failed: dispatch failure".to_string(),
        }
    }

    #[test]
    fn test_response_for_found_queue() {
        let response = Response::from_outcome(&found());

        assert_eq!(response.status, "found");
        assert_eq!(response.expected_queue, "prod-svc-us-east-1");
        assert_eq!(
            response.queue_url.as_deref(),
            Some("https://sqs.us-east-1.amazonaws.com/123456789012/prod-svc-us-east-1")
        );
        assert!(response.message.starts_with("Found expected SQS queue"));
    }

    #[test]
    fn test_response_for_missing_and_failed() {
        let response = Response::from_outcome(&missing());
        assert_eq!(response.status, "missing");
        assert_eq!(response.queue_url, None);
        assert!(response.message.contains("not found among 2 queues"));

        let response = Response::from_outcome(&failed());
        assert_eq!(response.status, "failed");
        assert_eq!(response.expected_queue, "prod-svc-us-east-1");
        assert_eq!(response.queue_url, None);
        assert!(response.message.contains("dispatch failure"));
    }

    #[test]
    fn test_strict_mode_turns_non_found_into_error() {
        assert!(into_result(&found(), true).is_ok());

        let err = into_result(&missing(), true).err().unwrap();
        assert!(err.to_string().contains("prod-svc-us-east-1"));

        let err = into_result(&failed(), true).err().unwrap();
        assert!(err.to_string().contains("dispatch failure"));
    }

    #[test]
    fn test_informational_mode_always_responds() {
        assert_eq!(into_result(&missing(), false).unwrap().status, "missing");
        assert_eq!(into_result(&failed(), false).unwrap().status, "failed");
        assert_eq!(into_result(&found(), false).unwrap().status, "found");
    }

    #[test]
    fn test_response_serializes_expected_fields() {
        let value = serde_json::to_value(Response::from_outcome(&missing())).unwrap();

        for field in ["status", "expected_queue", "queue_url", "message", "checked_at"] {
            assert!(value.get(field).is_some(), "missing field {}", field);
        }
    }
}
