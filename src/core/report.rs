use crate::core::CheckOutcome;

/// Reports the outcome of a check as log lines.
pub fn log_outcome(outcome: &CheckOutcome) {
    match outcome {
        CheckOutcome::Found(record) => {
            tracing::info!("✅ post_deploy job ran successfully!");
            tracing::info!(
                queue_url = %record.url,
                queue_name = %record.name,
                "Found expected SQS queue"
            );
        }
        CheckOutcome::Missing { expected, scanned } => {
            tracing::warn!(scanned, "Expected SQS queue '{}' not found.", expected);
        }
        CheckOutcome::Failed { reason, .. } => {
            tracing::error!("❌ post_deploy job failed to run");
            tracing::info!("Failed to retrieve SQS queues.");
            tracing::error!("{}", reason);
        }
    }
}

/// Warns about name parts that fell back to the placeholder.
pub fn warn_missing_parts(missing: &[&str]) {
    if !missing.is_empty() {
        tracing::warn!(
            "{} not set, using placeholder in expected queue name",
            missing.join(", ")
        );
    }
}

/// 單行摘要，用於 Lambda 回應
pub fn summary_line(outcome: &CheckOutcome) -> String {
    match outcome {
        CheckOutcome::Found(record) => {
            format!("Found expected SQS queue '{}' at {}", record.name, record.url)
        }
        CheckOutcome::Missing { expected, scanned } => format!(
            "Expected SQS queue '{}' not found among {} queues",
            expected, scanned
        ),
        CheckOutcome::Failed { reason, .. } => {
            format!("Failed to retrieve SQS queues: {}", reason)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::QueueRecord;
    use crate::utils::logger::{subscriber_with_writer, LogFormat};
    use std::io;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl LogBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for LogBuffer {
        type Writer = LogBuffer;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn capture(outcome: &CheckOutcome) -> String {
        let buffer = LogBuffer::default();
        let subscriber = subscriber_with_writer(false, LogFormat::Compact, false, buffer.clone());
        tracing::subscriber::with_default(subscriber, || log_outcome(outcome));
        buffer.contents()
    }

    #[test]
    fn test_found_logs_success_with_url_and_name() {
        let outcome = CheckOutcome::Found(QueueRecord::from_url(
            "https://sqs.us-east-1.amazonaws.com/123456789012/prod-svc-us-east-1",
        ));

        let logs = capture(&outcome);

        assert!(logs.contains("INFO"));
        assert!(logs.contains("post_deploy job ran successfully!"));
        assert!(logs.contains("https://sqs.us-east-1.amazonaws.com/123456789012/prod-svc-us-east-1"));
        assert!(logs.contains("queue_name=prod-svc-us-east-1"));
        assert!(!logs.contains("WARN"));
    }

    #[test]
    fn test_missing_logs_warning_without_success_line() {
        let outcome = CheckOutcome::Missing {
            expected: "prod-svc-us-east-1".to_string(),
            scanned: 1,
        };

        let logs = capture(&outcome);

        assert!(logs.contains("WARN"));
        assert!(logs.contains("Expected SQS queue 'prod-svc-us-east-1' not found."));
        assert!(!logs.contains("ran successfully"));
    }

    #[test]
    fn test_failed_logs_error_message() {
        let outcome = CheckOutcome::Failed {
            expected: "prod-svc-us-east-1".to_string(),
            reason: "SQS request failed: connection refused".to_string(),
        };

        let logs = capture(&outcome);

        assert!(logs.contains("ERROR"));
        assert!(logs.contains("post_deploy job failed to run"));
        assert!(logs.contains("Failed to retrieve SQS queues."));
        assert!(logs.contains("connection refused"));
        assert!(!logs.contains("ran successfully"));
    }

    #[test]
    fn test_missing_parts_warning() {
        let buffer = LogBuffer::default();
        let subscriber = subscriber_with_writer(false, LogFormat::Compact, false, buffer.clone());
        tracing::subscriber::with_default(subscriber, || {
            warn_missing_parts(&[]);
            warn_missing_parts(&["ENV_PREFIX", "REGION"]);
        });

        let logs = buffer.contents();
        assert_eq!(logs.matches("WARN").count(), 1);
        assert!(logs.contains("ENV_PREFIX, REGION not set"));
    }

    #[test]
    fn test_summary_line() {
        let outcome = CheckOutcome::Missing {
            expected: "prod-svc-us-east-1".to_string(),
            scanned: 4,
        };
        assert_eq!(
            summary_line(&outcome),
            "Expected SQS queue 'prod-svc-us-east-1' not found among 4 queues"
        );
    }
}
