use crate::config::AwsSettings;
use crate::domain::ports::QueueLister;
use crate::utils::error::{CheckError, Result};
use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_sqs::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_sqs::operation::list_queues::ListQueuesError;
use aws_sdk_sqs::Client as SqsClient;

/// ListQueues 單頁上限
const LIST_PAGE_SIZE: i32 = 1000;

/// Loads the default credential chain, applying any region or endpoint override.
pub async fn build_client(settings: &AwsSettings) -> SqsClient {
    let mut loader = aws_config::defaults(BehaviorVersion::latest());

    if let Some(region) = &settings.region {
        loader = loader.region(Region::new(region.clone()));
    }
    if let Some(endpoint) = &settings.endpoint_url {
        tracing::debug!("Using SQS endpoint override: {}", endpoint);
        loader = loader.endpoint_url(endpoint);
    }

    let sdk_config = loader.load().await;
    SqsClient::new(&sdk_config)
}

#[derive(Debug, Clone)]
pub struct SqsQueueLister {
    client: SqsClient,
}

impl SqsQueueLister {
    pub fn new(client: SqsClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl QueueLister for SqsQueueLister {
    async fn list_queue_urls(&self) -> Result<Vec<String>> {
        let mut urls = Vec::new();
        let mut next_token: Option<String> = None;

        loop {
            let output = self
                .client
                .list_queues()
                .max_results(LIST_PAGE_SIZE)
                .set_next_token(next_token.take())
                .send()
                .await
                .map_err(provider_error)?;

            urls.extend(output.queue_urls().iter().cloned());

            match output.next_token() {
                Some(token) if !token.is_empty() => {
                    tracing::debug!("Fetched {} queue urls, requesting next page", urls.len());
                    next_token = Some(token.to_string());
                }
                _ => break,
            }
        }

        Ok(urls)
    }
}

fn provider_error(err: SdkError<ListQueuesError>) -> CheckError {
    let service_error = err.as_service_error();
    let code = service_error.and_then(|e| e.code()).map(str::to_string);
    let message = match service_error.and_then(|e| e.message()) {
        Some(message) => message.to_string(),
        None => DisplayErrorContext(&err).to_string(),
    };

    CheckError::Provider { code, message }
}
