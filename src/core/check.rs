use crate::core::{CheckOutcome, ExpectedQueueName, QueueLister, QueueRecord, Result};

/// First record whose short name equals the expected name.
pub fn find_expected<'a>(
    records: &'a [QueueRecord],
    expected: &ExpectedQueueName,
) -> Option<&'a QueueRecord> {
    records.iter().find(|record| record.name == expected.as_str())
}

pub struct QueueCheck<L: QueueLister> {
    lister: L,
    expected: ExpectedQueueName,
}

impl<L: QueueLister> QueueCheck<L> {
    pub fn new(lister: L, expected: ExpectedQueueName) -> Self {
        Self { lister, expected }
    }

    pub fn expected(&self) -> &ExpectedQueueName {
        &self.expected
    }

    /// 取得所有佇列並解析出短名稱
    pub async fn retrieve(&self) -> Result<Vec<QueueRecord>> {
        let urls = self.lister.list_queue_urls().await?;
        tracing::debug!("Listed {} queues", urls.len());
        Ok(urls.into_iter().map(QueueRecord::from_url).collect())
    }

    pub async fn run(&self) -> CheckOutcome {
        tracing::debug!("Looking for SQS queue '{}'", self.expected);

        match self.retrieve().await {
            Ok(records) => match find_expected(&records, &self.expected) {
                Some(record) => CheckOutcome::Found(record.clone()),
                None => CheckOutcome::Missing {
                    expected: self.expected.to_string(),
                    scanned: records.len(),
                },
            },
            Err(e) => {
                tracing::debug!("💡 Suggestion: {}", e.recovery_suggestion());
                CheckOutcome::Failed {
                    expected: self.expected.to_string(),
                    reason: e.to_string(),
                }
            }
        }
    }
}
