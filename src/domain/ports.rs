use crate::utils::error::Result;
use async_trait::async_trait;

/// Source of queue locators, one entry per queue visible to the caller.
#[async_trait]
pub trait QueueLister: Send + Sync {
    async fn list_queue_urls(&self) -> Result<Vec<String>>;
}

