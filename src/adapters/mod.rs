// Adapters layer: concrete implementations of the domain ports for external systems.

pub mod sqs;

pub use sqs::{build_client, SqsQueueLister};
