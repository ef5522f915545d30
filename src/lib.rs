pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{build_client, SqsQueueLister};
pub use config::{AwsSettings, CheckSettings};
pub use core::check::QueueCheck;
pub use domain::model::{CheckOutcome, ExpectedQueueName, QueueRecord};
pub use utils::error::{CheckError, Result};
