pub mod check;
pub mod report;

pub use crate::domain::model::{CheckOutcome, ExpectedQueueName, QueueRecord};
pub use crate::domain::ports::QueueLister;
pub use crate::utils::error::Result;
