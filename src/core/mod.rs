pub mod config;
pub mod error;
pub mod test_copy;
pub mod workflow;

pub use config::{ConfigLoader, TestCopyConfig};
pub use error::CopyError;
pub use test_copy::{BatchSummary, CopyGenerator, CopyOutcome, WORKFLOWS_TO_COPY};
pub use workflow::WorkflowDocument;
