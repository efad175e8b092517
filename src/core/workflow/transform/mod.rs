use crate::core::workflow::WorkflowDocument;

mod chat_trigger;
mod pipeline;
mod rename;

pub use chat_trigger::ChatTriggerTransform;
pub use pipeline::apply_test_copy_pipeline;
pub use rename::TestCopyNameTransform;

/// Rewrite of a parsed workflow document, taking it by value and returning the result.
pub trait WorkflowTransform {
    fn name(&self) -> &'static str;
    fn transform(&self, doc: WorkflowDocument, report: &mut TransformReport) -> WorkflowDocument;
}

/// What the transforms changed in one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransformReport {
    /// Name written to the document.
    pub workflow_name: String,
    /// Original names of the webhook nodes replaced with a Chat Trigger.
    pub replaced_nodes: Vec<String>,
}

impl TransformReport {
    pub fn webhook_replaced(&self) -> bool {
        !self.replaced_nodes.is_empty()
    }
}
