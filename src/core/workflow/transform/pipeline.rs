use crate::core::workflow::transform::{
    ChatTriggerTransform, TestCopyNameTransform, TransformReport, WorkflowTransform,
};
use crate::core::workflow::WorkflowDocument;

pub fn apply_test_copy_pipeline(doc: WorkflowDocument) -> (WorkflowDocument, TransformReport) {
    let transforms: Vec<Box<dyn WorkflowTransform>> =
        vec![Box::new(TestCopyNameTransform), Box::new(ChatTriggerTransform)];
    let mut report = TransformReport::default();
    let mut current = doc;
    for transform in transforms {
        tracing::debug!("applying {}", transform.name());
        current = transform.transform(current, &mut report);
    }
    (current, report)
}
