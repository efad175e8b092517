use crate::core::workflow::transform::{TransformReport, WorkflowTransform};
use crate::core::workflow::{WorkflowDocument, TEST_COPY_NAME_SUFFIX};

/// Appends ` _TestCopy` to the workflow name.
pub struct TestCopyNameTransform;

impl WorkflowTransform for TestCopyNameTransform {
    fn name(&self) -> &'static str {
        "TestCopyNameTransform"
    }

    fn transform(&self, doc: WorkflowDocument, report: &mut TransformReport) -> WorkflowDocument {
        let mut doc = doc;
        let renamed = format!("{}{}", doc.name(), TEST_COPY_NAME_SUFFIX);
        doc.set_name(renamed.clone());
        report.workflow_name = renamed;
        doc
    }
}
