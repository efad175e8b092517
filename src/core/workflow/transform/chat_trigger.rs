use crate::core::workflow::transform::{TransformReport, WorkflowTransform};
use crate::core::workflow::{
    WorkflowDocument, CHAT_TRIGGER_NODE_NAME, CHAT_TRIGGER_NODE_TYPE, CHAT_TRIGGER_TYPE_VERSION,
    WEBHOOK_NODE_TYPE,
};
use serde_json::{json, Map, Value};

/// Replaces every webhook trigger node with a Chat Trigger node.
pub struct ChatTriggerTransform;

impl WorkflowTransform for ChatTriggerTransform {
    fn name(&self) -> &'static str {
        "ChatTriggerTransform"
    }

    fn transform(&self, doc: WorkflowDocument, report: &mut TransformReport) -> WorkflowDocument {
        let mut doc = doc;
        for node in doc.nodes_mut().filter(|node| is_webhook(node)) {
            let original = node
                .get("name")
                .and_then(Value::as_str)
                .unwrap_or("Unknown")
                .to_string();
            replace_with_chat_trigger(node);
            report.replaced_nodes.push(original);
        }
        doc
    }
}

fn is_webhook(node: &Map<String, Value>) -> bool {
    node.get("type").and_then(Value::as_str) == Some(WEBHOOK_NODE_TYPE)
}

// Keys already present keep their position in the node.
fn replace_with_chat_trigger(node: &mut Map<String, Value>) {
    node.insert("type".to_string(), json!(CHAT_TRIGGER_NODE_TYPE));
    node.insert("typeVersion".to_string(), json!(CHAT_TRIGGER_TYPE_VERSION));
    node.insert("name".to_string(), json!(CHAT_TRIGGER_NODE_NAME));
    node.insert("parameters".to_string(), json!({ "options": {} }));
}
