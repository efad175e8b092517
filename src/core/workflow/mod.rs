//! Untyped n8n workflow documents and the transforms that turn them into test copies.

pub mod transform;

pub use transform::{apply_test_copy_pipeline, TransformReport, WorkflowTransform};

use crate::core::error::CopyError;
use crate::utils::serialization;
use serde_json::{Map, Value};

/// Node type of the inbound HTTP trigger replaced in test copies.
pub const WEBHOOK_NODE_TYPE: &str = "n8n-nodes-base.webhook";
/// Node type of the conversational trigger that takes its place.
pub const CHAT_TRIGGER_NODE_TYPE: &str = "@n8n/n8n-nodes-langchain.chatTrigger";
pub const CHAT_TRIGGER_TYPE_VERSION: f64 = 1.0;
pub const CHAT_TRIGGER_NODE_NAME: &str = "Chat Trigger";
/// Appended to the workflow name, leading space included.
pub const TEST_COPY_NAME_SUFFIX: &str = " _TestCopy";

/// A workflow definition kept as raw JSON so unknown fields and key order survive.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowDocument {
    root: Map<String, Value>,
}

impl WorkflowDocument {
    /// Parse workflow text; `file` names the source file in errors.
    pub fn from_json_str(text: &str, file: &str) -> Result<Self, CopyError> {
        let value: Value = serde_json::from_str(text).map_err(|source| CopyError::Parse {
            file: file.to_string(),
            source,
        })?;
        Self::from_value(value).ok_or_else(|| CopyError::NotAnObject {
            file: file.to_string(),
        })
    }

    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(root) => Some(Self { root }),
            _ => None,
        }
    }

    /// Workflow name as text. A missing name reads as empty; other JSON values, `null` included, use their JSON text.
    pub fn name(&self) -> String {
        match self.root.get("name") {
            None => String::new(),
            Some(Value::String(name)) => name.clone(),
            Some(other) => other.to_string(),
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.root.insert("name".to_string(), Value::String(name.into()));
    }

    /// Object entries of `nodes`; a missing or non-array field yields nothing.
    pub fn nodes(&self) -> impl Iterator<Item = &Map<String, Value>> {
        self.root
            .get("nodes")
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .filter_map(Value::as_object)
    }

    pub fn nodes_mut(&mut self) -> impl Iterator<Item = &mut Map<String, Value>> {
        self.root
            .get_mut("nodes")
            .and_then(Value::as_array_mut)
            .into_iter()
            .flatten()
            .filter_map(Value::as_object_mut)
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.root)
    }

    /// Two-space indented JSON, input key order preserved, non-ASCII left unescaped.
    pub fn to_pretty_json(&self, workflow: &str) -> Result<Vec<u8>, CopyError> {
        serialization::to_pretty_json(&self.root).map_err(|source| CopyError::Serialize {
            workflow: workflow.to_string(),
            source,
        })
    }
}
