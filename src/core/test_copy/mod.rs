//! Creates `<name>_TestCopy.json` siblings of workflow files, one independent cycle per name.

mod reporter;

pub use reporter::{ConsoleReporter, MemoryReporter, ProgressReporter};

use crate::core::error::CopyError;
use crate::core::workflow::{apply_test_copy_pipeline, WorkflowDocument};
use crate::utils::files;
use std::path::PathBuf;

/// Workflow base names processed by every run, in order.
pub const WORKFLOWS_TO_COPY: &[&str] = &["orchestrator", "ingestion"];

const SOURCE_EXTENSION: &str = ".json";
const TARGET_SUFFIX: &str = "_TestCopy.json";

/// A test copy written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyOutcome {
    pub workflow: String,
    pub target: PathBuf,
    /// Original names of the replaced webhook nodes; empty when none were found.
    pub replaced_nodes: Vec<String>,
    /// A previous test copy existed at `target` and was overwritten.
    pub overwrote_existing: bool,
}

/// Aggregate result of a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub succeeded: usize,
    pub total: usize,
}

impl BatchSummary {
    pub fn all_succeeded(&self) -> bool {
        self.succeeded == self.total
    }

    /// Process exit status: 0 when every copy was created, 1 otherwise.
    pub fn exit_code(&self) -> u8 {
        if self.all_succeeded() {
            0
        } else {
            1
        }
    }
}

pub struct CopyGenerator {
    workflows_dir: PathBuf,
}

impl CopyGenerator {
    pub fn new(workflows_dir: impl Into<PathBuf>) -> Self {
        Self {
            workflows_dir: workflows_dir.into(),
        }
    }

    pub fn source_path(&self, workflow: &str) -> PathBuf {
        self.workflows_dir
            .join(format!("{}{}", workflow, SOURCE_EXTENSION))
    }

    pub fn target_path(&self, workflow: &str) -> PathBuf {
        self.workflows_dir.join(format!("{}{}", workflow, TARGET_SUFFIX))
    }

    /// Read, transform, and write one workflow.
    pub fn create_test_copy(
        &self,
        workflow: &str,
        reporter: &dyn ProgressReporter,
    ) -> Result<CopyOutcome, CopyError> {
        let source = self.source_path(workflow);
        let target = self.target_path(workflow);

        let text = files::read_text(&source).map_err(|source_err| CopyError::Read {
            path: source.clone(),
            source: source_err,
        })?;
        let file_name = source
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| workflow.to_string());
        let doc = WorkflowDocument::from_json_str(&text, &file_name)?;

        let (doc, report) = apply_test_copy_pipeline(doc);
        for node_name in &report.replaced_nodes {
            tracing::info!("{}: replaced webhook node '{}'", workflow, node_name);
            reporter.webhook_replaced(node_name);
        }
        if !report.webhook_replaced() {
            tracing::warn!("{}: no webhook node found", workflow);
            reporter.webhook_missing(workflow);
        }

        let content = doc.to_pretty_json(workflow)?;
        let overwrote_existing =
            files::write_replacing(&target, &content).map_err(|source_err| CopyError::Write {
                path: target.clone(),
                source: source_err,
            })?;
        if overwrote_existing {
            tracing::warn!("overwrote existing test copy {}", target.display());
        }

        reporter.created(&target);
        Ok(CopyOutcome {
            workflow: workflow.to_string(),
            target,
            replaced_nodes: report.replaced_nodes,
            overwrote_existing,
        })
    }

    /// Process every name in order; a failed item never stops the next one.
    pub fn run_batch(&self, workflows: &[&str], reporter: &dyn ProgressReporter) -> BatchSummary {
        reporter.banner();

        let mut succeeded = 0;
        for workflow in workflows {
            reporter.processing(workflow);
            match self.create_test_copy(workflow, reporter) {
                Ok(outcome) => {
                    tracing::info!("created {}", outcome.target.display());
                    succeeded += 1;
                }
                Err(err) => {
                    tracing::error!("{}: {}", workflow, err);
                    reporter.failed(&err);
                }
            }
        }

        let summary = BatchSummary {
            succeeded,
            total: workflows.len(),
        };
        reporter.summary(summary.succeeded, summary.total);
        summary
    }
}
