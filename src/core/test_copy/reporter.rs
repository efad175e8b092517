use crate::core::error::CopyError;
use std::cell::RefCell;
use std::path::Path;

const BANNER_RULE_WIDTH: usize = 60;

/// User-facing progress lines for a test copy run.
pub trait ProgressReporter {
    fn line(&self, text: &str);

    fn banner(&self) {
        let rule = "=".repeat(BANNER_RULE_WIDTH);
        self.line(&rule);
        self.line("Creating TestCopy workflows with Chat Trigger");
        self.line(&rule);
    }

    fn processing(&self, workflow: &str) {
        self.line(&format!("\n📝 Processing: {}", workflow));
    }

    fn webhook_replaced(&self, node_name: &str) {
        self.line(&format!(
            "✓ Replaced webhook node '{}' with Chat Trigger",
            node_name
        ));
    }

    fn webhook_missing(&self, workflow: &str) {
        self.line(&format!("⚠ Warning: No webhook node found in {}", workflow));
    }

    fn created(&self, target: &Path) {
        self.line(&format!("✓ Created: {}", target.display()));
    }

    fn failed(&self, error: &CopyError) {
        self.line(&format!("✗ {}", error));
    }

    fn summary(&self, succeeded: usize, total: usize) {
        let rule = "=".repeat(BANNER_RULE_WIDTH);
        self.line(&format!("\n{}", rule));
        self.line(&format!(
            "✓ Successfully created {}/{} test copies",
            succeeded, total
        ));
        self.line(&rule);
    }
}

/// Writes progress to stdout.
pub struct ConsoleReporter;

impl ProgressReporter for ConsoleReporter {
    fn line(&self, text: &str) {
        println!("{}", text);
    }
}

/// Collects progress lines in memory.
#[derive(Default)]
pub struct MemoryReporter {
    lines: RefCell<Vec<String>>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines.borrow().iter().any(|line| line.contains(needle))
    }
}

impl ProgressReporter for MemoryReporter {
    fn line(&self, text: &str) {
        self.lines.borrow_mut().push(text.to_string());
    }
}
