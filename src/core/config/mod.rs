pub mod loader;

pub use loader::ConfigLoader;

use crate::logging::config::LoggingSection;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default directory, relative to the invocation directory, holding the workflow files.
pub const DEFAULT_WORKFLOWS_DIR: &str = "workflows";

/// Configuration loaded from testcopy.toml
#[derive(Debug, Clone, Deserialize, Default)]
pub struct TestCopyConfig {
    /// Workflow location
    #[serde(default)]
    pub workflows: WorkflowsConfig,

    /// Logging sinks and level
    #[serde(default)]
    pub logging: Option<LoggingSection>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct WorkflowsConfig {
    /// Directory holding `<name>.json` sources and `<name>_TestCopy.json` targets
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

impl WorkflowsConfig {
    /// Resolve the workflows directory; a CLI override wins over the configured value.
    ///
    /// Relative paths are anchored at `base_dir`.
    pub fn resolve_dir(&self, base_dir: &Path, cli_override: Option<&Path>) -> PathBuf {
        let chosen = cli_override
            .map(Path::to_path_buf)
            .or_else(|| self.dir.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_WORKFLOWS_DIR));

        if chosen.is_absolute() {
            chosen
        } else {
            base_dir.join(chosen)
        }
    }
}
