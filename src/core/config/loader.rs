use super::TestCopyConfig;
use anyhow::{anyhow, Context};
use std::env;
use std::path::{Path, PathBuf};

/// Config file looked up in the invocation directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "testcopy.toml";

/// Environment variable overriding `[workflows] dir`.
pub const WORKFLOWS_DIR_ENV: &str = "TESTCOPY_WORKFLOWS_DIR";

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config with precedence: defaults, config file, environment.
    ///
    /// An explicit path must exist; the default `testcopy.toml` is optional.
    pub fn load(base_dir: &Path, explicit: Option<&Path>) -> crate::Result<TestCopyConfig> {
        let mut config = match explicit {
            Some(path) => {
                let path = if path.is_absolute() {
                    path.to_path_buf()
                } else {
                    base_dir.join(path)
                };
                Self::load_from_file(&path)?
                    .ok_or_else(|| anyhow!("config file {} not found", path.display()))?
            }
            None => Self::load_from_file(&base_dir.join(DEFAULT_CONFIG_FILE))?.unwrap_or_default(),
        };

        Self::apply_env_overrides(&mut config);
        Ok(config)
    }

    /// Load config from a specific file path.
    /// Returns Ok(None) if the file doesn't exist.
    pub fn load_from_file(path: &Path) -> crate::Result<Option<TestCopyConfig>> {
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: TestCopyConfig = toml::from_str(&content)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;

        Ok(Some(config))
    }

    fn apply_env_overrides(config: &mut TestCopyConfig) {
        if let Ok(dir) = env::var(WORKFLOWS_DIR_ENV) {
            if !dir.trim().is_empty() {
                config.workflows.dir = Some(PathBuf::from(dir));
            }
        }
    }
}
