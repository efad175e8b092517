use crate::logging::layers::console::ConsoleOutput;
use crate::Result;
use anyhow::anyhow;
use serde::Deserialize;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::filter::Directive;

const DEFAULT_LEVEL: &str = "warn";
const VERBOSE_LEVEL: &str = "debug";

/// Resolved logging configuration after applying the config file and CLI flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub log_dir: Option<PathBuf>,
    pub default_level: String,
    pub enable_file: bool,
    pub console_output: ConsoleOutput,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_dir: None,
            default_level: DEFAULT_LEVEL.to_string(),
            enable_file: false,
            console_output: ConsoleOutput::default(),
        }
    }
}

impl LoggingConfig {
    /// Build the effective config: defaults, then the `[logging]` section, then `--verbose`.
    pub fn from_section(section: Option<&LoggingSection>, verbose: bool) -> Result<Self> {
        let mut config = LoggingConfig::default();
        if let Some(section) = section {
            config.apply(section);
        }
        if verbose {
            config.default_level = VERBOSE_LEVEL.to_string();
        }
        config.validate()?;
        Ok(config)
    }

    fn apply(&mut self, section: &LoggingSection) {
        if let Some(log_dir) = &section.log_dir {
            self.log_dir = Some(PathBuf::from(log_dir));
        }
        if let Some(default_level) = &section.default_level {
            self.default_level = default_level.clone();
        }
        if let Some(enable_file) = section.enable_file {
            self.enable_file = enable_file;
        }
        if let Some(console_output) = section.console_output {
            self.console_output = console_output;
        }
    }

    fn validate(&self) -> Result<()> {
        let level = self.default_level.trim();
        if level.contains('=') || level.contains(',') {
            for directive in level.split(',').filter(|part| !part.trim().is_empty()) {
                Directive::from_str(directive.trim()).map_err(|_| {
                    anyhow!(
                        "logging.default_level has an invalid tracing directive '{}'",
                        directive
                    )
                })?;
            }
        } else {
            // A bare word would otherwise parse as a target name and filter out everything.
            LevelFilter::from_str(level).map_err(|_| {
                anyhow!(
                    "logging.default_level '{}' is not a level (off, error, warn, info, debug, trace)",
                    level
                )
            })?;
        }
        Ok(())
    }
}

/// `[logging]` section of testcopy.toml.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingSection {
    pub log_dir: Option<String>,
    pub default_level: Option<String>,
    pub enable_file: Option<bool>,
    #[serde(default)]
    pub console_output: Option<ConsoleOutput>,
}
