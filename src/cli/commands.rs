use crate::cli::Args;
use crate::core::config::ConfigLoader;
use crate::core::test_copy::{BatchSummary, ConsoleReporter, CopyGenerator, WORKFLOWS_TO_COPY};
use crate::logging::{self, config::LoggingConfig};
use anyhow::Context;
use std::env;

pub fn create_test_copies(args: Args) -> crate::Result<BatchSummary> {
    let base_dir = env::current_dir().context("failed to resolve current directory")?;
    let config = ConfigLoader::load(&base_dir, args.config.as_deref())?;

    let logging_config = LoggingConfig::from_section(config.logging.as_ref(), args.verbose)?;
    let _guard = logging::init(&logging_config, &base_dir)?;

    let workflows_dir = config
        .workflows
        .resolve_dir(&base_dir, args.workflows_dir.as_deref());
    tracing::info!(
        "Creating test copies from {} ({} workflows)",
        workflows_dir.display(),
        WORKFLOWS_TO_COPY.len()
    );

    let generator = CopyGenerator::new(workflows_dir);
    let summary = generator.run_batch(WORKFLOWS_TO_COPY, &ConsoleReporter);

    if summary.all_succeeded() {
        tracing::info!("All {} test copies created", summary.total);
    } else {
        tracing::warn!(
            "{} of {} test copies failed",
            summary.total - summary.succeeded,
            summary.total
        );
    }

    Ok(summary)
}
