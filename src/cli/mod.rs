pub mod commands;

use crate::core::test_copy::BatchSummary;
use clap::Parser;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{name} {version}\n\
{about-with-newline}\n\
USAGE:\n    {usage}\n\
\n{all-args}\n\
{after-help}\n";

#[derive(Parser, Debug, Default)]
#[command(name = "testcopy")]
#[command(version = crate::VERSION)]
#[command(about = "Create n8n workflow test copies with a Chat Trigger in place of the webhook")]
#[command(help_template = HELP_TEMPLATE)]
#[command(
    after_long_help = "Reads orchestrator.json and ingestion.json from the workflows directory and writes \
orchestrator_TestCopy.json and ingestion_TestCopy.json next to them.\n\n\
Examples:\n    testcopy\n    testcopy --workflows-dir ./n8n/workflows --verbose"
)]
pub struct Args {
    /// Directory holding the workflow JSON files (default: ./workflows)
    #[arg(long, value_name = "DIR")]
    pub workflows_dir: Option<PathBuf>,

    /// Path to a config file (default: ./testcopy.toml when present)
    #[arg(long, value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<PathBuf>,

    /// Log at debug level
    #[arg(long, help_heading = "Output Options")]
    pub verbose: bool,
}

/// Run the test copy batch for the parsed arguments.
pub fn run(args: Args) -> crate::Result<BatchSummary> {
    commands::create_test_copies(args)
}
