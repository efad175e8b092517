use clap::Parser;
use std::process::ExitCode;
use workflow_testcopy::cli::{self, Args};

fn main() -> ExitCode {
    let args = Args::parse();

    match cli::run(args) {
        Ok(summary) => ExitCode::from(summary.exit_code()),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::from(2)
        }
    }
}
