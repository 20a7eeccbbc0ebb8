use clap::Parser;
use pte_info::{Args, StderrLogger, run, verbosity};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = StderrLogger::new(verbosity(args.verbose)).init() {
        eprintln!("failed to install logger: {e}");
    }

    match run(&args) {
        Ok(report) => {
            print!("{report}");
            if args.strict && !report.is_valid() {
                ExitCode::from(2)
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
