//! `result-messages` CLI entrypoint.
//!
//! Resolves one result message and prints it to stdout; failures are printed
//! to stderr with a non-zero exit code.

use clap::Parser;
use result_messages::cli::{Cli, exit_code_for_run_result, run};

fn main() {
    let cli = Cli::parse();
    let mut stdout = std::io::stdout();
    let mut stderr = std::io::stderr();
    let exit_code = exit_code_for_run_result(run(&cli, &mut stdout), &mut stderr);
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
}
