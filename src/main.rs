//! DupeFinder - Exact Duplicate File Reporter
//!
//! Entry point for the DupeFinder CLI application.

use clap::Parser;
use dupefinder::{
    cli::Cli,
    error::ExitCode,
    logging::init_logging,
    output::OutputError,
};

fn main() {
    // Parse command-line arguments (clap handles --help/--version itself)
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.quiet);

    // Run the application logic
    match dupefinder::run_app(cli) {
        Ok(code) => std::process::exit(code.as_i32()),
        Err(err) => {
            // Unwritable or invalid output destinations get their own code
            let exit_code = if err.downcast_ref::<OutputError>().is_some() {
                ExitCode::OutputError
            } else {
                ExitCode::GeneralError
            };

            eprintln!("[{}] Error: {:#}", exit_code.code_prefix(), err);
            std::process::exit(exit_code.as_i32());
        }
    }
}
