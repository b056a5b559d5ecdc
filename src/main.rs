//! suffix-sweep - duplicate file removal by filename suffix
//!
//! Entry point for the suffix-sweep CLI application.

use clap::Parser;
use suffix_sweep::{
    cli::Cli,
    error::{user_message, ExitCode, StructuredError},
    logging::init_logging,
};

fn main() {
    let cli = Cli::parse();
    let json_errors = cli.json_errors;

    init_logging(cli.verbose, cli.quiet);

    match suffix_sweep::run_app(cli) {
        Ok(code) => std::process::exit(code.as_i32()),
        Err(err) => {
            let exit_code = ExitCode::GeneralError;
            log::debug!("{err:?}");

            if json_errors {
                let structured = StructuredError::new(&err, exit_code);
                if let Ok(json) = serde_json::to_string_pretty(&structured) {
                    eprintln!("{}", json);
                } else {
                    eprintln!("[{}] Error: {}", exit_code.code_prefix(), user_message(&err));
                }
            } else {
                eprintln!("[{}] Error: {}", exit_code.code_prefix(), user_message(&err));
            }

            std::process::exit(exit_code.as_i32());
        }
    }
}
