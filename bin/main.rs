mod digest;

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use digest::DigestArgs;

fn main() -> ExitCode {
    let args = DigestArgs::parse();
    env_logger::init();

    match args.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if e.is_usage_error() {
                // Help goes to stdout, the error itself to stderr.
                if let Err(io_err) = DigestArgs::command().print_help() {
                    log::warn!("could not print help: {io_err}");
                }
            }
            eprintln!("\n***ERROR: {e}***\n");
            ExitCode::FAILURE
        }
    }
}
