use std::process::ExitCode;

use clap::Parser;

use advlint::cli::{Arguments, ExitStatus};

fn main() -> ExitCode {
    // Map clap usage errors onto our own exit-status policy; --help and
    // --version still exit 0.
    let args = match Arguments::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let status = if err.use_stderr() {
                ExitStatus::Error.into()
            } else {
                ExitCode::SUCCESS
            };
            let _ = err.print();
            return status;
        }
    };

    match advlint::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitStatus::Error.into()
        }
    }
}
