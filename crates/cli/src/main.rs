use std::io::{stderr, stdin, stdout};
use std::process::ExitCode;

use clap::Parser;
use contact_register_cli::cli_args::Args;
use contact_register_cli::session;

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    let result = session::run(
        &args,
        &mut stdin().lock(),
        &mut stdout().lock(),
        &mut stderr().lock(),
    );

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
