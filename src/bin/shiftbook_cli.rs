use std::process::ExitCode;

use shiftbook::cli::{output, run_cli};

fn main() -> ExitCode {
    shiftbook::init();
    match run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "Shell terminated with an error.");
            output::error(&err);
            ExitCode::FAILURE
        }
    }
}
