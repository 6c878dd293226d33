use std::process::ExitCode;

use commitlint_hook::cli;
use commitlint_hook::ui::output;

fn main() -> ExitCode {
    match cli::run() {
        Ok(code) => code,
        Err(err) => {
            output::error(format!("{:#}", err));
            ExitCode::from(cli::EXIT_ERROR)
        }
    }
}
