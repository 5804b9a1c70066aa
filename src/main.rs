use colored::*;
use std::process::ExitCode;

mod cli;

fn main() -> ExitCode {
    // Die quietly on a closed pipe (e.g. `yaml-stream ... | head`)
    #[cfg(unix)]
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }

    match cli::run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("{}: {}", "Error".bright_red(), e);
            ExitCode::from(127)
        }
    }
}
