use std::process::ExitCode;

fn main() -> ExitCode {
    match sqpow::cli::run() {
        Ok(()) => ExitCode::from(sqpow::errors::EXIT_SUCCESS),
        Err(e) => {
            eprintln!("Error: {:?}", e);
            ExitCode::from(sqpow::errors::get_exit_code(&e))
        }
    }
}
