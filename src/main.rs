use std::process::ExitCode;

use aspark::GraphError;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    match aspark::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let code = e.exit_code();
            match &e {
                // help and version go to stdout, usage errors to stderr
                GraphError::Cli(c) => {
                    let _ = c.print();
                }
                _ => eprintln!("Error: {e}"),
            }
            tracing::debug!(code, "exiting");
            ExitCode::from(code)
        }
    }
}
