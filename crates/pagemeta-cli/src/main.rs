use pagemeta_core::logging;
use std::process::ExitCode;

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging as early as possible; stdout/stderr stay JSON-only.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    cli::run_from_args().await
}
