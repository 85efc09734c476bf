use std::process::ExitCode;

use backend_api::{config::LISTEN_ADDR, logging, server};
use tracing::error;

#[tokio::main]
async fn main() -> ExitCode {
    logging::init_logging();

    match server::serve(LISTEN_ADDR).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "server failed");
            ExitCode::FAILURE
        }
    }
}
