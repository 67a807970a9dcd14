//! Measura conversion server
//!
//! Line protocol over stdin/stdout. Each input line is a request line:
//! - `GET /convert?from=<sig>&to=<sig>&value=<number>` converts a value
//! - `GET /units` lists the unit catalog
//!
//! Each request gets one response line, `<status> <json body>`. Logs go to
//! stderr and are filtered with `RUST_LOG`.

mod config;
mod handler;
mod request;

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use measura_core::MeasuraError;
use measura_units::Dispatcher;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;

const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env();

    // Every transform is materialized here, before the first request
    let dispatcher = match Dispatcher::with_catalog() {
        Ok(d) => d,
        Err(e) => {
            let err = MeasuraError::from(e);
            error!(code = %err.code, error = %err, "invalid conversion declarations");
            return ExitCode::FAILURE;
        }
    };

    info!(
        version = SERVER_VERSION,
        precision = config.precision,
        "Measura server ready, waiting for requests"
    );

    let stdin = io::stdin();
    let mut reader = io::BufReader::new(stdin.lock());

    loop {
        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) => {
                info!("client disconnected (EOF)");
                break;
            }
            Ok(_) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                debug!(request = line, "received");
                let response = handler::handle(&dispatcher, &config, line);

                let rendered = match response.render() {
                    Ok(r) => r,
                    Err(e) => {
                        error!(error = %e, "failed to serialize response");
                        continue;
                    }
                };

                let mut stdout = io::stdout().lock();
                if let Err(e) = writeln!(stdout, "{}", rendered).and_then(|_| stdout.flush()) {
                    error!(error = %e, "error writing response");
                    break;
                }
            }
            Err(e) => {
                error!(error = %e, "error reading input");
                break;
            }
        }
    }

    info!("server shutting down");
    ExitCode::SUCCESS
}
