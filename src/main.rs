//! Harness Bridge entry point.
//!
//! Parses the positional launch parameters, initializes logging, and runs
//! the HTTP/WebSocket server until Ctrl+C.

use std::process::ExitCode;
use std::sync::Arc;

use harness_bridge::telemetry::{init_logging, LogFormat};
use harness_bridge::{config, server};

#[tokio::main]
async fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    match args.first().map(String::as_str) {
        Some("help" | "--help" | "-h") => {
            print_usage();
            return ExitCode::SUCCESS;
        }
        Some("version" | "--version" | "-V") => {
            println!("harness-bridge {}", env!("CARGO_PKG_VERSION"));
            return ExitCode::SUCCESS;
        }
        _ => {}
    }

    if args.len() > 2 {
        eprintln!("Unexpected argument: {}", args[2]);
        print_usage();
        return ExitCode::from(2);
    }

    let runtime = args.first().cloned();
    let port = match args.get(1) {
        Some(raw) => match raw.parse::<u16>() {
            Ok(port) => Some(port),
            Err(_) => {
                eprintln!("Invalid port: {}", raw);
                print_usage();
                return ExitCode::from(2);
            }
        },
        None => None,
    };

    if let Err(e) = init_logging(LogFormat::from_env(), "info") {
        eprintln!("Logging setup failed: {}", e);
    }

    let config = Arc::new(config::load(runtime, port));
    match server::serve(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Server error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn print_usage() {
    let version = env!("CARGO_PKG_VERSION");
    eprintln!(
        "harness-bridge - results collection & device bridge endpoint v{}

USAGE:
    harness-bridge [RUNTIME] [PORT]

ARGUMENTS:
    RUNTIME   Runtime identifier; namespaces the results directories
              (default: 0.0.0.0)
    PORT      HTTP listen port (default: 8080)

ENDPOINTS:
    POST /tests         Store a test-result payload
    POST /performance   Store a performance-result payload
    GET  /websockets    Device bridge (?mode=raw|handshake)

ENVIRONMENT:
    HB_WORKSPACE        Workspace root (default: workspace)
    HB_MAX_POST_PAYLOAD Max HTTP body size in bytes (default: 52428800)
    HB_MAX_WS_PAYLOAD   Max WebSocket message size, 0 = unlimited
                        (default: 1000000)
    HB_LOG_FORMAT       'json' for structured logs (default: pretty)
    RUST_LOG            Log level (debug, info, warn, error)

EXIT CODES:
    0  Success
    1  Server failure
    2  Usage error
",
        version
    );
}
