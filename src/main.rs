//! Diagnostic HTTP echo server.
//!
//! Query flags on any path select what is echoed:
//! - `echo_code=200-404-500` (or header `x-echo-code`) cycles status codes,
//!   `init=1` restarts the cycle with the supplied list
//! - `echo_time` returns the current time
//! - `echo_env` returns the request headers
//! - `echo_body` returns the request body

use clap::Parser;
use tokio::net::TcpListener;

use echo_server::config::CliArgs;
use echo_server::lifecycle::{bootstrap, Shutdown};
use echo_server::EchoServer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load from .env
    let _ = dotenvy::dotenv();
    let args = CliArgs::parse();

    let startup = bootstrap(&args)?;
    let config = startup.config;

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    // Only OS signals stop the binary; the coordinator stays idle
    let shutdown = Shutdown::new();
    let server = EchoServer::new(config);
    let result = server.run(listener, shutdown.subscribe()).await;

    if let Err(e) = &result {
        tracing::error!(error = %e, "Server exited with error");
    }
    tracing::info!("Shutdown complete");
    startup.telemetry.shutdown();

    result.map_err(Into::into)
}
