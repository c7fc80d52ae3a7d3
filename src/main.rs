//! Employee directory facade.
//!
//! ```text
//!   Client ──▶ axum router ──▶ EmployeeCore ──▶ UpstreamClient ──▶ upstream API
//!                  │                 │                 │
//!                  │                 ▼                 ▼
//!                  │            aggregate       envelope unwrap
//!                  ▼
//!         FacadeError → 404 / 400 / 502
//! ```

use std::path::PathBuf;

use clap::Parser;

use employee_facade::config::load_config;
use employee_facade::lifecycle::startup;
use employee_facade::observability::logging::init_logging;

#[derive(Parser)]
#[command(name = "employee-facade")]
#[command(about = "HTTP facade over the upstream employee directory", long_about = None)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(short, long, default_value = "facade.toml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(&cli.config)?;

    init_logging(&config.observability);
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        config = %cli.config.display(),
        bind_address = %config.listener.bind_address,
        upstream = %config.api.base.uri,
        request_timeout_secs = config.timeouts.request_secs,
        "employee-facade starting"
    );

    startup::run(config).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
