//! Vigil - HTTP assertion harness binary.
//!
//! Runs the fixed scenario catalog against the configured backend and
//! prints a per-scenario report. Exits non-zero when any non-skipped
//! scenario fails.

mod report;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use vigil_application::{catalog, ApplicationError, Harness, HarnessConfig};
use vigil_infrastructure::ReqwestHttpClient;

#[tokio::main]
async fn main() -> Result<(), ApplicationError> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = HarnessConfig::from_env()?;
    tracing::info!(
        base_url = %config.base_url,
        timeout_ms = config.timeout_ms,
        "starting vigil v{}",
        env!("CARGO_PKG_VERSION")
    );

    let client = ReqwestHttpClient::new()?;
    let harness = Harness::new(client, config);

    let scenarios = catalog();
    let run = harness.run_all(&scenarios).await;

    print!("{}", report::render(&run));

    if !run.all_passed() {
        tracing::error!(failed = run.failed, "run finished with failures");
        std::process::exit(1);
    }

    Ok(())
}
