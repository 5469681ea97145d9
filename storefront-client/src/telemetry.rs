//! Tracing subscriber setup.

use crate::error::ClientError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "storefront=info,storefront_cart=info,storefront_client=info,warn";

/// Install a stderr `fmt` subscriber filtered by `RUST_LOG`, or by
/// `verbose`/the default filter when `RUST_LOG` is unset.
pub fn init_tracing(verbose: bool) -> Result<(), ClientError> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new(DEFAULT_FILTER)
        }
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .map_err(|e| ClientError::Telemetry(e.to_string()))?;

    Ok(())
}
