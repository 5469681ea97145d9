//! Storefront CLI entry point.

use clap::Parser;
use storefront_client::cli::Cli;
use storefront_client::config::ClientConfig;
use storefront_client::error::ClientError;
use storefront_client::telemetry;
use storefront_client::Storefront;

#[tokio::main]
async fn main() -> Result<(), ClientError> {
    let cli = Cli::parse();
    telemetry::init_tracing(cli.verbose)?;

    let config = ClientConfig::load(cli.config.as_deref())?;
    let storefront = Storefront::open(config)?;

    match storefront.execute(cli.command).await {
        Ok(report) => {
            for line in &report.lines {
                println!("{line}");
            }
            if let Some(notification) = report.notification {
                println!("{notification}");
            }
            Ok(())
        }
        Err(err) => {
            tracing::error!(error = %err, "Command failed");
            eprintln!("{}", err.notification());
            Err(err)
        }
    }
}
