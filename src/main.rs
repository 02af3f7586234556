//! Boardwatch - controller board health alert notifier
//!
//! Registers an email subscription with the EdgeX notification service and
//! optionally submits a one-shot alert. The board-status polling loop that
//! decides when to alert lives outside this binary.

use anyhow::Result;
use boardwatch::{cli::Cli, config::Config, services};
use clap::Parser;
use log::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration by layering sources: defaults, file, environment, and CLI args.
    let config = Config::load(&cli).unwrap_or_else(|err| {
        // Manually initialize logger for this specific error
        env_logger::init();
        error!("Failed to load configuration: {}", err);
        // Exit if configuration fails, as it's a critical step.
        std::process::exit(1);
    });

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    info!("Boardwatch starting up...");

    // Log the loaded configuration settings for visibility
    info!("-------------------- Configuration --------------------");
    info!("Log Level: {}", config.log_level);
    info!(
        "Notification Service: {}",
        config
            .notification
            .service_url
            .as_deref()
            .unwrap_or("(not configured)")
    );
    info!("Subscription Name: {}", config.notification.subscription_name);
    info!("Category: {}", config.notification.category);
    info!(
        "Email Recipients: {}",
        config.notification.email_addresses.join(", ")
    );
    info!("Severity: {:?}", config.notification.severity);
    info!("-------------------------------------------------------");

    let (registrar, dispatcher) = services::build_notifiers(&config)?;

    registrar.register().await?;
    info!("Email subscription registered with the notification service.");

    if let Some(message) = &cli.message {
        dispatcher.send_alert(message).await?;
        info!("Alert submitted for delivery.");
    }

    Ok(())
}
