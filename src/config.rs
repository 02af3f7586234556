//! Configuration management for Boardwatch
//!
//! This module defines the main `Config` struct and its sub-structs,
//! responsible for holding all application settings. It uses the `figment`
//! crate to load configuration from a `boardwatch.toml` file and merge it
//! with environment variables and command-line arguments.

use anyhow::Result;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::cli::Cli;
use crate::core::{AdminState, Severity};

/// The main configuration struct for the application.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    /// The logging level for the application.
    pub log_level: String,
    /// Configuration for notification-service alerting.
    pub notification: NotificationConfig,
}

/// Configuration for the notification-service subscription and alerts.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct NotificationConfig {
    /// Base URL of the EdgeX support-notifications service. When absent,
    /// alerting is disabled and both operations report a configuration error.
    pub service_url: Option<String>,
    /// Name under which the email subscription is registered.
    pub subscription_name: String,
    /// Recipient addresses for the email delivery channel.
    pub email_addresses: Vec<String>,
    /// Identity of the party receiving the alerts.
    pub receiver: String,
    /// The single alert category this agent publishes under.
    pub category: String,
    /// Labels attached to every outgoing notification.
    pub labels: Vec<String>,
    /// Identity of the sending component.
    pub sender: String,
    /// Urgency attached to every outgoing notification.
    pub severity: Severity,
    /// Administrative state the subscription is registered with.
    pub admin_state: AdminState,
}

impl Config {
    /// Loads the application configuration.
    ///
    /// Layers sources in increasing precedence: compiled-in defaults, the
    /// TOML file named by `--config` (or `boardwatch.toml`), environment
    /// variables prefixed with `BOARDWATCH_`, and command-line arguments.
    pub fn load(cli: &Cli) -> Result<Self> {
        let config_path = cli
            .config
            .clone()
            .unwrap_or_else(|| "boardwatch.toml".into());

        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(config_path))
            // Allow overriding with environment variables, e.g.
            // BOARDWATCH_LOG_LEVEL=debug
            .merge(Env::prefixed("BOARDWATCH_"))
            .merge(cli.clone())
            .extract()?;
        Ok(config)
    }
}

// Provide a default implementation for tests and easy setup.
impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            notification: NotificationConfig {
                service_url: None,
                subscription_name: "controller-board-status-subscription".to_string(),
                email_addresses: vec!["sysadmin@example.com".to_string()],
                receiver: "System Administrator".to_string(),
                category: "HW_HEALTH".to_string(),
                labels: vec!["HW_HEALTH".to_string()],
                sender: "controller-board-status".to_string(),
                severity: Severity::Critical,
                admin_state: AdminState::Unlocked,
            },
        }
    }
}
