//! Submits board-health alert notifications to the notification service.

use crate::config::NotificationConfig;
use crate::core::{Notification, NotificationClient};
use crate::notification::NotifyError;
use std::sync::Arc;

/// Builds alert notifications from configuration and a caller-supplied
/// message and submits them to the notification service.
///
/// The dispatcher holds no mutable state, so one instance may be shared
/// across any number of concurrent callers.
pub struct AlertDispatcher {
    config: NotificationConfig,
    client: Option<Arc<dyn NotificationClient>>,
}

impl AlertDispatcher {
    /// Creates a new `AlertDispatcher`.
    pub fn new(config: NotificationConfig, client: Option<Arc<dyn NotificationClient>>) -> Self {
        Self { config, client }
    }

    /// Submits `message` as an alert notification.
    ///
    /// The message body is passed through verbatim; any validation is the
    /// notification service's responsibility. Exactly one submission attempt
    /// is made per call, with no retry.
    pub async fn send_alert(&self, message: &str) -> Result<(), NotifyError> {
        let client = self.client.as_ref().ok_or(NotifyError::Configuration)?;

        let notification = Notification {
            labels: self.config.labels.clone(),
            category: self.config.category.clone(),
            content: message.to_string(),
            sender: self.config.sender.clone(),
            severity: self.config.severity,
        };

        client
            .send_notifications(&[notification])
            .await
            .map_err(|source| NotifyError::Delivery {
                context: "failed to send the notification",
                source,
            })
    }
}
