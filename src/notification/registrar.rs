//! Registers the standing email subscription with the notification service.

use crate::config::NotificationConfig;
use crate::core::{Channel, Subscription, SubscriptionClient};
use crate::notification::NotifyError;
use std::sync::Arc;
use uuid::Uuid;

/// Builds the email subscription descriptor from configuration and submits
/// it to the notification service.
pub struct SubscriptionRegistrar {
    config: NotificationConfig,
    client: Option<Arc<dyn SubscriptionClient>>,
}

impl SubscriptionRegistrar {
    /// Creates a new `SubscriptionRegistrar`.
    ///
    /// A `None` client models a deployment without a configured notification
    /// service; every subsequent [`register`](Self::register) call then fails
    /// without attempting a submission.
    pub fn new(config: NotificationConfig, client: Option<Arc<dyn SubscriptionClient>>) -> Self {
        Self { config, client }
    }

    /// Registers the email subscription with the notification service.
    ///
    /// A fresh identifier is generated on every call; the descriptor is
    /// submitted exactly once as a one-element batch, with no retry. The
    /// service-assigned subscription record is not consumed.
    pub async fn register(&self) -> Result<(), NotifyError> {
        let client = self.client.as_ref().ok_or(NotifyError::Configuration)?;

        let subscription = Subscription {
            id: Uuid::new_v4().to_string(),
            name: self.config.subscription_name.clone(),
            channels: vec![Channel::Email {
                recipients: self.config.email_addresses.clone(),
            }],
            receiver: self.config.receiver.clone(),
            // Labels drive matching and categories drive routing. This agent
            // publishes under a single category, so both are kept in
            // lock-step with the one configured value.
            labels: vec![self.config.category.clone()],
            categories: vec![self.config.category.clone()],
            admin_state: self.config.admin_state,
        };

        client
            .add_subscriptions(&[subscription])
            .await
            .map_err(|source| NotifyError::Delivery {
                context: "failed to subscribe to the EdgeX notification service",
                source,
            })
    }
}
