//! Encapsulation for setting up external services.

use crate::{
    config::Config,
    core::{NotificationClient, SubscriptionClient},
    notification::{AlertDispatcher, EdgexClient, SubscriptionRegistrar},
};
use anyhow::Result;
use std::sync::Arc;
use tracing::{info, warn};

/// Builds the subscription registrar and alert dispatcher from configuration.
///
/// One EdgeX client is shared between both components. When no service URL
/// is configured, both components are built without a client and every
/// operation reports a configuration error instead of attempting a call.
pub fn build_notifiers(config: &Config) -> Result<(SubscriptionRegistrar, AlertDispatcher)> {
    let client = match &config.notification.service_url {
        Some(url) if !url.is_empty() => {
            info!("Notification service client configured for {}", url);
            Some(Arc::new(EdgexClient::new(url.clone())?))
        }
        Some(_) => {
            warn!("An empty notification service URL was provided. Alerts will not be delivered.");
            None
        }
        None => {
            warn!("No notification service URL configured. Alerts will not be delivered.");
            None
        }
    };

    let registrar = SubscriptionRegistrar::new(
        config.notification.clone(),
        client
            .clone()
            .map(|client| client as Arc<dyn SubscriptionClient>),
    );
    let dispatcher = AlertDispatcher::new(
        config.notification.clone(),
        client.map(|client| client as Arc<dyn NotificationClient>),
    );

    Ok((registrar, dispatcher))
}
