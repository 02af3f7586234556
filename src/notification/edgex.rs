//! A client for the EdgeX support-notifications REST API.

use crate::core::{Notification, NotificationClient, Subscription, SubscriptionClient};
use async_trait::async_trait;
use serde::Serialize;
use tracing::{error, info, instrument};
use uuid::Uuid;

const API_VERSION: &str = "v2";
const SUBSCRIPTION_ROUTE: &str = "/api/v2/subscription";
const NOTIFICATION_ROUTE: &str = "/api/v2/notification";

/// Request envelope wrapping a subscription for submission.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AddSubscriptionRequest<'a> {
    api_version: &'static str,
    request_id: String,
    subscription: &'a Subscription,
}

/// Request envelope wrapping a notification for submission.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AddNotificationRequest<'a> {
    api_version: &'static str,
    request_id: String,
    notification: &'a Notification,
}

/// A client for the EdgeX support-notifications service.
pub struct EdgexClient {
    base_url: String,
    http: reqwest::Client,
}

impl EdgexClient {
    /// Creates a new `EdgexClient` for the service at `base_url`.
    ///
    /// The transport owns the timeout policy; callers of the submission
    /// operations never supply one.
    pub fn new(base_url: String) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()?;
        Ok(Self { base_url, http })
    }

    /// Posts a JSON request batch to the given service route.
    async fn post<T: Serialize>(&self, route: &str, batch: &[T]) -> anyhow::Result<()> {
        let url = format!("{}{}", self.base_url, route);
        let response = self.http.post(&url).json(&batch).send().await;

        match response {
            Ok(res) => {
                if res.status().is_success() {
                    Ok(())
                } else {
                    let status = res.status();
                    let text = res.text().await.unwrap_or_default();
                    error!(
                        status = %status,
                        body = %text,
                        "Notification service rejected the request"
                    );
                    anyhow::bail!(
                        "notification service returned status {}, body: {}",
                        status,
                        text
                    );
                }
            }
            Err(e) => {
                error!(error = %e, "HTTP request to the notification service failed");
                Err(e.into())
            }
        }
    }
}

#[async_trait]
impl SubscriptionClient for EdgexClient {
    /// Wraps and submits a batch of subscriptions.
    #[instrument(skip(self, subscriptions), fields(count = subscriptions.len()))]
    async fn add_subscriptions(&self, subscriptions: &[Subscription]) -> anyhow::Result<()> {
        let batch: Vec<AddSubscriptionRequest> = subscriptions
            .iter()
            .map(|subscription| AddSubscriptionRequest {
                api_version: API_VERSION,
                request_id: Uuid::new_v4().to_string(),
                subscription,
            })
            .collect();

        self.post(SUBSCRIPTION_ROUTE, &batch).await?;
        info!("Successfully submitted {} subscription(s).", batch.len());
        Ok(())
    }
}

#[async_trait]
impl NotificationClient for EdgexClient {
    /// Wraps and submits a batch of notifications.
    #[instrument(skip(self, notifications), fields(count = notifications.len()))]
    async fn send_notifications(&self, notifications: &[Notification]) -> anyhow::Result<()> {
        let batch: Vec<AddNotificationRequest> = notifications
            .iter()
            .map(|notification| AddNotificationRequest {
                api_version: API_VERSION,
                request_id: Uuid::new_v4().to_string(),
                notification,
            })
            .collect();

        self.post(NOTIFICATION_ROUTE, &batch).await?;
        info!("Successfully submitted {} notification(s).", batch.len());
        Ok(())
    }
}
