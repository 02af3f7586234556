//! Core domain types and service traits for Boardwatch
//!
//! This module defines the fundamental data structures and trait contracts
//! that govern component interactions throughout the application.

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Administrative state of a subscription, in the EdgeX wire form.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum AdminState {
    /// The subscription receives notifications.
    #[default]
    Unlocked,
    /// The subscription is registered but delivery is suspended.
    Locked,
}

/// Urgency level attached to every notification this component sends.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Minor,
    #[default]
    Normal,
    Critical,
}

/// A delivery mechanism with its type-specific addressing data.
///
/// Serialized in the EdgeX address form, tagged by the `type` field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum Channel {
    /// Email delivery to a list of recipient addresses.
    #[serde(rename = "EMAIL")]
    Email { recipients: Vec<String> },
}

/// A standing registration with the notification service describing who
/// receives alerts of a given category and over which channel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    /// Identifier generated fresh for every registration attempt.
    pub id: String,
    /// Name of the subscription record.
    pub name: String,
    /// Delivery channels for matched notifications.
    pub channels: Vec<Channel>,
    /// Identity of the party receiving the alerts.
    pub receiver: String,
    /// Labels used by the service to match notifications.
    pub labels: Vec<String>,
    /// Categories used by the service to route notifications.
    pub categories: Vec<String>,
    /// Administrative state of the subscription.
    pub admin_state: AdminState,
}

/// A single alert message submitted for delivery to subscribers of its
/// category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    /// Labels used by the service to match subscriptions.
    pub labels: Vec<String>,
    /// Category used by the service to route the notification.
    pub category: String,
    /// Free-text body of the alert.
    pub content: String,
    /// Identity of the sending component.
    pub sender: String,
    /// Urgency of the alert.
    pub severity: Severity,
}

// =============================================================================
// Service Traits
// =============================================================================

/// Submits subscription registrations to the notification service
#[async_trait]
pub trait SubscriptionClient: Send + Sync {
    /// Submits a batch of subscriptions.
    ///
    /// The service-assigned subscription records are not surfaced; callers
    /// only observe whether the submission was accepted.
    async fn add_subscriptions(&self, subscriptions: &[Subscription]) -> Result<()>;
}

/// Submits alert notifications to the notification service
#[async_trait]
pub trait NotificationClient: Send + Sync {
    /// Submits a batch of notifications for delivery.
    async fn send_notifications(&self, notifications: &[Notification]) -> Result<()>;
}
