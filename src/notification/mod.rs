//! Handles subscription registration and alert dispatch against the EdgeX
//! notification service.
//!
//! This module defines the two stateless components of the alerting path:
//! the [`registrar::SubscriptionRegistrar`], which registers the standing
//! email subscription, and the [`dispatcher::AlertDispatcher`], which submits
//! alert notifications. Both depend only on the narrow client capabilities
//! defined in [`crate::core`], so either can be exercised against a fake
//! client in tests or the real REST client in [`edgex`].
pub mod dispatcher;
pub mod edgex;
pub mod registrar;

use thiserror::Error;

pub use dispatcher::AlertDispatcher;
pub use edgex::EdgexClient;
pub use registrar::SubscriptionRegistrar;

/// Failures surfaced by the subscription and alert operations.
#[derive(Error, Debug)]
pub enum NotifyError {
    /// No notification-service client was supplied at construction. Detected
    /// before any network attempt is made.
    #[error("notification service missing from client's configuration")]
    Configuration,

    /// The submission call itself failed. The underlying cause is preserved
    /// and annotated with the operation that failed.
    #[error("{context}: {source}")]
    Delivery {
        context: &'static str,
        #[source]
        source: anyhow::Error,
    },
}
