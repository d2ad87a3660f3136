//! Access-test trigger
//!
//! `LayoutManager` is the crate's entry point: construction announces the
//! client on the log channel, `test_access` runs one probe. Success is shown
//! to the user through the notifier; failure only reaches the log.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, error, info};

use crate::notify::Notifier;
use crate::transport::AccessTransport;

/// Startup lines emitted when the manager is constructed, in order
pub const STARTUP_MESSAGES: [&str; 2] = [
    "CTO layout management system active",
    "CTO layout client loaded successfully",
];

/// Client for the CTO access-check endpoint
pub struct LayoutManager {
    transport: Box<dyn AccessTransport>,
    notifier: Arc<dyn Notifier>,
}

impl LayoutManager {
    /// Create a manager and announce it on the log channel
    ///
    /// Emits the two fixed startup lines and nothing else: no network
    /// activity, no notification.
    pub fn new(transport: Box<dyn AccessTransport>, notifier: Arc<dyn Notifier>) -> Self {
        for line in STARTUP_MESSAGES {
            info!("{line}");
        }
        Self {
            transport,
            notifier,
        }
    }

    /// Probe the access-check endpoint once
    ///
    /// On success the full payload is logged and the payload's `message`
    /// field (empty when absent) is handed to the notifier. On failure the
    /// error is logged and the user sees nothing; transport and JSON-decode
    /// failures are not distinguished. No retries, no timeout.
    ///
    /// Takes `&self` and touches no shared mutable state, so overlapping
    /// calls are independent; each resolves with its own log/notify sequence.
    pub async fn test_access(&self) {
        debug!("Running access test via {} transport", self.transport.name());

        match self.transport.fetch_access().await {
            Ok(payload) => {
                info!("CTO access test: {payload}");
                self.notifier.notify(message_field(&payload));
            }
            Err(e) => {
                error!("CTO access error: {e:#}");
            }
        }
    }
}

/// Extract the user-facing message from a payload
///
/// A missing or non-string `message` renders as the empty string; the
/// payload's shape is not validated beyond that.
fn message_field(payload: &Value) -> &str {
    payload
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{anyhow, Result};
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;

    struct StaticTransport {
        payload: Value,
    }

    #[async_trait]
    impl AccessTransport for StaticTransport {
        async fn fetch_access(&self) -> Result<Value> {
            Ok(self.payload.clone())
        }

        fn name(&self) -> &'static str {
            "static"
        }
    }

    struct FailingTransport;

    #[async_trait]
    impl AccessTransport for FailingTransport {
        async fn fetch_access(&self) -> Result<Value> {
            Err(anyhow!("connection refused"))
        }

        fn name(&self) -> &'static str {
            "failing"
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        messages: Mutex<Vec<String>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, message: &str) {
            self.messages.lock().unwrap().push(message.to_string());
        }
    }

    fn manager_with(
        transport: Box<dyn AccessTransport>,
    ) -> (LayoutManager, Arc<RecordingNotifier>) {
        let notifier = Arc::new(RecordingNotifier::default());
        let manager = LayoutManager::new(transport, notifier.clone());
        (manager, notifier)
    }

    #[test]
    fn startup_messages_are_two_fixed_lines() {
        assert_eq!(STARTUP_MESSAGES.len(), 2);
        assert_eq!(STARTUP_MESSAGES[0], "CTO layout management system active");
        assert_eq!(STARTUP_MESSAGES[1], "CTO layout client loaded successfully");
    }

    #[test]
    fn construction_does_not_notify() {
        let (_manager, notifier) = manager_with(Box::new(StaticTransport {
            payload: json!({"message": "unused"}),
        }));
        assert!(notifier.messages.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn success_notifies_with_message() {
        let (manager, notifier) = manager_with(Box::new(StaticTransport {
            payload: json!({"message": "Access granted"}),
        }));

        manager.test_access().await;

        let messages = notifier.messages.lock().unwrap();
        assert_eq!(messages.as_slice(), ["Access granted"]);
    }

    #[tokio::test]
    async fn missing_message_notifies_empty() {
        let (manager, notifier) = manager_with(Box::new(StaticTransport {
            payload: json!({}),
        }));

        manager.test_access().await;

        let messages = notifier.messages.lock().unwrap();
        assert_eq!(messages.as_slice(), [""]);
    }

    #[tokio::test]
    async fn failure_stays_silent() {
        let (manager, notifier) = manager_with(Box::new(FailingTransport));

        manager.test_access().await;

        assert!(notifier.messages.lock().unwrap().is_empty());
    }

    #[test]
    fn non_string_message_renders_empty() {
        assert_eq!(message_field(&json!({"message": 42})), "");
        assert_eq!(message_field(&json!({"message": "hi"})), "hi");
        assert_eq!(message_field(&json!(null)), "");
    }
}
