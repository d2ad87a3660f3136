//! Notification capability - abstraction over the user-facing popup
//!
//! The original client surfaced the access-check message through a blocking
//! browser alert. Here that capability is a trait so a headless host can
//! substitute a no-op or a recording implementation.

/// Trait for presenting a message to the user
pub trait Notifier: Send + Sync {
    /// Present one message. Implementations decide how intrusive to be.
    fn notify(&self, message: &str);
}

/// Notifier that writes the message to stdout
///
/// The terminal stand-in for the modal popup: visible to the user, separate
/// from the diagnostic log stream.
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, message: &str) {
        println!("{message}");
    }
}

/// Notifier that discards every message, for headless embedding
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _message: &str) {}
}
