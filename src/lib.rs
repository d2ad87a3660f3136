//! CTO layout access probe
//!
//! Client for the CTO layout management access-check endpoint. The crate
//! exposes a [`LayoutManager`] that performs a single `GET /cto/test-access`
//! probe, logs the JSON payload, and hands the payload's `message` field to a
//! pluggable [`Notifier`]. Callers wire the manager to whatever trigger they
//! have; nothing here installs global state.

pub mod config;
pub mod manager;
pub mod notify;
pub mod transport;

pub use config::LayoutConfig;
pub use manager::LayoutManager;
pub use notify::{ConsoleNotifier, Notifier, NullNotifier};
pub use transport::{AccessTransport, HttpTransport};
