//! # Path Notifier
//!
//! When a resource is removed from an object instance, whatever registered its path with
//! the transport (e.g. a CoAP resource directory) must forget it. The object instance
//! reports the path through [`PathNotifier`] and does not wait on, or inspect, the outcome.
//!
//! See [`mock`] for a test double with expectations.

pub mod mock;

use tracing::info;

/// Receives the paths of resources that are gone.
pub trait PathNotifier {
    fn unregister_path(&mut self, path: &str);
}

/// Notifier that only records the unregistration in the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingNotifier;

impl PathNotifier for LoggingNotifier {
    fn unregister_path(&mut self, path: &str) {
        info!(path, "Path unregistered");
    }
}
