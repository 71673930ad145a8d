//! User-facing notifications raised by the edit client.

/// Receives messages meant for the person driving the application.
///
/// A front end plugs in its own dialog or toast here; the default only logs.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

/// Notifier that writes to the log at `warn` level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, message: &str) {
        tracing::warn!(notification = message, "User notification");
    }
}
