//! User-facing notifications
//!
//! The form never prints; it hands fixed messages to a [`Notifier`]. The CLI
//! writes them to stderr, tests record them.

use std::sync::{Arc, Mutex};

use tracing::warn;

/// Sink for messages the user must see
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

/// Logs notifications at WARN level
#[derive(Debug, Clone, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, message: &str) {
        warn!(target: "rulecheck::notify", "{}", message);
    }
}

/// Writes notifications to stderr
#[derive(Debug, Clone, Default)]
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify(&self, message: &str) {
        eprintln!("{}", message);
    }
}

/// Keeps every notification in memory, in order
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    messages: Arc<Mutex<Vec<String>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .map(|messages| messages.clone())
            .unwrap_or_default()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        if let Ok(mut messages) = self.messages.lock() {
            messages.push(message.to_string());
        }
    }
}

impl<N: Notifier + ?Sized> Notifier for Arc<N> {
    fn notify(&self, message: &str) {
        (**self).notify(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_notifier_shares_state_across_clones() {
        let notifier = RecordingNotifier::new();
        let clone = notifier.clone();

        clone.notify("first");
        notifier.notify("second");

        assert_eq!(notifier.messages(), vec!["first", "second"]);
    }
}
