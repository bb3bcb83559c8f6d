//! User-facing notification sinks.

use std::sync::{Arc, Mutex};

/// Fire-and-forget channel for messages shown to the shopper.
pub trait Notifier: Send + Sync {
    /// Show an error message.
    fn error(&self, message: &str);
}

impl<T: Notifier + ?Sized> Notifier for Arc<T> {
    fn error(&self, message: &str) {
        (**self).error(message)
    }
}

impl<T: Notifier + ?Sized> Notifier for &T {
    fn error(&self, message: &str) {
        (**self).error(message)
    }
}

/// Notifier that only logs, for callers without a display.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn error(&self, message: &str) {
        tracing::warn!(notice = message, "cart notice");
    }
}

/// Collects notices until a display layer drains them as toasts.
#[derive(Debug, Default)]
pub struct NoticeQueue {
    notices: Mutex<Vec<String>>,
}

impl NoticeQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take every pending notice, oldest first.
    pub fn drain(&self) -> Vec<String> {
        match self.notices.lock() {
            Ok(mut notices) => std::mem::take(&mut *notices),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }

    /// Number of pending notices.
    pub fn len(&self) -> usize {
        match self.notices.lock() {
            Ok(notices) => notices.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Notifier for NoticeQueue {
    fn error(&self, message: &str) {
        match self.notices.lock() {
            Ok(mut notices) => notices.push(message.to_string()),
            Err(poisoned) => poisoned.into_inner().push(message.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_drains_in_order() {
        let queue = NoticeQueue::new();
        queue.error("first");
        queue.error("second");
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.drain(), vec!["first", "second"]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_shared_queue() {
        let queue = Arc::new(NoticeQueue::new());
        let notifier: Arc<dyn Notifier> = queue.clone();
        notifier.error("shared");
        assert_eq!(queue.drain(), vec!["shared"]);
    }
}
