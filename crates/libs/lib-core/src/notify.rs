//! # Snackbar Notifications
//!
//! Fire-and-forget transient messages. The core only posts; the UI drains
//! the queue and decides how long each message stays visible.

use std::collections::VecDeque;

use parking_lot::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnackbarLevel {
    Success,
    Error,
}

/// A single transient message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnackbarMessage {
    pub text: String,
    pub level: SnackbarLevel,
}

impl SnackbarMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: SnackbarLevel::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: SnackbarLevel::Error,
        }
    }
}

/// Snackbar sink.
pub trait Snackbar: Send + Sync {
    fn show(&self, message: SnackbarMessage);
}

/// Bounded FIFO of pending messages. When full, the oldest message is dropped.
#[derive(Debug)]
pub struct SnackbarQueue {
    capacity: usize,
    messages: Mutex<VecDeque<SnackbarMessage>>,
}

impl SnackbarQueue {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            messages: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    /// Take every pending message, oldest first.
    pub fn drain(&self) -> Vec<SnackbarMessage> {
        self.messages.lock().drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.messages.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.lock().is_empty()
    }
}

impl Snackbar for SnackbarQueue {
    fn show(&self, message: SnackbarMessage) {
        let mut messages = self.messages.lock();
        if messages.len() == self.capacity {
            if let Some(dropped) = messages.pop_front() {
                tracing::debug!(text = %dropped.text, "Snackbar queue full, dropping oldest message");
            }
        }
        messages.push_back(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_in_order() {
        let queue = SnackbarQueue::new(4);
        queue.show(SnackbarMessage::success("one"));
        queue.show(SnackbarMessage::error("two"));

        let drained = queue.drain();
        assert_eq!(drained.len(), 2);
        assert_eq!(drained[0].text, "one");
        assert_eq!(drained[1].level, SnackbarLevel::Error);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_full_queue_drops_oldest() {
        let queue = SnackbarQueue::new(2);
        queue.show(SnackbarMessage::success("a"));
        queue.show(SnackbarMessage::success("b"));
        queue.show(SnackbarMessage::success("c"));

        assert_eq!(queue.len(), 2);
        let texts: Vec<String> = queue.drain().into_iter().map(|m| m.text).collect();
        assert_eq!(texts, vec!["b", "c"]);
    }

    #[test]
    fn test_zero_capacity_is_clamped() {
        let queue = SnackbarQueue::new(0);
        queue.show(SnackbarMessage::success("only"));
        assert_eq!(queue.len(), 1);
    }
}
