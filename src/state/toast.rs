//! Toast notifications

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// How long a toast stays on screen
pub const TOAST_TTL: Duration = Duration::from_secs(4);

/// Sink for user-facing notifications.
///
/// Passed into the form controller at submit time instead of living as
/// ambient global state, so tests can record what was emitted.
pub trait Notifier {
    /// Show a notification; `destructive` marks failures
    fn notify(&mut self, title: &str, destructive: bool);
}

/// A single toast message
#[derive(Debug, Clone)]
pub struct Toast {
    pub title: String,
    pub destructive: bool,
    created: Instant,
}

/// Fire-and-forget toast queue with a display TTL
#[derive(Debug)]
pub struct Toasts {
    queue: VecDeque<Toast>,
    ttl: Duration,
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new(TOAST_TTL)
    }
}

impl Toasts {
    pub fn new(ttl: Duration) -> Self {
        Self {
            queue: VecDeque::new(),
            ttl,
        }
    }

    /// Drop toasts that outlived the TTL
    pub fn prune(&mut self) {
        let ttl = self.ttl;
        self.queue.retain(|t| t.created.elapsed() < ttl);
    }

    /// Currently visible toasts, oldest first
    pub fn visible(&self) -> impl Iterator<Item = &Toast> {
        self.queue.iter()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl Notifier for Toasts {
    fn notify(&mut self, title: &str, destructive: bool) {
        tracing::debug!("toast (destructive={destructive}): {title}");
        self.queue.push_back(Toast {
            title: title.to_string(),
            destructive,
            created: Instant::now(),
        });
    }
}
