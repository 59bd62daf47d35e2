//! Transient on-screen notifications.

use std::time::{Duration, Instant};

pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_secs(3);

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub created: Instant,
}

/// Notifications waiting to expire. Newest last.
#[derive(Debug, Clone)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    lifetime: Duration,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(DEFAULT_TOAST_DURATION)
    }
}

impl ToastQueue {
    pub fn new(lifetime: Duration) -> Self {
        Self {
            toasts: Vec::new(),
            lifetime,
        }
    }

    pub fn push(&mut self, message: impl Into<String>) {
        self.push_at(message, Instant::now());
    }

    pub fn push_at(&mut self, message: impl Into<String>, created: Instant) {
        self.toasts.push(Toast {
            message: message.into(),
            created,
        });
    }

    /// Drop every toast older than the lifetime.
    pub fn expire(&mut self, now: Instant) {
        let lifetime = self.lifetime;
        self.toasts
            .retain(|t| now.saturating_duration_since(t.created) < lifetime);
    }

    pub fn active(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn latest(&self) -> Option<&Toast> {
        self.toasts.last()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toasts_expire_after_lifetime() {
        let mut queue = ToastQueue::new(Duration::from_secs(3));
        let t0 = Instant::now();
        queue.push_at("first", t0);
        queue.push_at("second", t0 + Duration::from_secs(2));

        queue.expire(t0 + Duration::from_millis(2999));
        assert_eq!(queue.active().len(), 2);

        queue.expire(t0 + Duration::from_secs(3));
        assert_eq!(queue.active().len(), 1);
        assert_eq!(queue.latest().unwrap().message, "second");

        queue.expire(t0 + Duration::from_secs(5));
        assert!(queue.is_empty());
    }
}
