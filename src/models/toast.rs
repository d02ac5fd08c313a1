// SPDX-License-Identifier: MIT

//! Transient notification state with absolute expiry deadlines.

use std::time::{Duration, Instant};

/// How long a toast stays on screen.
const TOAST_LIFETIME: Duration = Duration::from_secs(4);

/// One transient notice. The only severity this application surfaces is
/// error, so there is no kind field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    /// User-facing message text.
    pub message: String,
    /// Instant after which the toast is dropped.
    pub expires_at: Instant,
}

/// Ordered stack of pending toasts, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastsModel {
    toasts: Vec<Toast>,
}

impl ToastsModel {
    /// Pending toasts in display order.
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Queue an error notice expiring [`TOAST_LIFETIME`] after `now`.
    pub fn error(&mut self, message: impl Into<String>, now: Instant) {
        self.toasts.push(Toast {
            message: message.into(),
            expires_at: now + TOAST_LIFETIME,
        });
    }

    /// Drop every toast whose deadline has passed.
    pub fn prune_expired(&mut self, now: Instant) {
        self.toasts.retain(|toast| now < toast.expires_at);
    }

    /// Earliest pending expiry, used to schedule the next repaint.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.toasts.iter().map(|toast| toast.expires_at).min()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_queues_toast_with_future_deadline() {
        let now = Instant::now();
        let mut model = ToastsModel::default();

        model.error("Special symbols are not allowed", now);

        assert_eq!(model.toasts().len(), 1);
        assert_eq!(model.toasts()[0].message, "Special symbols are not allowed");
        assert!(model.toasts()[0].expires_at > now);
    }

    #[test]
    fn prune_drops_only_expired_toasts() {
        let now = Instant::now();
        let mut model = ToastsModel::default();
        model.error("old", now);
        model.error("new", now + Duration::from_secs(2));

        model.prune_expired(now + TOAST_LIFETIME + Duration::from_millis(1));

        assert_eq!(model.toasts().len(), 1);
        assert_eq!(model.toasts()[0].message, "new");
    }

    #[test]
    fn prune_before_deadline_keeps_everything() {
        let now = Instant::now();
        let mut model = ToastsModel::default();
        model.error("still here", now);

        model.prune_expired(now + Duration::from_secs(1));

        assert!(!model.is_empty());
    }

    #[test]
    fn next_deadline_is_the_earliest_expiry() {
        let now = Instant::now();
        let mut model = ToastsModel::default();
        assert!(model.next_deadline().is_none());

        model.error("first", now);
        model.error("second", now + Duration::from_secs(3));

        assert_eq!(model.next_deadline(), Some(now + TOAST_LIFETIME));
    }
}
