//! # Toast Channel
//!
//! Ephemeral, time-boxed notifications. A toast lives until its
//! deadline passes, the user dismisses it, or a newer toast replaces
//! it. Replacement re-arms the deadline, so a stale expiry can never
//! hide a newer message.
//!
//! Timing is driven by `Instant` values supplied by the event loop,
//! which keeps the channel deterministic under test.

use std::time::{Duration, Instant};

/// How long a toast stays visible.
pub const TOAST_DURATION: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
}

/// Single-slot toast cell with a dismissal deadline.
#[derive(Default)]
pub struct ToastState {
    current: Option<(Toast, Instant)>,
}

impl ToastState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a toast, replacing any pending one and re-arming the
    /// deadline from `now`.
    pub fn show(&mut self, message: impl Into<String>, kind: ToastKind, now: Instant) {
        let toast = Toast {
            message: message.into(),
            kind,
        };
        self.current = Some((toast, now + TOAST_DURATION));
    }

    /// Manual dismissal; disarms the deadline with the toast.
    pub fn dismiss(&mut self) {
        self.current = None;
    }

    /// Clear the toast once its deadline has passed. Call once per
    /// event-loop iteration.
    pub fn tick(&mut self, now: Instant) {
        if let Some((_, deadline)) = &self.current
            && now >= *deadline
        {
            self.current = None;
        }
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref().map(|(toast, _)| toast)
    }

    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }

    /// Deadline of the pending toast, used by the event loop to pick a
    /// poll timeout that repaints promptly on expiry.
    pub fn deadline(&self) -> Option<Instant> {
        self.current.as_ref().map(|(_, deadline)| *deadline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_visible_until_deadline() {
        let start = Instant::now();
        let mut toasts = ToastState::new();
        toasts.show("Saved", ToastKind::Success, start);
        assert!(toasts.is_visible());

        toasts.tick(start + TOAST_DURATION - Duration::from_millis(1));
        assert!(toasts.is_visible());

        toasts.tick(start + TOAST_DURATION);
        assert!(!toasts.is_visible());
    }

    #[test]
    fn test_show_replaces_and_rearms() {
        let start = Instant::now();
        let mut toasts = ToastState::new();
        toasts.show("First", ToastKind::Info, start);

        // A second toast shown just before the first would expire.
        let later = start + TOAST_DURATION - Duration::from_millis(10);
        toasts.show("Second", ToastKind::Success, later);

        // The first toast's deadline passing must not hide the second.
        toasts.tick(start + TOAST_DURATION);
        assert_eq!(toasts.current().map(|t| t.message.as_str()), Some("Second"));

        toasts.tick(later + TOAST_DURATION);
        assert!(!toasts.is_visible());
    }

    #[test]
    fn test_manual_dismiss() {
        let start = Instant::now();
        let mut toasts = ToastState::new();
        toasts.show("Note sent", ToastKind::Success, start);
        toasts.dismiss();
        assert!(!toasts.is_visible());
        assert_eq!(toasts.deadline(), None);
    }

    #[test]
    fn test_kind_is_preserved() {
        let mut toasts = ToastState::new();
        toasts.show("Oops", ToastKind::Error, Instant::now());
        assert_eq!(toasts.current().map(|t| t.kind), Some(ToastKind::Error));
    }
}
