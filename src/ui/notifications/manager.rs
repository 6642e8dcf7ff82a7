// SPDX-License-Identifier: MPL-2.0
//! Toast queue.
//!
//! All pending toasts live in one queue in arrival order. The first
//! [`SLOTS`] of them are on screen; the rest move up as those expire or get
//! dismissed.

use super::notification::{Notification, NotificationId, Severity};
use std::collections::VecDeque;
use std::time::Instant;

/// Toasts on screen at once.
const SLOTS: usize = 3;

#[derive(Debug, Clone)]
pub enum Message {
    Dismiss(NotificationId),
}

#[derive(Debug, Default)]
pub struct Manager {
    pending: VecDeque<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a toast unless an identical one is already pending.
    pub fn push(&mut self, notification: Notification) {
        match notification.severity() {
            Severity::Success => log::debug!("Toast {}", notification.message_key()),
            Severity::Warning | Severity::Error => log::warn!(
                "Toast {} {:?}",
                notification.message_key(),
                notification.message_args()
            ),
        }

        if self
            .pending
            .iter()
            .any(|queued| queued.says_the_same_as(&notification))
        {
            return;
        }
        self.pending.push_back(notification);
        self.fill_slots(Instant::now());
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::Dismiss(id) => {
                self.pending.retain(|n| n.id() != id);
                self.fill_slots(Instant::now());
            }
        }
    }

    /// Drops toasts whose time on screen is up.
    pub fn tick(&mut self, now: Instant) {
        let expired: Vec<NotificationId> = self
            .on_screen()
            .filter(|n| n.is_expired(now))
            .map(Notification::id)
            .collect();
        if expired.is_empty() {
            return;
        }
        self.pending.retain(|n| !expired.contains(&n.id()));
        self.fill_slots(now);
    }

    /// Toasts on screen, newest first.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.on_screen().rev()
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.pending.is_empty()
    }

    fn on_screen(&self) -> impl DoubleEndedIterator<Item = &Notification> {
        self.pending.iter().take(SLOTS)
    }

    fn fill_slots(&mut self, now: Instant) {
        for notification in self.pending.iter_mut().take(SLOTS) {
            notification.mark_shown(now);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn keys(manager: &Manager) -> Vec<&str> {
        manager.visible().map(Notification::message_key).collect()
    }

    #[test]
    fn overflow_waits_for_a_free_slot() {
        let mut manager = Manager::new();
        let first = Notification::error("first");
        let first_id = first.id();
        manager.push(first);
        manager.push(Notification::error("second"));
        manager.push(Notification::error("third"));
        manager.push(Notification::error("fourth"));

        assert_eq!(keys(&manager), ["third", "second", "first"]);

        manager.update(Message::Dismiss(first_id));
        assert_eq!(keys(&manager), ["fourth", "third", "second"]);
    }

    #[test]
    fn identical_pending_toast_is_not_repeated() {
        let mut manager = Manager::new();
        manager.push(Notification::warning("notification-wrong-tab"));
        manager.push(Notification::warning("notification-wrong-tab"));
        manager.push(Notification::warning("notification-busy"));

        assert_eq!(
            keys(&manager),
            ["notification-busy", "notification-wrong-tab"]
        );
    }

    #[test]
    fn tick_removes_expired_and_keeps_errors() {
        let mut manager = Manager::new();
        manager.push(Notification::success("notification-copied"));
        manager.push(Notification::error("notification-client-error"));

        manager.tick(Instant::now() + Duration::from_secs(10));

        assert_eq!(keys(&manager), ["notification-client-error"]);
        assert!(manager.has_notifications());
    }

    #[test]
    fn queued_toast_gets_its_full_time_once_shown() {
        let mut manager = Manager::new();
        let expiring = Notification::success("expiring");
        manager.push(expiring);
        manager.push(Notification::error("a"));
        manager.push(Notification::error("b"));
        manager.push(Notification::warning("queued"));

        // The success toast expires and frees a slot for the warning.
        let later = Instant::now() + Duration::from_secs(4);
        manager.tick(later);
        assert_eq!(keys(&manager), ["queued", "b", "a"]);

        // Four seconds after it appeared the warning is still up.
        manager.tick(later + Duration::from_secs(4));
        assert_eq!(keys(&manager), ["queued", "b", "a"]);

        manager.tick(later + Duration::from_secs(5));
        assert_eq!(keys(&manager), ["b", "a"]);
    }

    #[test]
    fn dismissing_unknown_id_is_harmless() {
        let mut manager = Manager::new();
        manager.push(Notification::error("stays"));
        manager.update(Message::Dismiss(Notification::error("other").id()));
        assert_eq!(keys(&manager), ["stays"]);
    }
}
