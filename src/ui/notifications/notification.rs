// SPDX-License-Identifier: MPL-2.0
//! A single toast: what it says, how loud it is, and when it goes away.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

/// Identity of a toast, used by its dismiss button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Warning,
    /// Stays until dismissed.
    Error,
}

impl Severity {
    /// Border and glyph color.
    #[must_use]
    pub fn accent(self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    /// How long the toast stays on screen once shown.
    #[must_use]
    pub fn lifetime(self) -> Option<Duration> {
        match self {
            Severity::Success => Some(Duration::from_secs(3)),
            Severity::Warning => Some(Duration::from_secs(5)),
            Severity::Error => None,
        }
    }
}

/// A localized message waiting for, or occupying, a toast slot.
///
/// The text is resolved at render time from `key` and `args`, so a language
/// switch also updates toasts already on screen.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    key: String,
    args: Vec<(&'static str, String)>,
    /// Set the first time the toast gets a visible slot.
    shown_at: Option<Instant>,
}

impl Notification {
    fn new(severity: Severity, key: impl Into<String>) -> Self {
        Self {
            id: NotificationId(NEXT_ID.fetch_add(1, Ordering::Relaxed)),
            severity,
            key: key.into(),
            args: Vec::new(),
            shown_at: None,
        }
    }

    pub fn success(key: impl Into<String>) -> Self {
        Self::new(Severity::Success, key)
    }

    pub fn warning(key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, key)
    }

    pub fn error(key: impl Into<String>) -> Self {
        Self::new(Severity::Error, key)
    }

    /// Adds a Fluent argument for the message.
    #[must_use]
    pub fn with_arg(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.args.push((name, value.into()));
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.key
    }

    /// Arguments borrowed in the shape `I18n::tr_with_args` takes.
    #[must_use]
    pub fn message_args(&self) -> Vec<(&str, &str)> {
        self.args
            .iter()
            .map(|(name, value)| (*name, value.as_str()))
            .collect()
    }

    pub(super) fn mark_shown(&mut self, now: Instant) {
        self.shown_at.get_or_insert(now);
    }

    /// True once the toast has been visible for its whole lifetime.
    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        match (self.severity.lifetime(), self.shown_at) {
            (Some(lifetime), Some(shown_at)) => now.saturating_duration_since(shown_at) >= lifetime,
            _ => false,
        }
    }

    /// Whether both would render as the same toast.
    #[must_use]
    pub fn says_the_same_as(&self, other: &Notification) -> bool {
        self.severity == other.severity && self.key == other.key && self.args == other.args
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_differ_for_identical_messages() {
        let a = Notification::warning("notification-busy");
        let b = Notification::warning("notification-busy");
        assert_ne!(a.id(), b.id());
        assert!(a.says_the_same_as(&b));
        assert!(!a.says_the_same_as(&Notification::error("notification-busy")));
    }

    #[test]
    fn args_are_part_of_the_message() {
        let text = Notification::warning("notification-not-an-image").with_arg("mime", "text/plain");
        let pdf =
            Notification::warning("notification-not-an-image").with_arg("mime", "application/pdf");
        assert_eq!(text.message_args(), vec![("mime", "text/plain")]);
        assert!(!text.says_the_same_as(&pdf));
    }

    #[test]
    fn unshown_toast_never_expires() {
        let later = Instant::now() + Duration::from_secs(60);
        assert!(!Notification::success("notification-copied").is_expired(later));
    }

    #[test]
    fn warning_expires_five_seconds_after_it_shows() {
        let shown = Instant::now();
        let mut warning = Notification::warning("notification-busy");
        warning.mark_shown(shown);

        assert!(!warning.is_expired(shown + Duration::from_secs(4)));
        assert!(warning.is_expired(shown + Duration::from_secs(5)));
    }

    #[test]
    fn errors_wait_for_the_user() {
        let shown = Instant::now();
        let mut error = Notification::error("notification-client-error");
        error.mark_shown(shown);
        assert!(!error.is_expired(shown + Duration::from_secs(3600)));
    }

    #[test]
    fn accents_follow_severity() {
        assert_ne!(Severity::Success.accent(), Severity::Warning.accent());
        assert_ne!(Severity::Warning.accent(), Severity::Error.accent());
    }
}
