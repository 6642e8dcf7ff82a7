// SPDX-License-Identifier: MPL-2.0
//! Toast notifications.
//!
//! Input rejections (wrong file type, empty URL, nothing to analyze) and
//! settings problems are reported as toasts in the bottom-right corner.
//! Request failures are not: those go to the results panel.
//!
//! Success toasts stay 3s and warnings 5s after they appear; errors stay
//! until dismissed. At most three are visible, the rest wait their turn.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, Severity};
pub use toast::overlay;
