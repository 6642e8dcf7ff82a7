// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Only two native events matter here: files dropped on the window, and a
//! timer that runs while something animates or a toast is counting down.

use super::Message;
use iced::{event, time, Subscription};
use std::time::Duration;

const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Routes file drops to the app. Whether a drop is accepted depends on the
/// active tab, which `App::update` decides.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| {
        if let event::Event::Window(iced::window::Event::FileDropped(path)) = event {
            return Some(Message::FileDropped(path));
        }
        None
    })
}

/// Creates a periodic tick for the spinner and notification auto-dismiss.
pub fn create_tick_subscription(is_busy: bool, has_notifications: bool) -> Subscription<Message> {
    if is_busy || has_notifications {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
