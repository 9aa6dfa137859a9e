// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the demo host.
//!
//! Window focus changes are routed so the banner sees focus leave its
//! subtree and come back, and a periodic tick drives the banner's timers
//! while any of them is pending.

use super::config::TICK_INTERVAL_MS;
use super::Message;
use iced::{event, time, Subscription};
use std::time::Duration;

/// Routes window focus changes.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Window(iced::window::Event::Unfocused) => Some(Message::WindowUnfocused),
        event::Event::Window(iced::window::Event::Focused) => Some(Message::WindowFocused),
        _ => None,
    })
}

/// Creates the periodic tick that drives banner timers.
///
/// Only active while a banner has a pending timer, so an idle window does
/// not wake up.
pub fn create_tick_subscription(has_pending_timers: bool) -> Subscription<Message> {
    if has_pending_timers {
        time::every(Duration::from_millis(TICK_INTERVAL_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
