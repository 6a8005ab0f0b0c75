// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Window size changes always reach the app. Keyboard, pointer and touch
//! input is routed to the lightbox only while it is showing; otherwise the
//! grid widgets handle it themselves.

use super::Message;
use crate::lightbox;
use iced::{event, mouse, time, touch, window, Subscription};
use std::time::Duration;

const SPINNER_FRAME: Duration = Duration::from_millis(16);

pub fn create_window_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Window(window::Event::Resized(size))
        | event::Event::Window(window::Event::Opened { size, .. }) => {
            Some(Message::WindowResized(size))
        }
        _ => None,
    })
}

pub fn create_lightbox_subscription(visible: bool) -> Subscription<Message> {
    if !visible {
        return Subscription::none();
    }
    event::listen_with(|event, status, _window_id| {
        let forward = match &event {
            event::Event::Keyboard(iced::keyboard::Event::KeyPressed { .. }) => {
                status == event::Status::Ignored
            }
            event::Event::Mouse(
                mouse::Event::WheelScrolled { .. }
                | mouse::Event::CursorMoved { .. }
                | mouse::Event::CursorLeft
                | mouse::Event::ButtonReleased(mouse::Button::Left),
            ) => true,
            event::Event::Touch(
                touch::Event::FingerPressed { .. }
                | touch::Event::FingerMoved { .. }
                | touch::Event::FingerLifted { .. }
                | touch::Event::FingerLost { .. },
            ) => true,
            _ => false,
        };
        forward.then(|| Message::Lightbox(lightbox::Message::RawEvent(event)))
    })
}

/// Drives the loading spinner.
pub fn create_tick_subscription(is_loading: bool) -> Subscription<Message> {
    if is_loading {
        time::every(SPINNER_FRAME).map(|_| Message::Lightbox(lightbox::Message::SpinnerTick))
    } else {
        Subscription::none()
    }
}
