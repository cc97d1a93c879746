use std::time::Duration;

use iced::Subscription;
use iced::event::{self, Event as RuntimeEvent, Status as EventStatus};
use iced::keyboard::{self, Key, key::Named};
use iced::touch;

use crate::constants::motion;
use crate::messages::{Message, TouchInput};
use crate::state::State;

pub fn subscription(state: &State) -> Subscription<Message> {
    let mut subscriptions = vec![
        iced::window::events().map(|(_id, event)| match event {
            iced::window::Event::Resized(size) => Message::WindowResized(size),
            _ => Message::NoOp,
        }),
        // Touches are tracked window-wide so a finger sliding off the strip
        // still ends the drag.
        event::listen_with(touch_handler),
        event::listen_with(arrow_key_handler),
    ];

    // Frames are only needed while a drag is live or the strip is easing.
    if state.carousel.needs_frames() {
        subscriptions.push(
            iced::time::every(Duration::from_nanos(motion::TICK_NS)) // ~120 FPS
                .map(Message::FrameTick),
        );
    }

    Subscription::batch(subscriptions)
}

fn touch_handler(
    event: RuntimeEvent,
    _status: EventStatus,
    _window: iced::window::Id,
) -> Option<Message> {
    let RuntimeEvent::Touch(touch) = event else {
        return None;
    };

    let input = match touch {
        touch::Event::FingerPressed { position, .. } => {
            TouchInput::Started(position.x)
        }
        touch::Event::FingerMoved { position, .. } => {
            TouchInput::Moved(position.x)
        }
        touch::Event::FingerLifted { .. } => TouchInput::Ended,
        touch::Event::FingerLost { .. } => TouchInput::Cancelled,
    };
    Some(Message::Touch(input))
}

fn arrow_key_handler(
    event: RuntimeEvent,
    status: EventStatus,
    _window: iced::window::Id,
) -> Option<Message> {
    if status == EventStatus::Captured {
        return None;
    }

    let RuntimeEvent::Keyboard(keyboard::Event::KeyPressed {
        key, modifiers, ..
    }) = event
    else {
        return None;
    };

    if modifiers.control() || modifiers.alt() || modifiers.logo() {
        return None;
    }

    match key {
        Key::Named(Named::ArrowRight) => Some(Message::NextProject),
        Key::Named(Named::ArrowLeft) => Some(Message::PrevProject),
        _ => None,
    }
}
