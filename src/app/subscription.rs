// SPDX-License-Identifier: MPL-2.0
//! Keyboard shortcuts for the console.
//!
//! | Key          | Action             |
//! |--------------|--------------------|
//! | Arrow keys   | Move / turn        |
//! | Space        | Play               |
//! | `P`          | Pause              |
//! | `S`          | Stop               |
//! | `1` to `4`   | Select channel     |

use super::{Message, Screen};
use crate::domain::MoveDirection;
use crate::ui::console;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, Subscription};

/// Creates the event subscription for the current screen.
///
/// Shortcuts only apply on the console; events already captured by a widget
/// are left alone.
pub fn create_event_subscription(screen: Screen) -> Subscription<Message> {
    match screen {
        Screen::Console => event::listen_with(|event, status, _window_id| {
            if status == event::Status::Captured {
                return None;
            }
            match event {
                event::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. })
                    if modifiers.is_empty() =>
                {
                    shortcut(&key).map(Message::Console)
                }
                _ => None,
            }
        }),
        Screen::Settings => Subscription::none(),
    }
}

/// Maps a key to the console message it triggers.
pub fn shortcut(key: &Key) -> Option<console::Message> {
    match key.as_ref() {
        Key::Named(Named::ArrowUp) => Some(console::Message::Move(MoveDirection::Forward)),
        Key::Named(Named::ArrowDown) => Some(console::Message::Move(MoveDirection::Backward)),
        Key::Named(Named::ArrowLeft) => Some(console::Message::Move(MoveDirection::Left)),
        Key::Named(Named::ArrowRight) => Some(console::Message::Move(MoveDirection::Right)),
        Key::Named(Named::Space) => Some(console::Message::Play),
        Key::Character(c) if c.eq_ignore_ascii_case("p") => Some(console::Message::Pause),
        Key::Character(c) if c.eq_ignore_ascii_case("s") => Some(console::Message::Stop),
        Key::Character(c) => c
            .parse::<usize>()
            .ok()
            .filter(|digit| (1..=9).contains(digit))
            .map(|digit| console::Message::ChannelIndex(digit - 1)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn character(c: &str) -> Key {
        Key::Character(c.into())
    }

    #[test]
    fn arrows_move() {
        assert_eq!(
            shortcut(&Key::Named(Named::ArrowUp)),
            Some(console::Message::Move(MoveDirection::Forward))
        );
        assert_eq!(
            shortcut(&Key::Named(Named::ArrowRight)),
            Some(console::Message::Move(MoveDirection::Right))
        );
    }

    #[test]
    fn transport_keys() {
        assert_eq!(
            shortcut(&Key::Named(Named::Space)),
            Some(console::Message::Play)
        );
        assert_eq!(shortcut(&character("p")), Some(console::Message::Pause));
        assert_eq!(shortcut(&character("S")), Some(console::Message::Stop));
    }

    #[test]
    fn digits_select_by_position() {
        assert_eq!(
            shortcut(&character("1")),
            Some(console::Message::ChannelIndex(0))
        );
        assert_eq!(
            shortcut(&character("4")),
            Some(console::Message::ChannelIndex(3))
        );
        // Passed through; the selector ignores positions past the last channel.
        assert_eq!(
            shortcut(&character("7")),
            Some(console::Message::ChannelIndex(6))
        );
        assert_eq!(shortcut(&character("0")), None);
    }

    #[test]
    fn unmapped_keys_are_ignored() {
        assert_eq!(shortcut(&character("x")), None);
        assert_eq!(shortcut(&Key::Named(Named::Escape)), None);
    }
}
