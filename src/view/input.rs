//! Mapping from raw input events to navigation actions.

use std::time::{Duration, Instant};

use crate::config::HKeyBinding;
use crate::page::{Bounds, Control};

/// Something the user asked the widget to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Previous,
    Next,
    Today,
    ShowAll,
}

/// A keyboard key, named the way browsers report `KeyboardEvent.key`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Char(char),
    Other(String),
}

impl Key {
    pub fn parse(name: &str) -> Self {
        match name {
            "ArrowLeft" | "Left" => Key::ArrowLeft,
            "ArrowRight" | "Right" => Key::ArrowRight,
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::Char(c),
                    _ => Key::Other(name.to_string()),
                }
            }
        }
    }
}

/// A user input event.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// One of the page's buttons was activated
    Control(Control),
    Key(Key),
    /// Mouse click at horizontal page position `x`
    Click { x: f64, at: Instant },
    /// Touch start at horizontal client position `x`
    Touch { x: f64, at: Instant },
}

/// Keyboard shortcuts.
#[derive(Debug, Clone, Copy)]
pub struct KeyBindings {
    pub h_key: HKeyBinding,
}

impl KeyBindings {
    pub fn new(h_key: HKeyBinding) -> Self {
        Self { h_key }
    }

    pub fn action_for(&self, key: &Key) -> Option<Action> {
        match key {
            Key::ArrowLeft => Some(Action::Previous),
            Key::ArrowRight => Some(Action::Next),
            Key::Char(c) => match c.to_ascii_lowercase() {
                'j' => Some(Action::Previous),
                'k' => Some(Action::Next),
                't' => Some(Action::Today),
                'h' => Some(match self.h_key {
                    HKeyBinding::Today => Action::Today,
                    HKeyBinding::Previous => Action::Previous,
                }),
                _ => None,
            },
            Key::Other(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    Left,
    Center,
    Right,
}

/// Left and right zone boundaries, as percentages of the viewport width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneLayout {
    pub left_margin: f64,
    pub right_margin: f64,
}

impl ZoneLayout {
    /// Derive the zones from the `previous` and `all` buttons.
    ///
    /// The center zone is the `all` button widened on each side by half the
    /// gap between it and the `previous` button.
    pub fn from_bounds(previous: Bounds, all: Bounds, viewport_width: f64) -> Option<Self> {
        if viewport_width <= 0.0 {
            return None;
        }
        let pct = |value: f64| value * 100.0 / viewport_width;

        let prev_left = pct(previous.left);
        let prev_width = pct(previous.width);
        let all_width = pct(all.width);

        let gap = (50.0 - prev_left - prev_width - all_width / 2.0) / 2.0;
        let center = all_width / 2.0 + gap;

        Some(Self {
            left_margin: 50.0 - center,
            right_margin: 50.0 + center,
        })
    }

    pub fn zone(&self, x_percent: f64) -> Zone {
        if x_percent > self.right_margin {
            Zone::Right
        } else if x_percent < self.left_margin {
            Zone::Left
        } else {
            Zone::Center
        }
    }
}

/// Suppresses the synthesized click that follows a touch.
#[derive(Debug, Clone)]
pub struct TouchDebouncer {
    window: Duration,
    last_touch: Option<Instant>,
}

impl TouchDebouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_touch: None,
        }
    }

    pub fn touched(&mut self, at: Instant) {
        self.last_touch = Some(at);
    }

    /// Whether a click at `at` belongs to the last touch gesture.
    pub fn suppresses_click(&self, at: Instant) -> bool {
        match self.last_touch {
            Some(touch) => at.saturating_duration_since(touch) < self.window,
            None => false,
        }
    }
}
