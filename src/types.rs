//! Core types for spark-term.
//!
//! Event payloads delivered by an engine to the component's callbacks, and the
//! closed set of events the component knows how to subscribe to.

use crate::state::keyboard::KeyboardEvent;

// =============================================================================
// Event Payloads
// =============================================================================

/// Key press reported by the engine.
///
/// `key` is the sequence the engine will send for the press,
/// `dom_event` is the raw keyboard event it was derived from.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyEvent {
    pub key: String,
    pub dom_event: KeyboardEvent,
}

impl KeyEvent {
    pub fn new(key: impl Into<String>, dom_event: KeyboardEvent) -> Self {
        Self {
            key: key.into(),
            dom_event,
        }
    }
}

/// Range of viewport rows the engine just rendered (inclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderEvent {
    pub start: usize,
    pub end: usize,
}

/// New grid size after a resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResizeEvent {
    pub cols: u16,
    pub rows: u16,
}

// =============================================================================
// Terminal Events (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// The fixed set of engine events a terminal component can subscribe to.
    ///
    /// Combine with bitwise OR: `TerminalEvents::DATA | TerminalEvents::RESIZE`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct TerminalEvents: u16 {
        const BINARY = 1 << 0;
        const CURSOR_MOVE = 1 << 1;
        const DATA = 1 << 2;
        const KEY = 1 << 3;
        const LINE_FEED = 1 << 4;
        const SCROLL = 1 << 5;
        const SELECTION_CHANGE = 1 << 6;
        const RENDER = 1 << 7;
        const RESIZE = 1 << 8;
        const TITLE_CHANGE = 1 << 9;
    }
}

const PROP_NAMES: [(TerminalEvents, &str); 10] = [
    (TerminalEvents::BINARY, "on_binary"),
    (TerminalEvents::CURSOR_MOVE, "on_cursor_move"),
    (TerminalEvents::DATA, "on_data"),
    (TerminalEvents::KEY, "on_key"),
    (TerminalEvents::LINE_FEED, "on_line_feed"),
    (TerminalEvents::SCROLL, "on_scroll"),
    (TerminalEvents::SELECTION_CHANGE, "on_selection_change"),
    (TerminalEvents::RENDER, "on_render"),
    (TerminalEvents::RESIZE, "on_resize"),
    (TerminalEvents::TITLE_CHANGE, "on_title_change"),
];

impl TerminalEvents {
    /// Callback prop name for a single event flag.
    ///
    /// Returns an empty string for combined or empty sets.
    pub fn prop_name(self) -> &'static str {
        PROP_NAMES
            .iter()
            .find(|(flag, _)| *flag == self)
            .map(|(_, name)| *name)
            .unwrap_or("")
    }
}
