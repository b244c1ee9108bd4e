//! Event Bindings - Callback props to engine subscriptions.
//!
//! A fixed table with one entry per supported event. Mounting walks it once:
//! entries whose prop is `None` are skipped, the rest subscribe. Adding an
//! event means adding a prop, an `Engine::on_*` method and a table row.

use crate::engine::{Engine, Subscription};
use crate::primitives::TerminalProps;
use crate::types::TerminalEvents;

/// One row of the binding table.
pub(crate) struct EventBinding<E: Engine> {
    pub event: TerminalEvents,
    /// Whether the caller supplied this callback.
    pub is_set: fn(&TerminalProps<E>) -> bool,
    /// Subscribe the caller's callback, if supplied.
    pub subscribe: fn(&E, &TerminalProps<E>) -> Option<Subscription>,
}

/// Build a table row. The prop and the engine method share a name.
macro_rules! binding {
    ($event:ident, $prop:ident) => {
        EventBinding {
            event: TerminalEvents::$event,
            is_set: |props: &TerminalProps<E>| props.$prop.is_some(),
            subscribe: |engine: &E, props: &TerminalProps<E>| {
                props.$prop.clone().map(|handler| engine.$prop(handler))
            },
        }
    };
}

/// The binding table, in subscription order.
pub(crate) fn event_bindings<E: Engine>() -> [EventBinding<E>; 10] {
    [
        binding!(BINARY, on_binary),
        binding!(CURSOR_MOVE, on_cursor_move),
        binding!(DATA, on_data),
        binding!(KEY, on_key),
        binding!(LINE_FEED, on_line_feed),
        binding!(SCROLL, on_scroll),
        binding!(SELECTION_CHANGE, on_selection_change),
        binding!(RENDER, on_render),
        binding!(RESIZE, on_resize),
        binding!(TITLE_CHANGE, on_title_change),
    ]
}

/// Events the props ask to subscribe to.
pub fn requested_events<E: Engine>(props: &TerminalProps<E>) -> TerminalEvents {
    event_bindings::<E>()
        .iter()
        .filter(|binding| (binding.is_set)(props))
        .fold(TerminalEvents::empty(), |events, binding| events | binding.event)
}
