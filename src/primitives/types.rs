//! Primitive types - Props, callbacks and cleanup.
//!
//! These types define the configuration surface of the terminal component.
//! Everything in [`TerminalProps`] is read once, when the engine is mounted.

use std::rc::Rc;
use spark_signals::Signal;

use crate::engine::{Addon, Engine};
use crate::pipeline::TerminalRef;
use crate::state::keyboard::KeyboardEvent;
use crate::types::{KeyEvent, RenderEvent, ResizeEvent};

// =============================================================================
// Cleanup Function
// =============================================================================

/// Cleanup function returned by components.
///
/// Call this to unmount the component and release resources.
pub type Cleanup = Box<dyn FnOnce()>;

// =============================================================================
// Callback Types
// =============================================================================

/// Callback for events carrying text (data, binary, title).
pub type StrCallback = Rc<dyn Fn(&str)>;

/// Callback for events without a payload (cursor move, line feed, selection).
pub type VoidCallback = Rc<dyn Fn()>;

/// Key press callback.
pub type KeyCallback = Rc<dyn Fn(&KeyEvent)>;

/// Scroll callback, receives the new viewport position.
pub type ScrollCallback = Rc<dyn Fn(usize)>;

/// Rendered-rows callback.
pub type RenderCallback = Rc<dyn Fn(&RenderEvent)>;

/// Grid resize callback.
pub type ResizeCallback = Rc<dyn Fn(&ResizeEvent)>;

/// Key interceptor.
///
/// Return false to stop the engine from processing the key event.
pub type CustomKeyEventHandler = Rc<dyn Fn(&KeyboardEvent) -> bool>;

// =============================================================================
// Prop Value - Reactive property wrapper
// =============================================================================

/// A property value that can be static, a signal, or a getter.
///
/// Reading a `Signal` or `Getter` inside an effect makes the effect depend
/// on it.
#[derive(Clone)]
pub enum PropValue<T: Clone + PartialEq + 'static> {
    /// Static value (not reactive).
    Static(T),
    /// Reactive signal (changes propagate automatically).
    Signal(Signal<T>),
    /// Getter function (called each time value is needed).
    Getter(Rc<dyn Fn() -> T>),
}

impl<T: Clone + PartialEq + 'static> PropValue<T> {
    /// Get the current value (for immediate reads).
    pub fn get(&self) -> T {
        match self {
            PropValue::Static(v) => v.clone(),
            PropValue::Signal(s) => s.get(),
            PropValue::Getter(f) => f(),
        }
    }
}

impl<T: Clone + PartialEq + Default + 'static> Default for PropValue<T> {
    fn default() -> Self {
        PropValue::Static(T::default())
    }
}

impl<T: Clone + PartialEq + 'static> From<T> for PropValue<T> {
    fn from(value: T) -> Self {
        PropValue::Static(value)
    }
}

impl<T: Clone + PartialEq + 'static> From<Signal<T>> for PropValue<T> {
    fn from(signal: Signal<T>) -> Self {
        PropValue::Signal(signal)
    }
}

// =============================================================================
// Terminal Props
// =============================================================================

/// Properties for the terminal component.
///
/// Only the callbacks that are `Some` get subscribed. The values are captured
/// when the engine mounts; replacing them afterwards has no effect until the
/// component remounts (see [`terminal_ref`](Self::terminal_ref)).
///
/// # Example
///
/// ```ignore
/// use spark_term::{terminal, TerminalProps, TerminalRef};
/// use std::rc::Rc;
///
/// let term = TerminalRef::<MyEngine>::new();
///
/// let cleanup = terminal(TerminalProps {
///     class_name: Some("console".into()),
///     options: MyOptions { cols: 80, rows: 24 },
///     terminal_ref: Some(term.clone().into()),
///     on_data: Some(Rc::new(|data: &str| send_to_pty(data))),
///     ..Default::default()
/// })?;
///
/// term.writeln("connected")?;
/// ```
pub struct TerminalProps<E: Engine> {
    // =========================================================================
    // Surface
    // =========================================================================

    /// Class name applied to the container.
    pub class_name: Option<String>,

    // =========================================================================
    // Engine
    // =========================================================================

    /// Passed verbatim to [`Engine::create`].
    pub options: E::Options,

    /// Loaded in order, after all callbacks are subscribed.
    pub addons: Vec<Rc<dyn Addon<E>>>,

    /// Handle the live engine is published to.
    ///
    /// Changing the value of a `Signal`/`Getter` to a different ref remounts
    /// the engine and publishes it there. `None` uses a private ref.
    pub terminal_ref: Option<PropValue<TerminalRef<E>>>,

    // =========================================================================
    // Events
    // =========================================================================

    /// Binary data (non-UTF-8 input such as some mouse reports).
    pub on_binary: Option<StrCallback>,

    pub on_cursor_move: Option<VoidCallback>,

    /// User input the engine wants sent to the backing process.
    pub on_data: Option<StrCallback>,

    pub on_key: Option<KeyCallback>,

    pub on_line_feed: Option<VoidCallback>,

    /// Viewport scrolled; receives the new top row.
    pub on_scroll: Option<ScrollCallback>,

    pub on_selection_change: Option<VoidCallback>,

    /// Rows `start..=end` were rendered.
    pub on_render: Option<RenderCallback>,

    pub on_resize: Option<ResizeCallback>,

    pub on_title_change: Option<StrCallback>,

    // =========================================================================
    // Keyboard
    // =========================================================================

    /// Key interceptor installed before add-ons load.
    pub custom_key_event_handler: Option<CustomKeyEventHandler>,
}

impl<E: Engine> Default for TerminalProps<E> {
    fn default() -> Self {
        Self {
            class_name: None,
            options: E::Options::default(),
            addons: Vec::new(),
            terminal_ref: None,
            on_binary: None,
            on_cursor_move: None,
            on_data: None,
            on_key: None,
            on_line_feed: None,
            on_scroll: None,
            on_selection_change: None,
            on_render: None,
            on_resize: None,
            on_title_change: None,
            custom_key_event_handler: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spark_signals::signal;

    #[test]
    fn test_prop_value_static() {
        let value: PropValue<u16> = 80.into();
        assert_eq!(value.get(), 80);
    }

    #[test]
    fn test_prop_value_signal_tracks_latest() {
        let cols = signal(80u16);
        let value: PropValue<u16> = cols.clone().into();
        assert_eq!(value.get(), 80);

        cols.set(120);
        assert_eq!(value.get(), 120);
    }

    #[test]
    fn test_prop_value_getter() {
        let value: PropValue<String> = PropValue::Getter(Rc::new(|| "xterm".to_string()));
        assert_eq!(value.get(), "xterm");
    }
}
