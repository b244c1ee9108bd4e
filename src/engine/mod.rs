//! Terminal Engine - The capability interface the component binds to.
//!
//! The component never looks inside an engine. It needs exactly:
//! - a constructor taking an opaque options value
//! - `open(container)` to attach the engine to its render surface
//! - one `on_<event>(handler) -> Subscription` per supported event
//! - a custom key-event interceptor slot
//! - `load_addon(addon)` and `dispose()`
//!
//! plus the imperative methods callers reach through a
//! [`TerminalRef`](crate::pipeline::TerminalRef) (`write`, `resize`, `focus`, ...).
//!
//! # Architecture
//!
//! ```text
//! TerminalController ──create/open/on_*/load_addon/dispose──► impl Engine
//!        │                                                         ▲
//!        └──publish──► TerminalRef ──write/resize/focus────────────┘
//! ```
//!
//! Engines with interior state take `&self` everywhere; an instance is shared
//! as `Rc<E>` between the controller and the published handle.

mod emitter;
mod registry;

#[cfg(test)]
pub(crate) mod mock;

pub use emitter::*;
pub use registry::*;

use std::fmt;
use std::rc::Rc;

use crate::container::Container;
use crate::error::BoxError;
use crate::primitives::{
    CustomKeyEventHandler, KeyCallback, RenderCallback, ResizeCallback, ScrollCallback,
    StrCallback, VoidCallback,
};

// =============================================================================
// Subscription
// =============================================================================

/// Disposable handle returned by every `on_<event>` registration.
///
/// Disposing is idempotent. Dropping a subscription without disposing it
/// leaves the handler registered.
pub struct Subscription {
    dispose: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Create a subscription that runs `dispose` the first time it is disposed.
    pub fn new(dispose: impl FnOnce() + 'static) -> Self {
        Self {
            dispose: Some(Box::new(dispose)),
        }
    }

    /// A subscription with nothing to release.
    pub fn empty() -> Self {
        Self { dispose: None }
    }

    /// Release the handler. Later calls do nothing.
    pub fn dispose(&mut self) {
        if let Some(dispose) = self.dispose.take() {
            dispose();
        }
    }

    pub fn is_disposed(&self) -> bool {
        self.dispose.is_none()
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("disposed", &self.is_disposed())
            .finish()
    }
}

// =============================================================================
// Addon
// =============================================================================

/// Pluggable module that extends an engine when loaded.
///
/// The component hands add-ons to [`Engine::load_addon`] unmodified; whether
/// and when `activate`/`dispose` run is the engine's business.
pub trait Addon<E: Engine> {
    /// Called by the engine when the add-on is loaded.
    fn activate(&self, engine: &E) -> Result<(), BoxError>;

    /// Called by the engine when it is disposed.
    fn dispose(&self) {}
}

// =============================================================================
// Engine
// =============================================================================

/// A terminal-emulation engine as seen by the component.
pub trait Engine: Sized + 'static {
    /// Construction options, passed verbatim to [`Engine::create`].
    type Options: Clone + Default + 'static;

    /// Construct an engine. Nothing is attached yet.
    fn create(options: Self::Options) -> Result<Self, BoxError>;

    /// Attach the engine to its render surface.
    fn open(&self, container: &Container) -> Result<(), BoxError>;

    // -------------------------------------------------------------------------
    // Events
    // -------------------------------------------------------------------------

    fn on_binary(&self, handler: StrCallback) -> Subscription;
    fn on_cursor_move(&self, handler: VoidCallback) -> Subscription;
    fn on_data(&self, handler: StrCallback) -> Subscription;
    fn on_key(&self, handler: KeyCallback) -> Subscription;
    fn on_line_feed(&self, handler: VoidCallback) -> Subscription;
    fn on_scroll(&self, handler: ScrollCallback) -> Subscription;
    fn on_selection_change(&self, handler: VoidCallback) -> Subscription;
    fn on_render(&self, handler: RenderCallback) -> Subscription;
    fn on_resize(&self, handler: ResizeCallback) -> Subscription;
    fn on_title_change(&self, handler: StrCallback) -> Subscription;

    /// Install the key interceptor. Returning `false` from it suppresses the
    /// engine's own handling of that key event.
    fn attach_custom_key_event_handler(&self, handler: CustomKeyEventHandler);

    // -------------------------------------------------------------------------
    // Lifecycle
    // -------------------------------------------------------------------------

    fn load_addon(&self, addon: Rc<dyn Addon<Self>>) -> Result<(), BoxError>;

    /// Tear the engine down: detach from the container and drop its handlers.
    fn dispose(&self);

    // -------------------------------------------------------------------------
    // Imperative surface
    // -------------------------------------------------------------------------

    fn write(&self, data: &str);
    fn resize(&self, cols: u16, rows: u16);
    fn focus(&self);
    fn blur(&self);
    fn clear(&self);
}
