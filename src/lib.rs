//! # spark-term
//!
//! Reactive terminal-engine component for Rust.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for fine-grained reactivity.
//!
//! ## Architecture
//!
//! spark-term does not emulate a terminal. It binds an externally supplied
//! engine (anything implementing [`Engine`]) to the lifetime of a component:
//!
//! ```text
//! terminal(props) → effect on terminal_ref → TerminalController::mount
//!                 → create → open(container) → callbacks → key handler → addons
//!                 → TerminalRef published
//! cleanup()       → retract TerminalRef → unsubscribe → engine.dispose()
//! ```
//!
//! The engine is created once per mount, never per render, and is always
//! disposed before the component goes away.
//!
//! ## Modules
//!
//! - [`types`] - Event payloads and the `TerminalEvents` set
//! - [`engine`] - Engine/Addon traits, subscriptions, instance registry
//! - [`container`] - Host container an engine attaches to
//! - [`pipeline`] - Mount/unmount controller and the imperative handle
//! - [`primitives`] - The `terminal` component and its props
//! - [`state`] - Keyboard event types and crossterm conversion
//! - [`error`] - Mount errors

pub mod container;
pub mod engine;
pub mod error;
pub mod pipeline;
pub mod primitives;
pub mod state;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use container::Container;

pub use engine::{
    is_live, live_instance_count, reset_registry, Addon, Emitter, Engine, Handler, Subscription,
};

pub use error::{BoxError, TerminalError};

pub use pipeline::{requested_events, TerminalController, TerminalRef};

pub use primitives::{
    terminal, terminal_in, Cleanup, CustomKeyEventHandler, KeyCallback, PropValue,
    RenderCallback, ResizeCallback, ScrollCallback, StrCallback, TerminalProps, VoidCallback,
};

pub use state::{convert_key_event, KeyState, KeyboardEvent, Modifiers};
