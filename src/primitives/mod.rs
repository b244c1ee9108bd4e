//! Terminal Primitives - Component building blocks.
//!
//! - [`terminal`] - Mounts an engine into a fresh container
//! - [`terminal_in`] - Same, into a container the host already has
//!
//! # Architecture
//!
//! Each component:
//! 1. Captures its props once
//! 2. Creates an EffectScope that owns the engine's lifetime
//! 3. Mounts from an effect that tracks only the `terminal_ref` prop
//! 4. Returns a cleanup function that stops the scope
//!
//! # Reactivity
//!
//! The `terminal_ref` prop can be:
//! - Static: `terminal_ref: Some(term.clone().into())`
//! - Signal: `terminal_ref: Some(PropValue::Signal(ref_signal))`
//! - Getter: `terminal_ref: Some(PropValue::Getter(Rc::new(move || pick())))`
//!
//! Pass the signal itself, not its current value, or the component never
//! sees the ref change:
//!
//! ```ignore
//! // CORRECT - remounts when the signal yields a new ref
//! terminal(TerminalProps { terminal_ref: Some(PropValue::Signal(current)), ..default });
//!
//! // WRONG - mounts once into whatever ref the signal held at the time
//! terminal(TerminalProps { terminal_ref: Some(PropValue::Static(current.get())), ..default });
//! ```

mod terminal;
mod types;

pub use terminal::{terminal, terminal_in};
pub use types::*;
