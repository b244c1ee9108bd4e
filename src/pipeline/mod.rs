//! Lifecycle Pipeline
//!
//! Connects a terminal component's props to a live engine instance.
//!
//! # Pipeline Architecture
//!
//! ```text
//! TerminalProps → TerminalController::mount → impl Engine → TerminalRef
//! ```
//!
//! ## Data Flow
//!
//! 1. **bindings** - Fixed table from callback props to `Engine::on_*` subscriptions
//! 2. **mount** - The controller: create, open, subscribe, load addons, publish; and the reverse
//! 3. **handle** - The single-slot ref the live engine is published to
//!
//! ## Key Design Principles
//!
//! - **One instance**: a controller holds at most one engine; remounting disposes first
//! - **Publish last**: the handle only ever sees a fully wired engine
//! - **Retract first**: the handle is emptied before dispose starts

mod bindings;
pub mod handle;
pub mod mount;

// Re-exports
pub use bindings::requested_events;
pub use handle::TerminalRef;
pub use mount::TerminalController;
