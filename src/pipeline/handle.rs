//! Terminal Ref - Imperative handle to the live engine.
//!
//! A single-slot cell written only by the lifecycle controller. Reads always
//! see the most recently published engine, or `None` before mount and after
//! unmount. It is not a signal: publishing never re-runs an effect.
//!
//! # Example
//!
//! ```ignore
//! let term = TerminalRef::<MyEngine>::new();
//! assert!(!term.is_mounted());
//!
//! let cleanup = terminal(TerminalProps {
//!     terminal_ref: Some(term.clone().into()),
//!     ..Default::default()
//! })?;
//!
//! term.write("\x1b[1mhello\x1b[0m")?;
//! term.resize(120, 40)?;
//!
//! cleanup();
//! assert!(matches!(term.write("late"), Err(TerminalError::NotMounted)));
//! ```

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::engine::Engine;
use crate::error::TerminalError;

/// Shared handle to the engine instance a terminal component has mounted.
///
/// Clones share the slot. Two refs are equal when they share the slot, which
/// is what the component compares to decide whether to remount.
pub struct TerminalRef<E: Engine> {
    slot: Rc<RefCell<Option<Rc<E>>>>,
}

impl<E: Engine> TerminalRef<E> {
    pub fn new() -> Self {
        Self {
            slot: Rc::new(RefCell::new(None)),
        }
    }

    /// The live engine, if any.
    pub fn get(&self) -> Option<Rc<E>> {
        self.slot.borrow().clone()
    }

    pub fn is_mounted(&self) -> bool {
        self.slot.borrow().is_some()
    }

    /// Run `f` against the live engine.
    ///
    /// The slot is not borrowed while `f` runs, so `f` may unmount the
    /// component.
    pub fn with<R>(&self, f: impl FnOnce(&E) -> R) -> Option<R> {
        let engine = self.get()?;
        Some(f(&engine))
    }

    // =========================================================================
    // Imperative operations
    // =========================================================================

    pub fn write(&self, data: &str) -> Result<(), TerminalError> {
        self.with(|engine| engine.write(data))
            .ok_or(TerminalError::NotMounted)
    }

    /// Write `data` followed by CRLF.
    pub fn writeln(&self, data: &str) -> Result<(), TerminalError> {
        self.with(|engine| {
            engine.write(data);
            engine.write("\r\n");
        })
        .ok_or(TerminalError::NotMounted)
    }

    pub fn resize(&self, cols: u16, rows: u16) -> Result<(), TerminalError> {
        self.with(|engine| engine.resize(cols, rows))
            .ok_or(TerminalError::NotMounted)
    }

    pub fn focus(&self) -> Result<(), TerminalError> {
        self.with(|engine| engine.focus())
            .ok_or(TerminalError::NotMounted)
    }

    pub fn blur(&self) -> Result<(), TerminalError> {
        self.with(|engine| engine.blur())
            .ok_or(TerminalError::NotMounted)
    }

    pub fn clear(&self) -> Result<(), TerminalError> {
        self.with(|engine| engine.clear())
            .ok_or(TerminalError::NotMounted)
    }

    // =========================================================================
    // Controller side
    // =========================================================================

    pub(crate) fn publish(&self, engine: Rc<E>) {
        *self.slot.borrow_mut() = Some(engine);
    }

    /// Empty the slot if it still holds `engine`.
    pub(crate) fn retract(&self, engine: &Rc<E>) {
        let mut slot = self.slot.borrow_mut();
        if slot.as_ref().is_some_and(|current| Rc::ptr_eq(current, engine)) {
            *slot = None;
        }
    }
}

impl<E: Engine> Clone for TerminalRef<E> {
    fn clone(&self) -> Self {
        Self {
            slot: self.slot.clone(),
        }
    }
}

impl<E: Engine> Default for TerminalRef<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Engine> PartialEq for TerminalRef<E> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.slot, &other.slot)
    }
}

impl<E: Engine> fmt::Debug for TerminalRef<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TerminalRef")
            .field("mounted", &self.is_mounted())
            .finish()
    }
}
