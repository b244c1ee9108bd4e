//! Terminal Primitive - Engine-backed terminal component.
//!
//! Allocates a container, mounts an engine into it once, and disposes the
//! engine when the returned cleanup runs.
//!
//! # Pattern: EffectScope-based Lifecycle
//!
//! Same shape as the control flow primitives:
//! 1. Create an EffectScope that owns the component's lifetime
//! 2. Inside `scope.run()`, an effect reads the `terminal_ref` prop and mounts
//! 3. `on_scope_dispose()` unmounts
//! 4. Return `Box::new(move || scope.stop())` as the Cleanup
//!
//! The effect depends on nothing but `terminal_ref`; the mount itself runs
//! untracked. Re-running it (the ref signal now yields a different
//! `TerminalRef`) unmounts the old engine completely before the new one is
//! created. Options, callbacks and addons
//! are captured when `terminal()` is called; the remount reuses them.
//!
//! # Example
//!
//! ```ignore
//! use spark_term::{terminal, TerminalProps, TerminalRef};
//! use std::rc::Rc;
//!
//! let term = TerminalRef::<MyEngine>::new();
//!
//! let cleanup = terminal(TerminalProps {
//!     class_name: Some("console".into()),
//!     terminal_ref: Some(term.clone().into()),
//!     on_data: Some(Rc::new(|data: &str| send_to_pty(data))),
//!     on_title_change: Some(Rc::new(|title: &str| set_window_title(title))),
//!     ..Default::default()
//! })?;
//!
//! term.write("$ ")?;
//!
//! // Later
//! cleanup(); // engine disposed, term empty
//! ```

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use spark_signals::{effect, effect_scope, on_scope_dispose, untrack};

use crate::container::Container;
use crate::engine::Engine;
use crate::error::TerminalError;
use crate::pipeline::{TerminalController, TerminalRef};
use super::types::{Cleanup, PropValue, TerminalProps};

/// Create a terminal component in a fresh container.
///
/// The container gets `props.class_name`. Returns the cleanup that disposes
/// the engine, or the error from the first mount.
pub fn terminal<E: Engine>(props: TerminalProps<E>) -> Result<Cleanup, TerminalError> {
    let container = Container::new(props.class_name.clone());
    terminal_in(container, props)
}

/// Create a terminal component in a container the host already allocated.
///
/// `props.class_name`, when set, replaces the container's class name.
pub fn terminal_in<E: Engine>(
    container: Container,
    props: TerminalProps<E>,
) -> Result<Cleanup, TerminalError> {
    if props.class_name.is_some() {
        container.set_class_name(props.class_name.clone());
    }

    let ref_prop = props
        .terminal_ref
        .clone()
        .unwrap_or_else(|| PropValue::Static(TerminalRef::new()));
    let props = Rc::new(props);

    let controller: Rc<RefCell<TerminalController<E>>> =
        Rc::new(RefCell::new(TerminalController::new()));
    let current_ref: Rc<RefCell<Option<TerminalRef<E>>>> = Rc::new(RefCell::new(None));
    let first_error: Rc<RefCell<Option<TerminalError>>> = Rc::new(RefCell::new(None));
    let first_run = Rc::new(Cell::new(true));

    // Create scope for cleanup management
    let scope = effect_scope(false);

    let controller_for_dispose = controller.clone();
    let first_error_for_update = first_error.clone();

    // Update function - runs when the ref prop yields a new ref
    let update = move |target: TerminalRef<E>| {
        if current_ref.borrow().as_ref() == Some(&target) {
            return;
        }
        *current_ref.borrow_mut() = Some(target.clone());

        // Signals read by the engine or its addons while mounting belong to
        // them, not to this effect
        let result = untrack(|| controller.borrow_mut().mount(&props, &container, &target));
        if let Err(err) = result {
            if first_run.get() {
                *first_error_for_update.borrow_mut() = Some(err);
            } else {
                // No caller to hand this to
                tracing::error!(error = %err, "terminal remount failed");
            }
        }
        first_run.set(false);
    };

    scope.run(move || {
        // Initial mount happens on first effect run
        let _effect_cleanup = effect(move || {
            let target = ref_prop.get();
            update(target);
        });

        on_scope_dispose(move || {
            controller_for_dispose.borrow_mut().unmount();
        });
    });

    let first_error = first_error.borrow_mut().take();
    if let Some(err) = first_error {
        scope.stop();
        return Err(err);
    }

    // Return cleanup that stops the scope
    Ok(Box::new(move || {
        scope.stop();
    }))
}

// =============================================================================
// Tests
// =============================================================================
