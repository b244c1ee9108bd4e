//! Container - The render surface an engine attaches to.
//!
//! A container is allocated by the component, styled with the caller's class
//! name, and lent to exactly one engine instance at a time. The controller
//! claims it before constructing an engine and releases it after disposal;
//! the engine only ever sees `&Container` in [`Engine::open`](crate::engine::Engine::open).

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use crate::engine::allocate_container_id;
use crate::error::TerminalError;

struct ContainerInner {
    id: usize,
    class_name: RefCell<Option<String>>,
    owner: Cell<Option<usize>>,
}

/// Shared handle to a render surface. Clones refer to the same container.
#[derive(Clone)]
pub struct Container {
    inner: Rc<ContainerInner>,
}

impl Container {
    pub fn new(class_name: Option<String>) -> Self {
        Self {
            inner: Rc::new(ContainerInner {
                id: allocate_container_id(),
                class_name: RefCell::new(class_name),
                owner: Cell::new(None),
            }),
        }
    }

    pub fn id(&self) -> usize {
        self.inner.id
    }

    pub fn class_name(&self) -> Option<String> {
        self.inner.class_name.borrow().clone()
    }

    pub fn set_class_name(&self, class_name: Option<String>) {
        *self.inner.class_name.borrow_mut() = class_name;
    }

    /// Id of the engine instance currently attached, if any.
    pub fn owner(&self) -> Option<usize> {
        self.inner.owner.get()
    }

    pub fn is_attached(&self) -> bool {
        self.owner().is_some()
    }

    /// Reserve the container for `instance`.
    pub(crate) fn claim(&self, instance: usize) -> Result<(), TerminalError> {
        match self.inner.owner.get() {
            Some(owner) if owner != instance => Err(TerminalError::ContainerBusy {
                container: self.inner.id,
                owner,
            }),
            _ => {
                self.inner.owner.set(Some(instance));
                Ok(())
            }
        }
    }

    /// Give the container back. Only the owning instance can release it.
    pub(crate) fn release(&self, instance: usize) {
        if self.inner.owner.get() == Some(instance) {
            self.inner.owner.set(None);
        }
    }
}

impl PartialEq for Container {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Container")
            .field("id", &self.inner.id)
            .field("class_name", &self.inner.class_name.borrow())
            .field("owner", &self.inner.owner.get())
            .finish()
    }
}
