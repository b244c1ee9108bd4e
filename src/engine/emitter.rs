//! Emitter - Handler list behind one engine event.
//!
//! Engines expose each event as `on_<event>(handler) -> Subscription`. An
//! `Emitter<T>` is the usual backing store: handlers are kept with an id so
//! the returned [`Subscription`] can remove exactly the one it added.
//!
//! # Example
//!
//! ```ignore
//! use spark_term::engine::Emitter;
//! use std::rc::Rc;
//!
//! let on_data: Emitter<str> = Emitter::new();
//! let mut sub = on_data.subscribe(Rc::new(|data: &str| println!("{data}")));
//!
//! on_data.fire("ls\n");   // handler runs
//! sub.dispose();
//! on_data.fire("ls\n");   // nothing
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use super::Subscription;

/// Handler stored by an [`Emitter`].
pub type Handler<T> = Rc<dyn Fn(&T)>;

struct HandlerList<T: ?Sized> {
    handlers: Vec<(usize, Handler<T>)>,
    next_id: usize,
}

impl<T: ?Sized> HandlerList<T> {
    fn new() -> Self {
        Self {
            handlers: Vec::new(),
            next_id: 0,
        }
    }

    fn next_id(&mut self) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

/// Ordered list of handlers for a single event.
pub struct Emitter<T: ?Sized + 'static> {
    list: Rc<RefCell<HandlerList<T>>>,
}

impl<T: ?Sized + 'static> Emitter<T> {
    pub fn new() -> Self {
        Self {
            list: Rc::new(RefCell::new(HandlerList::new())),
        }
    }

    /// Add a handler. Disposing the returned subscription removes it.
    pub fn subscribe(&self, handler: Handler<T>) -> Subscription {
        let id = {
            let mut list = self.list.borrow_mut();
            let id = list.next_id();
            list.handlers.push((id, handler));
            id
        };

        let list = Rc::downgrade(&self.list);
        Subscription::new(move || {
            if let Some(list) = list.upgrade() {
                list.borrow_mut().handlers.retain(|(handler_id, _)| *handler_id != id);
            }
        })
    }

    /// Call every handler in subscription order.
    ///
    /// Handlers may subscribe or dispose during the call; changes apply from
    /// the next `fire`.
    pub fn fire(&self, payload: &T) {
        let handlers: Vec<Handler<T>> = self
            .list
            .borrow()
            .handlers
            .iter()
            .map(|(_, handler)| handler.clone())
            .collect();

        for handler in handlers {
            handler(payload);
        }
    }

    /// Drop every handler.
    pub fn clear(&self) {
        self.list.borrow_mut().handlers.clear();
    }

    /// Number of subscribed handlers.
    pub fn len(&self) -> usize {
        self.list.borrow().handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: ?Sized + 'static> Default for Emitter<T> {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// TESTS
// =============================================================================
