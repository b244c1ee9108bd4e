//! Mount API - Engine lifecycle.
//!
//! The controller owns the one engine instance of a terminal component and
//! runs its whole life:
//!
//! ```text
//! mount:   claim container → create → open → subscribe callbacks
//!          → key handler → load addons → publish
//! unmount: retract handle → dispose subscriptions → dispose engine
//!          → release container
//! ```
//!
//! Mounting while an instance is held unmounts it first, so two instances
//! never coexist. A failed mount publishes nothing; whatever was built is
//! kept unpublished and torn down by the next `unmount`.
//!
//! # Example
//!
//! ```ignore
//! use spark_term::pipeline::{TerminalController, TerminalRef};
//!
//! let container = Container::new(Some("console".into()));
//! let term = TerminalRef::new();
//! let mut controller = TerminalController::<MyEngine>::new();
//!
//! controller.mount(&props, &container, &term)?;
//! term.write("ready")?;
//!
//! controller.unmount();
//! controller.unmount(); // no-op
//! ```

use std::fmt;
use std::rc::Rc;

use crate::container::Container;
use crate::engine::{allocate_instance_id, release_instance, Engine, Subscription};
use crate::error::TerminalError;
use crate::primitives::TerminalProps;
use crate::types::TerminalEvents;
use super::bindings::event_bindings;
use super::handle::TerminalRef;

// =============================================================================
// Instance
// =============================================================================

/// Everything the controller holds for one engine instance.
struct Instance<E: Engine> {
    id: usize,
    engine: Rc<E>,
    container: Container,
    subscriptions: Vec<Subscription>,
    events: TerminalEvents,
    /// Where the engine was published. `None` until mount completes.
    published: Option<TerminalRef<E>>,
}

// =============================================================================
// Controller
// =============================================================================

/// Lifecycle controller for a single terminal component.
///
/// Dropping the controller unmounts.
pub struct TerminalController<E: Engine> {
    instance: Option<Instance<E>>,
}

impl<E: Engine> TerminalController<E> {
    pub fn new() -> Self {
        Self { instance: None }
    }

    /// Build, wire and publish a new engine instance.
    ///
    /// Any instance already held is unmounted first. On error nothing is
    /// published to `target`.
    pub fn mount(
        &mut self,
        props: &TerminalProps<E>,
        container: &Container,
        target: &TerminalRef<E>,
    ) -> Result<Rc<E>, TerminalError> {
        self.unmount();

        let id = allocate_instance_id();
        if let Err(err) = container.claim(id) {
            release_instance(id);
            return Err(err);
        }

        tracing::debug!(instance = id, container = container.id(), "mounting terminal engine");

        // 1. Create
        let engine = match E::create(props.options.clone()) {
            Ok(engine) => Rc::new(engine),
            Err(source) => {
                container.release(id);
                release_instance(id);
                return Err(TerminalError::Create(source));
            }
        };

        // The instance is held from here on, so unmount can dispose a
        // partially mounted engine.
        let instance = self.instance.insert(Instance {
            id,
            engine: engine.clone(),
            container: container.clone(),
            subscriptions: Vec::new(),
            events: TerminalEvents::empty(),
            published: None,
        });

        // 2. Attach
        engine.open(container).map_err(|source| TerminalError::Open {
            container: container.id(),
            source,
        })?;

        // 3. Subscribe supplied callbacks
        for binding in event_bindings::<E>() {
            if let Some(subscription) = (binding.subscribe)(&engine, props) {
                tracing::trace!(instance = id, event = binding.event.prop_name(), "subscribed");
                instance.subscriptions.push(subscription);
                instance.events |= binding.event;
            }
        }

        // 4. Key interceptor
        if let Some(handler) = &props.custom_key_event_handler {
            engine.attach_custom_key_event_handler(handler.clone());
        }

        // 5. Addons, in order
        for (index, addon) in props.addons.iter().enumerate() {
            engine
                .load_addon(addon.clone())
                .map_err(|source| TerminalError::Addon { index, source })?;
            tracing::trace!(instance = id, addon = index, "addon loaded");
        }

        // 6. Publish
        target.publish(engine.clone());
        instance.published = Some(target.clone());

        tracing::debug!(
            instance = id,
            events = ?instance.events,
            addons = props.addons.len(),
            "terminal engine mounted"
        );

        Ok(engine)
    }

    /// Dispose the held instance, if any.
    ///
    /// Safe after a failed mount; a second call does nothing.
    pub fn unmount(&mut self) {
        let Some(mut instance) = self.instance.take() else {
            return;
        };

        // Nobody can reach the engine through the handle once dispose starts
        if let Some(target) = instance.published.take() {
            target.retract(&instance.engine);
        }

        for subscription in instance.subscriptions.iter_mut().rev() {
            subscription.dispose();
        }

        instance.engine.dispose();
        instance.container.release(instance.id);
        release_instance(instance.id);

        tracing::debug!(instance = instance.id, "terminal engine disposed");
    }

    // =========================================================================
    // Introspection
    // =========================================================================

    /// True once a mount has completed and until unmount.
    pub fn is_mounted(&self) -> bool {
        self.instance
            .as_ref()
            .is_some_and(|instance| instance.published.is_some())
    }

    /// Id of the held instance, published or not.
    pub fn instance_id(&self) -> Option<usize> {
        self.instance.as_ref().map(|instance| instance.id)
    }

    /// The published engine.
    pub fn engine(&self) -> Option<Rc<E>> {
        self.instance
            .as_ref()
            .filter(|instance| instance.published.is_some())
            .map(|instance| instance.engine.clone())
    }

    /// Events the held instance subscribed to.
    pub fn subscribed_events(&self) -> TerminalEvents {
        self.instance
            .as_ref()
            .map(|instance| instance.events)
            .unwrap_or_default()
    }
}

impl<E: Engine> Default for TerminalController<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Engine> Drop for TerminalController<E> {
    fn drop(&mut self) {
        self.unmount();
    }
}

impl<E: Engine> fmt::Debug for TerminalController<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TerminalController")
            .field("instance", &self.instance_id())
            .field("mounted", &self.is_mounted())
            .field("events", &self.subscribed_events())
            .finish()
    }
}

// =============================================================================
// Tests
// =============================================================================
