//! Instance Registry - Id allocation and live-instance tracking.
//!
//! Every engine instance a controller creates gets an id from here, and every
//! container gets one too. The registry keeps the set of live instance ids so
//! leaks (an engine created but never disposed) are observable:
//! - Instance ids come from a monotonic counter and are never reused
//! - Only the lifecycle controller allocates and releases instance ids
//! - Container ids use their own counter
//!
//! Callers outside the crate can observe the registry but not change it:
//!
//! ```compile_fail
//! spark_term::engine::release_instance(0);
//! ```

use std::cell::RefCell;
use std::collections::HashSet;

// =============================================================================
// Registry State
// =============================================================================

thread_local! {
    /// Ids of engine instances that were created and not yet released.
    static LIVE_INSTANCES: RefCell<HashSet<usize>> = RefCell::new(HashSet::new());

    /// Next instance id.
    static NEXT_INSTANCE_ID: RefCell<usize> = const { RefCell::new(0) };

    /// Next container id.
    static NEXT_CONTAINER_ID: RefCell<usize> = const { RefCell::new(0) };
}

// =============================================================================
// Instance Allocation
// =============================================================================

/// Allocate an id for a new engine instance and mark it live.
pub(crate) fn allocate_instance_id() -> usize {
    let id = NEXT_INSTANCE_ID.with(|next| {
        let mut next = next.borrow_mut();
        let id = *next;
        *next += 1;
        id
    });

    LIVE_INSTANCES.with(|live| {
        live.borrow_mut().insert(id);
    });

    id
}

/// Release an instance id. Releasing an id that is not live does nothing.
pub(crate) fn release_instance(id: usize) {
    LIVE_INSTANCES.with(|live| {
        live.borrow_mut().remove(&id);
    });
}

/// Allocate an id for a new container.
pub(crate) fn allocate_container_id() -> usize {
    NEXT_CONTAINER_ID.with(|next| {
        let mut next = next.borrow_mut();
        let id = *next;
        *next += 1;
        id
    })
}

// =============================================================================
// Lookups
// =============================================================================

/// Check if an instance id is live.
pub fn is_live(id: usize) -> bool {
    LIVE_INSTANCES.with(|live| live.borrow().contains(&id))
}

/// Number of engine instances created and not yet released on this thread.
pub fn live_instance_count() -> usize {
    LIVE_INSTANCES.with(|live| live.borrow().len())
}

// =============================================================================
// Reset (for testing)
// =============================================================================

/// Reset all registry state (for testing).
pub fn reset_registry() {
    LIVE_INSTANCES.with(|live| live.borrow_mut().clear());
    NEXT_INSTANCE_ID.with(|next| *next.borrow_mut() = 0);
    NEXT_CONTAINER_ID.with(|next| *next.borrow_mut() = 0);
}
