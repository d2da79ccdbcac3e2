//! Memoized service instance cache.
//!
//! The registry replaces ad-hoc process-wide singletons with an explicit
//! cache owned by the composition root. Instances are keyed by their
//! concrete type; repeated lookups hand back the same `Arc`.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

/// Type alias for the instance map.
type InstanceMap = HashMap<TypeId, Arc<dyn Any + Send + Sync>>;

/// Cache of shared service instances, one per concrete type.
#[derive(Default)]
pub struct ServiceRegistry {
    instances: Mutex<InstanceMap>,
}

impl ServiceRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the cached instance of `T`, constructing it on first use.
    ///
    /// Every subsequent call returns a clone of the same `Arc`, so callers
    /// observe one shared instance per registry lifetime.
    pub fn get_or_init<T, F>(&self, init: F) -> Arc<T>
    where
        T: Any + Send + Sync,
        F: FnOnce() -> T,
    {
        let mut instances = self.instances.lock().unwrap_or_else(PoisonError::into_inner);

        let entry = instances
            .entry(TypeId::of::<T>())
            .or_insert_with(|| Arc::new(init()));

        Arc::clone(entry)
            .downcast::<T>()
            .unwrap_or_else(|_| unreachable!("instance registered under its own TypeId"))
    }

    /// Get the cached instance of `T` without constructing one.
    pub fn get<T>(&self) -> Option<Arc<T>>
    where
        T: Any + Send + Sync,
    {
        let instances = self.instances.lock().unwrap_or_else(PoisonError::into_inner);

        instances.get(&TypeId::of::<T>()).cloned().map(|entry| {
            entry
                .downcast::<T>()
                .unwrap_or_else(|_| unreachable!("instance registered under its own TypeId"))
        })
    }

    /// Number of cached instances.
    pub fn len(&self) -> usize {
        self.instances.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop all cached instances.
    pub fn clear(&self) {
        self.instances.lock().unwrap_or_else(PoisonError::into_inner).clear();
    }
}
