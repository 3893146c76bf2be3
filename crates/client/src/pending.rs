//! Tracking of in-flight mutations per entity.
//!
//! Update and delete register their target id for the duration of the call,
//! so a UI can disable only the affected row instead of the whole list.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, PoisonError};

use crate::cache::Resource;

#[derive(Clone, Default)]
pub(crate) struct PendingSet {
    inner: Arc<Mutex<HashSet<(Resource, i32)>>>,
}

impl PendingSet {
    /// Register an in-flight mutation. The returned guard deregisters on drop,
    /// including when the mutation future is cancelled.
    pub(crate) fn begin(&self, resource: Resource, id: i32) -> PendingGuard {
        self.lock().insert((resource, id));
        PendingGuard {
            set: self.clone(),
            key: (resource, id),
        }
    }

    pub(crate) fn contains(&self, resource: Resource, id: i32) -> bool {
        self.lock().contains(&(resource, id))
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashSet<(Resource, i32)>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

pub(crate) struct PendingGuard {
    set: PendingSet,
    key: (Resource, i32),
}

impl Drop for PendingGuard {
    fn drop(&mut self) {
        self.set.lock().remove(&self.key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_registers_and_deregisters() {
        let set = PendingSet::default();
        {
            let _guard = set.begin(Resource::Packages, 5);
            assert!(set.contains(Resource::Packages, 5));
            assert!(!set.contains(Resource::Packages, 6));
            assert!(!set.contains(Resource::Posts, 5));
        }
        assert!(!set.contains(Resource::Packages, 5));
    }

    #[test]
    fn test_independent_mutations_coexist() {
        let set = PendingSet::default();
        let _a = set.begin(Resource::Packages, 1);
        let _b = set.begin(Resource::Posts, 2);
        assert!(set.contains(Resource::Packages, 1));
        assert!(set.contains(Resource::Posts, 2));
    }
}
