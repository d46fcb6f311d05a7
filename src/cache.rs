use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;

use rustc_hash::FxHashMap;

/// A per-problem-instance memo store.
///
/// Heuristics use it to precompute structures once (a distance table, a
/// pattern database) and reuse them across every call on the same problem
/// instance. Entries live as long as the instance; the search drivers never
/// touch them. Each evaluator owns its keys, so unrelated evaluators can
/// share one cache without colliding.
///
/// Interior mutability keeps heuristic signatures by-reference; the store is
/// deliberately `!Sync`, matching the single-threaded execution model.
#[derive(Default)]
pub struct Cache {
    slots: RefCell<FxHashMap<&'static str, Rc<dyn Any>>>,
}

impl Cache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the entry under `key`, computing and storing it on the first
    /// call. A key reused with a different type shadows the old entry.
    pub fn get_or_compute<T, F>(&self, key: &'static str, compute: F) -> Rc<T>
    where
        T: 'static,
        F: FnOnce() -> T,
    {
        if let Some(slot) = self.slots.borrow().get(key) {
            if let Ok(hit) = Rc::clone(slot).downcast::<T>() {
                return hit;
            }
        }

        let fresh = Rc::new(compute());
        self.slots
            .borrow_mut()
            .insert(key, Rc::clone(&fresh) as Rc<dyn Any>);
        fresh
    }

    #[must_use]
    pub fn contains(&self, key: &'static str) -> bool {
        self.slots.borrow().contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.borrow().is_empty()
    }
}

impl std::fmt::Debug for Cache {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let slots = self.slots.borrow();
        let mut keys: Vec<&&'static str> = slots.keys().collect();
        keys.sort_unstable();
        write!(f, "Cache{keys:?}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn computes_once_per_key() {
        let cache = Cache::new();
        let mut runs = 0u32;

        let first: Rc<Vec<u32>> = cache.get_or_compute("table", || {
            runs += 1;
            vec![1, 2, 3]
        });
        let again: Rc<Vec<u32>> = cache.get_or_compute("table", || {
            runs += 1;
            vec![]
        });

        assert_eq!(runs, 1);
        assert_eq!(first, again);
        assert!(cache.contains("table"));
    }

    #[test]
    fn instances_are_disjoint() {
        let a = Cache::new();
        let b = Cache::new();

        let _: Rc<u32> = a.get_or_compute("shared-name", || 7);
        assert!(a.contains("shared-name"));
        assert!(!b.contains("shared-name"));
        assert!(b.is_empty());
    }

    #[test]
    fn keys_do_not_collide() {
        let cache = Cache::new();
        let x: Rc<u32> = cache.get_or_compute("x", || 1);
        let y: Rc<u32> = cache.get_or_compute("y", || 2);
        assert_eq!((*x, *y), (1, 2));
        assert_eq!(cache.len(), 2);
    }
}
