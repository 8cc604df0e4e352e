use crate::types::{instance_of, SharedInstance, TypeKey};
use std::sync::Arc;

/// One caller-supplied dependency, exposed under its own type and any
/// interface bindings the caller declares.
///
/// Rust cannot discover which traits a value implements, so the caller states
/// them with [`Supplied::implements`]; every binding shares the same
/// allocation, preserving object identity across matches.
pub struct Supplied {
    bindings: Vec<(TypeKey, SharedInstance)>,
}

impl Supplied {
    /// Supply a shared object, matched against parameters of type `Arc<T>`.
    pub fn from_arc<T: Send + Sync + 'static>(value: Arc<T>) -> Self {
        Self {
            bindings: vec![(TypeKey::of::<Arc<T>>(), instance_of(value))],
        }
    }

    /// Supply a plain value, matched against by-value parameters of type `T`.
    /// Parameters receive clones of the value rather than shared references.
    pub fn value<T: Clone + Send + Sync + 'static>(value: T) -> Self {
        Self {
            bindings: vec![(TypeKey::of::<T>(), instance_of(value))],
        }
    }

    /// Declare an interface this object satisfies:
    /// `.implements::<dyn Trait>(arc.clone())`.
    pub fn implements<D: ?Sized + Send + Sync + 'static>(mut self, as_interface: Arc<D>) -> Self {
        self.bindings
            .push((TypeKey::of::<Arc<D>>(), instance_of(as_interface)));
        self
    }

    /// First binding satisfying the requested key, if any.
    pub fn find(&self, key: &TypeKey) -> Option<&SharedInstance> {
        self.bindings
            .iter()
            .find(|(bound, _)| bound.matches(key))
            .map(|(_, instance)| instance)
    }
}

/// The ordered sequence of supplied dependencies for one build.
///
/// Scanned front to back on every resolution; matches are not consumed, so a
/// single supplied object may satisfy several compatible parameters.
#[derive(Default)]
pub struct SuppliedPool {
    entries: Vec<Supplied>,
}

impl SuppliedPool {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, supplied: Supplied) {
        self.entries.push(supplied);
    }

    /// First match in pool order wins.
    pub fn find(&self, key: &TypeKey) -> Option<SharedInstance> {
        self.entries
            .iter()
            .find_map(|supplied| supplied.find(key))
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::iter::FromIterator<Supplied> for SuppliedPool {
    fn from_iter<I: IntoIterator<Item = Supplied>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
