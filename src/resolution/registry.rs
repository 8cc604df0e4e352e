use crate::types::{extract, SharedInstance, TypeKey};
use std::collections::HashMap;

/// Per-build map from required type to the single instance satisfying it.
///
/// At most one entry per type; the first resolution for a type wins and every
/// later need for that exact type reuses the same instance. Constructor
/// parameters and property injection share one registry, which is what makes
/// two collaborators requiring the same interface receive the identical
/// object. Owned by exactly one build and handed to the caller afterwards.
#[derive(Default)]
pub struct DependencyRegistry {
    entries: HashMap<TypeKey, SharedInstance>,
}

impl DependencyRegistry {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn get(&self, key: &TypeKey) -> Option<&SharedInstance> {
        self.entries.get(key)
    }

    /// Record a resolved instance, keeping any existing entry (first wins),
    /// and return the instance that ended up registered.
    pub fn record(&mut self, key: TypeKey, instance: SharedInstance) -> SharedInstance {
        self.entries.entry(key).or_insert(instance).clone()
    }

    pub fn contains(&self, key: &TypeKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Typed lookup for assertions on the finished build, e.g.
    /// `registry.get_as::<Arc<dyn Clock>>()`.
    pub fn get_as<P: Clone + 'static>(&self) -> Option<P> {
        self.entries
            .get(&TypeKey::of::<P>())
            .and_then(|instance| extract::<P>(instance))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&TypeKey, &SharedInstance)> {
        self.entries.iter()
    }
}

impl std::fmt::Debug for DependencyRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set()
            .entries(self.entries.keys().map(|key| key.name()))
            .finish()
    }
}
