//! # TESTABLE TYPE DEFINITIONS
//!
//! **CRITICAL**: Type descriptors and shared instance handles for dependency resolution
//! **MANDATE**: ALL resolution machinery MUST address dependencies through these types

use std::any::{Any, TypeId};
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// **SHARED INSTANCE HANDLE**
///
/// **PURPOSE**: Single owned instance of a resolved dependency, shared by reference
/// **GUARANTEE**: Cloning the handle never duplicates the underlying object
///
/// Values are stored as the parameter type they satisfy (for example an
/// `Arc<dyn Trait>`, or a `Clone` concrete), so extraction is a downcast plus
/// a clone of that parameter type.
pub type SharedInstance = Arc<dyn Any + Send + Sync>;

/// **TYPE DESCRIPTOR**
///
/// **PURPOSE**: Identifies a required dependency type; key for registry lookup
/// **GUARANTEE**: Identity comparison is by `TypeId`; the fully-qualified name
/// is carried for diagnostics and for name-based supplied-pool matching
#[derive(Debug, Clone, Copy)]
pub struct TypeKey {
    id: TypeId,
    name: &'static str,
}

impl TypeKey {
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// Fully-qualified type name, for diagnostics and error reporting.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Descriptor for `T` carrying a caller-chosen name, standing in for a
    /// same-named type compiled into a different artifact (one compilation
    /// cannot mint two `TypeId`s with one `type_name`).
    #[cfg(test)]
    pub(crate) fn named<T: ?Sized + 'static>(name: &'static str) -> Self {
        Self {
            id: TypeId::of::<T>(),
            name,
        }
    }

    /// Structural-or-exact match used when scanning the supplied pool.
    ///
    /// Exact `TypeId` equality wins; an exact fully-qualified-name match is
    /// accepted as a fallback so same-named descriptors produced by separate
    /// instantiations still pair up.
    pub fn matches(&self, other: &TypeKey) -> bool {
        self.id == other.id || self.name == other.name
    }
}

impl PartialEq for TypeKey {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeKey {}

impl Hash for TypeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Wrap a value into a shared instance handle.
pub fn instance_of<T: Send + Sync + 'static>(value: T) -> SharedInstance {
    Arc::new(value)
}

/// Recover a typed clone from a shared instance handle.
///
/// Returns `None` when the handle holds a different type than requested.
pub fn extract<T: Clone + 'static>(instance: &SharedInstance) -> Option<T> {
    instance.downcast_ref::<T>().cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    trait Marker: Send + Sync {}

    #[test]
    fn test_type_key_identity() {
        assert_eq!(TypeKey::of::<u32>(), TypeKey::of::<u32>());
        assert_ne!(TypeKey::of::<u32>(), TypeKey::of::<u64>());
        assert_eq!(
            TypeKey::of::<Arc<dyn Marker>>(),
            TypeKey::of::<Arc<dyn Marker>>()
        );
    }

    #[test]
    fn test_type_key_matches_self() {
        let key = TypeKey::of::<String>();
        assert!(key.matches(&TypeKey::of::<String>()));
        assert!(!key.matches(&TypeKey::of::<u8>()));
    }

    #[test]
    fn test_matches_same_name_across_distinct_type_ids() {
        // Two descriptors with different identities but one fully-qualified
        // name pair up in pool scans, while identity comparison keeps them
        // apart.
        let local = TypeKey::named::<u32>("vendored::Widget");
        let foreign = TypeKey::named::<u64>("vendored::Widget");

        assert!(local.matches(&foreign));
        assert_ne!(local, foreign);

        let other = TypeKey::named::<u64>("vendored::Gadget");
        assert!(!local.matches(&other));
    }

    #[test]
    fn test_type_key_name() {
        assert!(TypeKey::of::<String>().name().contains("String"));
    }

    #[test]
    fn test_instance_round_trip() {
        let handle = instance_of(41u32);
        assert_eq!(extract::<u32>(&handle), Some(41));
        assert_eq!(extract::<u64>(&handle), None);
    }

    #[test]
    fn test_extract_shares_arc() {
        let original: Arc<String> = Arc::new("shared".to_string());
        let handle = instance_of(original.clone());
        let recovered = extract::<Arc<String>>(&handle).unwrap();
        assert!(Arc::ptr_eq(&original, &recovered));
    }
}
