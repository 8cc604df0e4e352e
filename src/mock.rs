use crate::errors::BuildError;
use crate::types::{instance_of, SharedInstance, TypeKey};
use std::collections::HashMap;

/// A synthesized test double: the usable instance plus the underlying mock
/// handle kept for later configuration.
///
/// The core only ever extracts `instance`; the handle stays opaque and is
/// entirely the test author's concern.
pub struct MockInstance {
    pub instance: SharedInstance,
    pub handle: SharedInstance,
}

impl MockInstance {
    pub fn new<I, H>(instance: I, handle: H) -> Self
    where
        I: Send + Sync + 'static,
        H: Send + Sync + 'static,
    {
        Self {
            instance: instance_of(instance),
            handle: instance_of(handle),
        }
    }
}

/// Pluggable mock-creation capability.
///
/// Assumed stateless and reentrant per call; any internal bookkeeping a
/// concrete factory keeps is its own responsibility.
pub trait MockFactory: Send + Sync {
    fn create_mock_instance(&self, key: &TypeKey) -> Result<MockInstance, BuildError>;
}

/// Default [`MockFactory`]: a map of per-type mock constructors registered by
/// the embedding environment.
///
/// Rust cannot synthesize a trait implementation at runtime, so each abstract
/// parameter type that should be mockable gets a constructor registered under
/// its parameter type, e.g.:
///
/// ```rust
/// use std::sync::Arc;
/// use testable::api::*;
///
/// trait Clock: Send + Sync {}
///
/// #[derive(Default)]
/// struct MockClock;
/// impl Clock for MockClock {}
///
/// let mut mocks = MockRegistry::new();
/// mocks.register::<Arc<dyn Clock>>(|| {
///     let mock = Arc::new(MockClock::default());
///     MockInstance::new(mock.clone() as Arc<dyn Clock>, mock)
/// });
/// ```
#[derive(Default)]
pub struct MockRegistry {
    makers: HashMap<TypeKey, Box<dyn Fn() -> MockInstance + Send + Sync>>,
}

impl MockRegistry {
    pub fn new() -> Self {
        Self {
            makers: HashMap::new(),
        }
    }

    /// Register a mock constructor for parameter type `P` (the full type as
    /// it appears in constructor signatures, e.g. `Arc<dyn Clock>`).
    pub fn register<P: ?Sized + 'static>(
        &mut self,
        make: impl Fn() -> MockInstance + Send + Sync + 'static,
    ) {
        self.makers.insert(TypeKey::of::<P>(), Box::new(make));
    }

    pub fn len(&self) -> usize {
        self.makers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.makers.is_empty()
    }
}

impl MockFactory for MockRegistry {
    fn create_mock_instance(&self, key: &TypeKey) -> Result<MockInstance, BuildError> {
        match self.makers.get(key) {
            Some(make) => Ok(make()),
            None => Err(BuildError::UnresolvableParameter {
                type_name: key.name(),
            }),
        }
    }
}
