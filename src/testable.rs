//! # TESTABLE BUILD ORCHESTRATION
//!
//! **CORE BUILD PIPELINE WITH STRICT PHASE ORDERING**
//!
//! A build walks three phases, strictly sequential, no re-entry:
//!
//! 1. **CONSTRUCTOR RESOLUTION** - Introspect constructors, select one
//! 2. **INSTANCE CONSTRUCTION** - Resolve each parameter in declaration order, invoke
//! 3. **PROPERTY INJECTION** - Re-scan the built instance for vacant interface
//!    properties, resolve and assign
//!
//! Failure in any phase aborts the whole build; no partial instance escapes.
//! Every build owns its pool, factory, and registry, so parallel builds on
//! separate `Testable` values need no coordination.
//!
//! ## USAGE
//!
//! ```rust
//! use std::sync::Arc;
//! use testable::api::*;
//!
//! trait Clock: Send + Sync {}
//!
//! #[derive(Default)]
//! struct FrozenClock;
//! impl Clock for FrozenClock {}
//!
//! struct Scheduler {
//!     clock: Arc<dyn Clock>,
//! }
//!
//! impl Introspect for Scheduler {
//!     fn constructors() -> Vec<Constructor<Self>> {
//!         vec![Constructor::new(
//!             vec![Param::interface::<Arc<dyn Clock>>()],
//!             |args| {
//!                 Ok(Scheduler {
//!                     clock: arg::<Arc<dyn Clock>>(args, 0)?,
//!                 })
//!             },
//!         )]
//!     }
//! }
//!
//! let mut mocks = MockRegistry::new();
//! mocks.register::<Arc<dyn Clock>>(|| {
//!     let mock = Arc::new(FrozenClock::default());
//!     MockInstance::new(mock.clone() as Arc<dyn Clock>, mock)
//! });
//!
//! let testable = Testable::<Scheduler>::builder()
//!     .mock_factory(mocks)
//!     .build()
//!     .unwrap();
//! assert_eq!(testable.dependencies().len(), 1);
//! ```

use crate::errors::BuildError;
use crate::introspect::{list_constructors, list_injectable_properties, Introspect};
use crate::mock::{MockFactory, MockRegistry};
use crate::resolution::{select_constructor, DependencyRegistry, DependencyResolver};
use crate::supplied::{Supplied, SuppliedPool};
use std::marker::PhantomData;
use tracing::debug;

/// A fully wired test subject: the constructed target instance plus the
/// registry of every dependency resolved while building it.
pub struct Testable<T> {
    instance: T,
    dependencies: DependencyRegistry,
}

impl<T: Introspect> Testable<T> {
    /// Build with no supplied dependencies and the default (empty) mock
    /// factory. Suits targets whose dependencies are all default-constructible.
    pub fn build() -> Result<Self, BuildError> {
        Self::builder().build()
    }

    /// Build with an explicit sequence of supplied dependency objects.
    pub fn with_supplied(
        supplied: impl IntoIterator<Item = Supplied>,
    ) -> Result<Self, BuildError> {
        let mut builder = Self::builder();
        for entry in supplied {
            builder = builder.supply(entry);
        }
        builder.build()
    }

    pub fn builder() -> TestableBuilder<T> {
        TestableBuilder::new()
    }

    pub fn instance(&self) -> &T {
        &self.instance
    }

    pub fn instance_mut(&mut self) -> &mut T {
        &mut self.instance
    }

    /// The full dependency registry for this build.
    pub fn dependencies(&self) -> &DependencyRegistry {
        &self.dependencies
    }

    pub fn into_instance(self) -> T {
        self.instance
    }

    pub fn into_parts(self) -> (T, DependencyRegistry) {
        (self.instance, self.dependencies)
    }
}

/// Configures one build: supplied dependency pool plus mock factory.
pub struct TestableBuilder<T> {
    pool: SuppliedPool,
    mocks: Box<dyn MockFactory>,
    _target: PhantomData<fn() -> T>,
}

impl<T: Introspect> TestableBuilder<T> {
    pub fn new() -> Self {
        Self {
            pool: SuppliedPool::new(),
            mocks: Box::new(MockRegistry::new()),
            _target: PhantomData,
        }
    }

    /// Append a supplied dependency; pool order is match order.
    pub fn supply(mut self, supplied: Supplied) -> Self {
        self.pool.push(supplied);
        self
    }

    /// Replace the default mock factory.
    pub fn mock_factory(mut self, mocks: impl MockFactory + 'static) -> Self {
        self.mocks = Box::new(mocks);
        self
    }

    pub fn build(self) -> Result<Testable<T>, BuildError> {
        let target_type = std::any::type_name::<T>();
        let mut registry = DependencyRegistry::new();
        let resolver = DependencyResolver::new(&self.pool, self.mocks.as_ref());

        // Phase 1: constructor resolution.
        let constructor = select_constructor(list_constructors::<T>())?;

        // Phase 2: parameter resolution in declaration order, then invoke.
        // Order matters: resolution mutates the registry, and pool matches are
        // first-match, not consumed.
        let mut args = Vec::with_capacity(constructor.arity());
        for param in &constructor.params {
            args.push(resolver.resolve(param, &mut registry)?);
        }
        let mut instance = constructor.invoke(&args)?;
        debug!(target_type, "instance constructed");

        // Phase 3: property injection on the built instance.
        for property in list_injectable_properties(&instance) {
            let resolved = resolver.resolve(property.param(), &mut registry)?;
            property.assign(&mut instance, &resolved)?;
            debug!(target_type, property = property.name(), "property injected");
        }

        Ok(Testable {
            instance,
            dependencies: registry,
        })
    }
}

impl<T: Introspect> Default for TestableBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
