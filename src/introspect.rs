//! # TESTABLE INTROSPECTION MODULE
//!
//! **CORE TYPE INTROSPECTION WITH TRAIT-BASED ARCHITECTURE**
//!
//! Rust has no runtime reflection, so introspection is a capability trait:
//! a target type implements [`Introspect`] and exposes its constructors and
//! injectable properties as data. The resolution machinery consumes those
//! descriptors and never needs to know the target type beyond a generic
//! parameter.
//!
//! ## USAGE
//!
//! ```rust
//! use std::sync::Arc;
//! use testable::api::*;
//!
//! trait Clock: Send + Sync {}
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
//! ```

use crate::errors::BuildError;
use crate::types::{extract, instance_of, SharedInstance, TypeKey};

/// **INTROSPECTION CAPABILITY**
///
/// **MANDATE**: ALL target types built by this crate MUST implement this trait.
/// **GUARANTEE**: Descriptor listing has no side effects on the target.
pub trait Introspect: Sized + 'static {
    /// Every public constructor of the target, in declaration order.
    fn constructors() -> Vec<Constructor<Self>>;

    /// Every public, settable property of abstract/interface type.
    ///
    /// Vacancy is probed per instance after construction; listing here does
    /// not imply the property will be injected.
    fn properties() -> Vec<Property<Self>> {
        Vec::new()
    }
}

/// How a constructor parameter (or property) may be synthesized when it is
/// not supplied by the caller.
#[derive(Debug, Clone, Copy)]
pub enum ParamKind {
    /// Trait-object parameter: delegated to the mock factory.
    Abstract,
    /// Concrete parameter: default-constructed, or a hard failure without one.
    Concrete {
        default: Option<fn() -> SharedInstance>,
    },
}

/// A single required dependency: type key plus synthesis policy.
#[derive(Debug, Clone, Copy)]
pub struct Param {
    pub key: TypeKey,
    pub kind: ParamKind,
}

impl Param {
    /// An abstract/interface requirement, e.g. `Param::interface::<Arc<dyn Clock>>()`.
    ///
    /// `P` is the full parameter type as it appears in the constructor
    /// signature, which is also the type stored in the registry.
    pub fn interface<P: 'static>() -> Self {
        Self {
            key: TypeKey::of::<P>(),
            kind: ParamKind::Abstract,
        }
    }

    /// A concrete requirement with a default constructor.
    ///
    /// The default closure may itself construct nested dependencies; those
    /// resolve against an empty pool by definition.
    pub fn concrete<P: Default + Send + Sync + 'static>() -> Self {
        Self {
            key: TypeKey::of::<P>(),
            kind: ParamKind::Concrete {
                default: Some(|| instance_of(P::default())),
            },
        }
    }

    /// A concrete requirement that cannot be default-constructed. Resolution
    /// fails unless the caller supplies an instance.
    pub fn concrete_without_default<P: Send + Sync + 'static>() -> Self {
        Self {
            key: TypeKey::of::<P>(),
            kind: ParamKind::Concrete { default: None },
        }
    }
}

/// A constructor together with its ordered parameter list.
pub struct Constructor<T> {
    pub params: Vec<Param>,
    factory: Box<dyn Fn(&[SharedInstance]) -> Result<T, BuildError> + Send + Sync>,
}

impl<T> Constructor<T> {
    pub fn new(
        params: Vec<Param>,
        factory: impl Fn(&[SharedInstance]) -> Result<T, BuildError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            params,
            factory: Box::new(factory),
        }
    }

    /// A zero-parameter constructor.
    pub fn parameterless(make: impl Fn() -> T + Send + Sync + 'static) -> Self {
        Self {
            params: Vec::new(),
            factory: Box::new(move |_| Ok(make())),
        }
    }

    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// Invoke with resolved arguments, one per parameter, in declaration order.
    pub fn invoke(&self, args: &[SharedInstance]) -> Result<T, BuildError> {
        (self.factory)(args)
    }
}

/// A public settable property of abstract/interface type, with a vacancy
/// probe and an assignment path into the target.
pub struct Property<T> {
    name: &'static str,
    param: Param,
    vacant: fn(&T) -> bool,
    assign: Box<dyn Fn(&mut T, &SharedInstance) -> Result<(), BuildError> + Send + Sync>,
}

impl<T: 'static> Property<T> {
    /// Describe an `Option`-holding interface property.
    ///
    /// `P` is the stored value type (e.g. `Arc<dyn Trait>`); the property is
    /// injectable only while `vacant` reports the field unset.
    pub fn interface<P: Clone + Send + Sync + 'static>(
        name: &'static str,
        vacant: fn(&T) -> bool,
        set: fn(&mut T, P),
    ) -> Self {
        Self {
            name,
            param: Param::interface::<P>(),
            vacant,
            assign: Box::new(move |target, instance| {
                let value = extract::<P>(instance).ok_or(BuildError::InstanceTypeMismatch {
                    expected: std::any::type_name::<P>(),
                })?;
                set(target, value);
                Ok(())
            }),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn param(&self) -> &Param {
        &self.param
    }

    pub fn is_vacant(&self, target: &T) -> bool {
        (self.vacant)(target)
    }

    pub fn assign(&self, target: &mut T, instance: &SharedInstance) -> Result<(), BuildError> {
        (self.assign)(target, instance)
    }
}

/// Typed argument extraction for constructor factories.
pub fn arg<P: Clone + 'static>(args: &[SharedInstance], index: usize) -> Result<P, BuildError> {
    args.get(index)
        .and_then(|instance| instance.downcast_ref::<P>())
        .cloned()
        .ok_or(BuildError::InstanceTypeMismatch {
            expected: std::any::type_name::<P>(),
        })
}

/// Enumerate the target's constructors.
pub fn list_constructors<T: Introspect>() -> Vec<Constructor<T>> {
    T::constructors()
}

/// Enumerate properties still unset on a constructed instance.
///
/// Taken after construction on purpose: properties the constructor already
/// populated are filtered out and left untouched.
pub fn list_injectable_properties<T: Introspect>(instance: &T) -> Vec<Property<T>> {
    T::properties()
        .into_iter()
        .filter(|property| property.is_vacant(instance))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    trait Signal: Send + Sync {}

    struct Probe {
        reading: u32,
        signal: Option<Arc<dyn Signal>>,
    }

    impl Introspect for Probe {
        fn constructors() -> Vec<Constructor<Self>> {
            vec![
                Constructor::parameterless(|| Probe {
                    reading: 0,
                    signal: None,
                }),
                Constructor::new(vec![Param::concrete::<u32>()], |args| {
                    Ok(Probe {
                        reading: arg::<u32>(args, 0)?,
                        signal: None,
                    })
                }),
            ]
        }

        fn properties() -> Vec<Property<Self>> {
            vec![Property::interface(
                "signal",
                |p: &Self| p.signal.is_none(),
                |p: &mut Self, v: Arc<dyn Signal>| p.signal = Some(v),
            )]
        }
    }

    #[test]
    fn test_list_constructors_order_and_arity() {
        let ctors = list_constructors::<Probe>();
        assert_eq!(ctors.len(), 2);
        assert_eq!(ctors[0].arity(), 0);
        assert_eq!(ctors[1].arity(), 1);
    }

    #[test]
    fn test_invoke_with_typed_arg() {
        let ctors = list_constructors::<Probe>();
        let built = ctors[1].invoke(&[instance_of(7u32)]).unwrap();
        assert_eq!(built.reading, 7);
    }

    #[test]
    fn test_invoke_wrong_arg_type() {
        let ctors = list_constructors::<Probe>();
        let result = ctors[1].invoke(&[instance_of("seven".to_string())]);
        assert!(matches!(
            result,
            Err(BuildError::InstanceTypeMismatch { .. })
        ));
    }

    #[test]
    fn test_vacant_property_listed() {
        let probe = Probe {
            reading: 1,
            signal: None,
        };
        let properties = list_injectable_properties(&probe);
        assert_eq!(properties.len(), 1);
        assert_eq!(properties[0].name(), "signal");
    }

    #[test]
    fn test_populated_property_filtered_out() {
        struct Constant;
        impl Signal for Constant {}

        let probe = Probe {
            reading: 1,
            signal: Some(Arc::new(Constant)),
        };
        assert!(list_injectable_properties(&probe).is_empty());
    }

    #[test]
    fn test_property_assign_round_trip() {
        struct Constant;
        impl Signal for Constant {}

        let mut probe = Probe {
            reading: 0,
            signal: None,
        };
        let properties = list_injectable_properties(&probe);
        let signal: Arc<dyn Signal> = Arc::new(Constant);

        properties[0]
            .assign(&mut probe, &instance_of(signal.clone()))
            .unwrap();
        assert!(Arc::ptr_eq(probe.signal.as_ref().unwrap(), &signal));
    }

    #[test]
    fn test_property_assign_rejects_wrong_type() {
        let mut probe = Probe {
            reading: 0,
            signal: None,
        };
        let properties = list_injectable_properties(&probe);

        let result = properties[0].assign(&mut probe, &instance_of(5u32));
        assert!(matches!(
            result,
            Err(BuildError::InstanceTypeMismatch { .. })
        ));
        assert!(probe.signal.is_none());
    }

    #[test]
    fn test_concrete_param_carries_default() {
        let param = Param::concrete::<u32>();
        match param.kind {
            ParamKind::Concrete { default: Some(make) } => {
                assert_eq!(extract::<u32>(&make()), Some(0));
            }
            _ => panic!("expected concrete param with default"),
        }
    }
}
