pub use crate::errors::BuildError;
pub use crate::introspect::{
    arg, list_constructors, list_injectable_properties, Constructor, Introspect, Param, ParamKind,
    Property,
};
pub use crate::mock::{MockFactory, MockInstance, MockRegistry};
pub use crate::resolution::{select_constructor, DependencyRegistry, DependencyResolver};
pub use crate::supplied::{Supplied, SuppliedPool};
pub use crate::testable::{Testable, TestableBuilder};
pub use crate::types::{extract, instance_of, SharedInstance, TypeKey};
