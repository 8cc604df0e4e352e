pub mod registry;
pub mod resolver;
pub mod selector;

pub use registry::DependencyRegistry;
pub use resolver::DependencyResolver;
pub use selector::select_constructor;
