use thiserror::Error;

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("CONSTRUCTOR ERROR: target type '{type_name}' exposes no public constructor")]
    NoAccessibleConstructor { type_name: &'static str },

    #[error("DEPENDENCY ERROR: concrete type '{type_name}' has no default constructor; supply an instance explicitly")]
    MissingDefaultConstructor { type_name: &'static str },

    #[error("DEPENDENCY ERROR: parameter of type '{type_name}' is neither supplied, mockable, nor default-constructible")]
    UnresolvableParameter { type_name: &'static str },

    #[error("DESCRIPTOR ERROR: resolved instance does not downcast to the declared type '{expected}'")]
    InstanceTypeMismatch { expected: &'static str },
}
