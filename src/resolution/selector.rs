use crate::errors::BuildError;
use crate::introspect::Constructor;
use tracing::debug;

/// Choose the constructor that drives instantiation.
///
/// Policy: among parameterized constructors, greatest arity wins; ties break
/// toward the first in the order `Introspect::constructors` returned them
/// (declaration order is explicit data here, so the tie-break is stable).
/// With no parameterized constructor, fall back to the first listed one.
/// No satisfiability check is performed; an unresolvable parameter surfaces
/// later, during resolution.
pub fn select_constructor<T: 'static>(
    mut constructors: Vec<Constructor<T>>,
) -> Result<Constructor<T>, BuildError> {
    if constructors.is_empty() {
        return Err(BuildError::NoAccessibleConstructor {
            type_name: std::any::type_name::<T>(),
        });
    }

    let mut best: Option<(usize, usize)> = None;
    for (index, constructor) in constructors.iter().enumerate() {
        let arity = constructor.arity();
        if arity == 0 {
            continue;
        }
        match best {
            Some((_, best_arity)) if arity <= best_arity => {}
            _ => best = Some((index, arity)),
        }
    }

    let index = best.map(|(index, _)| index).unwrap_or(0);
    debug!(
        target_type = std::any::type_name::<T>(),
        arity = constructors[index].arity(),
        "selected constructor"
    );
    Ok(constructors.swap_remove(index))
}
