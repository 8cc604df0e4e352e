use crate::errors::BuildError;
use crate::introspect::{Param, ParamKind};
use crate::mock::MockFactory;
use crate::resolution::registry::DependencyRegistry;
use crate::supplied::SuppliedPool;
use crate::types::SharedInstance;
use tracing::debug;

/// Resolves one required type to the instance that satisfies it.
///
/// Resolution ladder, first match wins:
///   1. an existing registry entry (later requests for a type reuse the first
///      resolution rather than synthesizing a second instance),
///   2. the supplied pool, scanned in order,
///   3. a mock from the factory, for abstract/interface requirements,
///   4. default construction, for concrete requirements.
/// Whatever resolved is recorded into the registry before being returned.
pub struct DependencyResolver<'a> {
    pool: &'a SuppliedPool,
    mocks: &'a dyn MockFactory,
}

impl<'a> DependencyResolver<'a> {
    pub fn new(pool: &'a SuppliedPool, mocks: &'a dyn MockFactory) -> Self {
        Self { pool, mocks }
    }

    pub fn resolve(
        &self,
        param: &Param,
        registry: &mut DependencyRegistry,
    ) -> Result<SharedInstance, BuildError> {
        if let Some(existing) = registry.get(&param.key) {
            debug!(dependency = param.key.name(), "reusing registry entry");
            return Ok(existing.clone());
        }

        if let Some(found) = self.pool.find(&param.key) {
            debug!(dependency = param.key.name(), "using supplied instance");
            return Ok(registry.record(param.key, found));
        }

        let instance = match param.kind {
            ParamKind::Abstract => {
                debug!(dependency = param.key.name(), "synthesizing mock");
                self.mocks.create_mock_instance(&param.key)?.instance
            }
            ParamKind::Concrete {
                default: Some(make),
            } => {
                debug!(dependency = param.key.name(), "default-constructing");
                make()
            }
            ParamKind::Concrete { default: None } => {
                return Err(BuildError::MissingDefaultConstructor {
                    type_name: param.key.name(),
                });
            }
        };

        Ok(registry.record(param.key, instance))
    }
}
