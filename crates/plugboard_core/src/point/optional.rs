//! At-most-one kind: consumers receive an empty or single-element carrier.

use crate::descriptor::{value, Descriptor, ResolveError, Value};
use crate::identity::Identity;
use crate::point::{ExtensionPoint, PointCore, PointKind};
use log::{debug, error};

/// Extension point tolerating zero or one registered implementation.
///
/// More than one implementation fails resolution with the at-most-one
/// cardinality error naming the capability.
#[derive(Debug, Clone)]
pub struct OptionalPoint {
    core: PointCore,
}

impl OptionalPoint {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            core: PointCore::mint(name),
        }
    }
}

impl ExtensionPoint for OptionalPoint {
    fn capability(&self) -> &str {
        self.core.name()
    }

    fn kind(&self) -> PointKind {
        PointKind::Optional
    }

    fn impl_identity(&self) -> &Identity {
        self.core.impl_id()
    }

    fn resolve_identity(&self) -> &Identity {
        self.core.resolve_id()
    }

    fn identities(&self) -> Vec<Identity> {
        vec![self.core.impl_id().clone(), self.core.resolve_id().clone()]
    }

    fn provider<F>(&self, dependencies: Vec<Identity>, construct: F) -> Descriptor
    where
        F: Fn(&[Vec<Value>]) -> Result<Value, ResolveError> + Send + Sync + 'static,
    {
        self.core.provider(dependencies, construct)
    }

    /// The resolved value wraps an `Option<Value>` carrier, never the raw
    /// sequence.
    fn resolver(&self) -> Descriptor {
        let capability = self.core.name().to_string();
        Descriptor::new(
            self.core.resolve_id().clone(),
            vec![self.core.impl_id().clone()],
            move |groups| {
                let implementations = groups.first().cloned().unwrap_or_default();
                if implementations.len() > 1 {
                    error!(
                        "event=resolve module=point kind=optional capability={} status=error impl_count={}",
                        capability,
                        implementations.len()
                    );
                    return Err(ResolveError::TooManyImplementations {
                        capability: capability.clone(),
                        found: implementations.len(),
                    });
                }
                debug!(
                    "event=resolve module=point kind=optional capability={} status=ok impl_count={}",
                    capability,
                    implementations.len()
                );
                Ok(value(implementations.into_iter().next()))
            },
        )
    }
}
