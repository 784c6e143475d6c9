//! Exactly-one kind: consumers receive the single registered implementation.

use crate::descriptor::{Descriptor, ResolveError, Value};
use crate::identity::Identity;
use crate::point::{ExtensionPoint, PointCore, PointKind};
use log::{debug, error};

/// Extension point requiring exactly one registered implementation.
///
/// Any other count fails resolution with the exactly-one cardinality error
/// naming the capability.
#[derive(Debug, Clone)]
pub struct SingletonPoint {
    core: PointCore,
}

impl SingletonPoint {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            core: PointCore::mint(name),
        }
    }
}

impl ExtensionPoint for SingletonPoint {
    fn capability(&self) -> &str {
        self.core.name()
    }

    fn kind(&self) -> PointKind {
        PointKind::Singleton
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

    /// The resolved value is the single implementation itself, unwrapped.
    fn resolver(&self) -> Descriptor {
        let capability = self.core.name().to_string();
        Descriptor::new(
            self.core.resolve_id().clone(),
            vec![self.core.impl_id().clone()],
            move |groups| {
                let implementations = groups.first().cloned().unwrap_or_default();
                let found = implementations.len();
                let mut iter = implementations.into_iter();
                match (iter.next(), iter.next()) {
                    (Some(single), None) => {
                        debug!(
                            "event=resolve module=point kind=singleton capability={} status=ok",
                            capability
                        );
                        Ok(single)
                    }
                    _ => {
                        error!(
                            "event=resolve module=point kind=singleton capability={} status=error impl_count={}",
                            capability, found
                        );
                        Err(ResolveError::NotExactlyOne {
                            capability: capability.clone(),
                            found,
                        })
                    }
                }
            },
        )
    }
}
