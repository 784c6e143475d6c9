//! Pass-through kind: the resolved value is the full implementation sequence.

use crate::descriptor::{value, Descriptor, ResolveError, Value};
use crate::identity::Identity;
use crate::point::{ExtensionPoint, PointCore, PointKind};
use log::debug;

/// Extension point whose consumers receive every registered implementation,
/// in installation order, and decide themselves how to use the sequence.
#[derive(Debug, Clone)]
pub struct PlainPoint {
    core: PointCore,
}

impl PlainPoint {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            core: PointCore::mint(name),
        }
    }
}

impl ExtensionPoint for PlainPoint {
    fn capability(&self) -> &str {
        self.core.name()
    }

    fn kind(&self) -> PointKind {
        PointKind::Plain
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

    /// The resolved value wraps the implementation sequence unchanged as one
    /// `Vec<Value>`. Never errors, whatever the count.
    fn resolver(&self) -> Descriptor {
        let capability = self.core.name().to_string();
        Descriptor::new(
            self.core.resolve_id().clone(),
            vec![self.core.impl_id().clone()],
            move |groups| {
                let implementations = groups.first().cloned().unwrap_or_default();
                debug!(
                    "event=resolve module=point kind=plain capability={} status=ok impl_count={}",
                    capability,
                    implementations.len()
                );
                Ok(value(implementations))
            },
        )
    }
}
