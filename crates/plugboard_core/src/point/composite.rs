//! Pipeline-composed kind: aggregated base value folded through decorators.

use crate::descriptor::{value, AggregatorFn, DecoratorFn, Descriptor, ResolveError, Value};
use crate::identity::{Identity, IdentityRole};
use crate::point::{ExtensionPoint, PointCore, PointKind};
use log::{debug, error};

/// Marker value produced when a composite capability resolves with zero
/// implementations and no aggregator. Decorators still fold over it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AbsentBase;

/// Extension point composing N providers, any number of decorators, and an
/// optional aggregator into one resolved value.
///
/// Base selection: the first installed aggregator receives the full
/// implementation sequence; without one, the base is the first installed
/// implementation, or [`AbsentBase`] when there is none. Decorators then
/// wrap the base in installation order, first installed innermost.
#[derive(Debug, Clone)]
pub struct CompositePoint {
    core: PointCore,
    decorate_id: Identity,
    aggregate_id: Identity,
}

impl CompositePoint {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        let core = PointCore::mint(name);
        let decorate_id = Identity::mint(core.name(), IdentityRole::Decorate);
        let aggregate_id = Identity::mint(core.name(), IdentityRole::Aggregate);
        Self {
            core,
            decorate_id,
            aggregate_id,
        }
    }

    /// Identity decorators register against.
    pub fn decorate_identity(&self) -> &Identity {
        &self.decorate_id
    }

    /// Identity an aggregator registers against.
    pub fn aggregate_identity(&self) -> &Identity {
        &self.aggregate_id
    }

    /// Builds one decorator descriptor targeting the decorate slot.
    ///
    /// The construction function receives one resolved group per dependency
    /// and returns the wrapping transform applied at resolve time.
    pub fn decorator<F>(&self, dependencies: Vec<Identity>, construct: F) -> Descriptor
    where
        F: Fn(&[Vec<Value>]) -> Result<DecoratorFn, ResolveError> + Send + Sync + 'static,
    {
        debug!(
            "event=decorator_built module=point capability={} dependency_count={}",
            self.core.name(),
            dependencies.len()
        );
        Descriptor::new(self.decorate_id.clone(), dependencies, move |groups| {
            Ok(value(construct(groups)?))
        })
    }

    /// Builds one aggregator descriptor targeting the aggregate slot.
    ///
    /// The construction function returns the combining transform that turns
    /// the full implementation sequence into the base value.
    pub fn aggregator<F>(&self, dependencies: Vec<Identity>, construct: F) -> Descriptor
    where
        F: Fn(&[Vec<Value>]) -> Result<AggregatorFn, ResolveError> + Send + Sync + 'static,
    {
        debug!(
            "event=aggregator_built module=point capability={} dependency_count={}",
            self.core.name(),
            dependencies.len()
        );
        Descriptor::new(self.aggregate_id.clone(), dependencies, move |groups| {
            Ok(value(construct(groups)?))
        })
    }
}

impl ExtensionPoint for CompositePoint {
    fn capability(&self) -> &str {
        self.core.name()
    }

    fn kind(&self) -> PointKind {
        PointKind::Composite
    }

    fn impl_identity(&self) -> &Identity {
        self.core.impl_id()
    }

    fn resolve_identity(&self) -> &Identity {
        self.core.resolve_id()
    }

    fn identities(&self) -> Vec<Identity> {
        vec![
            self.core.impl_id().clone(),
            self.core.resolve_id().clone(),
            self.decorate_id.clone(),
            self.aggregate_id.clone(),
        ]
    }

    fn provider<F>(&self, dependencies: Vec<Identity>, construct: F) -> Descriptor
    where
        F: Fn(&[Vec<Value>]) -> Result<Value, ResolveError> + Send + Sync + 'static,
    {
        self.core.provider(dependencies, construct)
    }

    /// Never raises cardinality errors; zero implementations without an
    /// aggregator yield [`AbsentBase`] rather than failing.
    fn resolver(&self) -> Descriptor {
        let capability = self.core.name().to_string();
        Descriptor::new(
            self.core.resolve_id().clone(),
            vec![
                self.core.impl_id().clone(),
                self.decorate_id.clone(),
                self.aggregate_id.clone(),
            ],
            move |groups| {
                let implementations = groups.first().cloned().unwrap_or_default();
                let decorators = groups.get(1).cloned().unwrap_or_default();
                let aggregators = groups.get(2).cloned().unwrap_or_default();

                // First installed aggregator wins; extras are ignored.
                let base: Value = match aggregators.first() {
                    Some(slot) => {
                        let aggregate = downcast_slot::<AggregatorFn>(
                            slot,
                            &capability,
                            IdentityRole::Aggregate,
                        )?;
                        aggregate.apply(&implementations)
                    }
                    None => match implementations.first().cloned() {
                        Some(first) => first,
                        None => value(AbsentBase),
                    },
                };

                let mut resolved = base;
                for slot in &decorators {
                    let decorate =
                        downcast_slot::<DecoratorFn>(slot, &capability, IdentityRole::Decorate)?;
                    resolved = decorate.apply(resolved);
                }

                debug!(
                    "event=resolve module=point kind=composite capability={} status=ok impl_count={} decorator_count={} aggregated={}",
                    capability,
                    implementations.len(),
                    decorators.len(),
                    !aggregators.is_empty()
                );
                Ok(resolved)
            },
        )
    }
}

fn downcast_slot<'a, T: 'static>(
    slot: &'a Value,
    capability: &str,
    role: IdentityRole,
) -> Result<&'a T, ResolveError> {
    slot.downcast_ref::<T>().ok_or_else(|| {
        error!(
            "event=resolve module=point kind=composite capability={} status=error slot={}",
            capability,
            role.as_str()
        );
        ResolveError::InvalidSlotValue {
            capability: capability.to_string(),
            slot: role,
        }
    })
}
