//! Extension-point kinds and their resolution policies.
//!
//! # Responsibility
//! - Mint per-capability identity sets and build container descriptors.
//! - Contribute one resolution policy per kind: plain (pass-through),
//!   optional (0..1), singleton (exactly 1), composite (pipeline-composed).
//!
//! # Invariants
//! - Kind instances are immutable after construction and hold no
//!   resolved-value state.
//! - Descriptor building is pure; policies run only when the container
//!   resolves the resolver descriptor's identity.

pub mod composite;
pub mod optional;
pub mod plain;
pub mod singleton;

use crate::descriptor::{Descriptor, ResolveError, Value};
use crate::identity::{Identity, IdentityRole};
use log::debug;
use serde::Serialize;

use self::composite::CompositePoint;
use self::optional::OptionalPoint;
use self::plain::PlainPoint;
use self::singleton::SingletonPoint;

/// Kind tag carried by diagnostics snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PointKind {
    Plain,
    Optional,
    Singleton,
    Composite,
}

impl PointKind {
    /// Stable string id used in snapshots and log lines.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Optional => "optional",
            Self::Singleton => "singleton",
            Self::Composite => "composite",
        }
    }
}

/// Serializable wiring snapshot for one capability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PointMetadata {
    /// Capability name the point wires.
    pub capability: String,
    /// Kind tag.
    pub kind: PointKind,
    /// Every identity minted for this point, impl/resolve first.
    pub identities: Vec<Identity>,
}

/// Shared name and identity state behind every kind.
#[derive(Debug, Clone)]
pub(crate) struct PointCore {
    name: String,
    impl_id: Identity,
    resolve_id: Identity,
}

impl PointCore {
    pub(crate) fn mint(name: impl Into<String>) -> Self {
        let name = name.into();
        let impl_id = Identity::mint(&name, IdentityRole::Impl);
        let resolve_id = Identity::mint(&name, IdentityRole::Resolve);
        Self {
            name,
            impl_id,
            resolve_id,
        }
    }

    pub(crate) fn name(&self) -> &str {
        self.name.as_str()
    }

    pub(crate) fn impl_id(&self) -> &Identity {
        &self.impl_id
    }

    pub(crate) fn resolve_id(&self) -> &Identity {
        &self.resolve_id
    }

    /// Builds one provider descriptor targeting the impl slot.
    pub(crate) fn provider<F>(&self, dependencies: Vec<Identity>, construct: F) -> Descriptor
    where
        F: Fn(&[Vec<Value>]) -> Result<Value, ResolveError> + Send + Sync + 'static,
    {
        debug!(
            "event=provider_built module=point capability={} dependency_count={}",
            self.name,
            dependencies.len()
        );
        Descriptor::new(self.impl_id.clone(), dependencies, construct)
    }
}

/// Common surface shared by all four extension-point kinds.
///
/// Composite points additionally expose `decorator`/`aggregator` builders as
/// inherent methods; the other kinds have no decorate/aggregate slots at all.
pub trait ExtensionPoint {
    /// Capability name this point wires.
    fn capability(&self) -> &str;

    /// Kind tag.
    fn kind(&self) -> PointKind;

    /// Identity providers register against.
    fn impl_identity(&self) -> &Identity;

    /// Identity consumers request.
    fn resolve_identity(&self) -> &Identity;

    /// Every identity minted for this point.
    fn identities(&self) -> Vec<Identity>;

    /// Builds one provider descriptor targeting the impl slot.
    ///
    /// `dependencies` may reference other capabilities' identities; the
    /// construction function receives one resolved group per dependency, in
    /// order, and returns the implementation value.
    fn provider<F>(&self, dependencies: Vec<Identity>, construct: F) -> Descriptor
    where
        F: Fn(&[Vec<Value>]) -> Result<Value, ResolveError> + Send + Sync + 'static,
        Self: Sized;

    /// Builds the resolver descriptor applying this kind's policy.
    ///
    /// # Contract
    /// - Installed exactly once per capability.
    /// - Deterministic and idempotent for a fixed installed set.
    fn resolver(&self) -> Descriptor;

    /// Serializable wiring snapshot for diagnostics.
    fn metadata(&self) -> PointMetadata {
        PointMetadata {
            capability: self.capability().to_string(),
            kind: self.kind(),
            identities: self.identities(),
        }
    }
}

/// Creates a pass-through extension point: consumers receive the full
/// implementation sequence, any count allowed.
pub fn plain(name: impl Into<String>) -> PlainPoint {
    PlainPoint::new(name)
}

/// Creates an at-most-one extension point: consumers receive an empty or
/// single-element carrier.
pub fn optional(name: impl Into<String>) -> OptionalPoint {
    OptionalPoint::new(name)
}

/// Creates an exactly-one extension point.
pub fn singleton(name: impl Into<String>) -> SingletonPoint {
    SingletonPoint::new(name)
}

/// Creates a pipeline-composed extension point with decorate and aggregate
/// slots.
pub fn composite(name: impl Into<String>) -> CompositePoint {
    CompositePoint::new(name)
}
