//! Descriptor shape and dynamic value plumbing for the external container.
//!
//! # Responsibility
//! - Define the `(target, dependencies, construct)` triple the external
//!   dependency-injection container installs and later resolves.
//! - Define the dynamic value carrier and the typed decorator/aggregator
//!   transform wrappers transported through it.
//!
//! # Invariants
//! - Building a descriptor has no registration side effect.
//! - Construction functions run at container resolve time, never at build
//!   time, and hold no resolved-value state of their own.

use crate::identity::{Identity, IdentityRole};
use std::any::Any;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// Dynamic value carrier the external container traffics in.
pub type Value = Arc<dyn Any + Send + Sync>;

/// Resolve-time construction function.
///
/// Receives one resolved value-group per declared dependency, in declaration
/// order. Each group holds every value produced for that dependency identity
/// (zero, one, or many, depending on how many descriptors share it).
pub type ConstructFn = Arc<dyn Fn(&[Vec<Value>]) -> Result<Value, ResolveError> + Send + Sync>;

/// Wraps a plain Rust value into the dynamic carrier.
pub fn value<T: Any + Send + Sync>(inner: T) -> Value {
    Arc::new(inner)
}

/// Installable wiring unit: "to produce `target`, resolve each of
/// `dependencies` first, then run `construct` with the resolved groups".
///
/// Multiple descriptors may share a target identity; the container collects
/// every value produced for it.
#[derive(Clone)]
pub struct Descriptor {
    /// Identity this descriptor produces values for.
    pub target: Identity,
    /// Upstream identities resolved before `construct` runs, in order.
    pub dependencies: Vec<Identity>,
    /// Construction function invoked by the container at resolve time.
    pub construct: ConstructFn,
}

impl Descriptor {
    /// Packages a target, its dependencies, and a construction function.
    pub fn new<F>(target: Identity, dependencies: Vec<Identity>, construct: F) -> Self
    where
        F: Fn(&[Vec<Value>]) -> Result<Value, ResolveError> + Send + Sync + 'static,
    {
        Self {
            target,
            dependencies,
            construct: Arc::new(construct),
        }
    }
}

impl std::fmt::Debug for Descriptor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Descriptor")
            .field("target", &self.target)
            .field("dependencies", &self.dependencies)
            .finish_non_exhaustive()
    }
}

/// Single-value wrapping transform installed against a composite decorate
/// slot: `(value) -> value'`.
#[derive(Clone)]
pub struct DecoratorFn(Arc<dyn Fn(Value) -> Value + Send + Sync>);

impl DecoratorFn {
    pub fn new<F>(transform: F) -> Self
    where
        F: Fn(Value) -> Value + Send + Sync + 'static,
    {
        Self(Arc::new(transform))
    }

    /// Wraps one already-resolved base value.
    pub fn apply(&self, base: Value) -> Value {
        (self.0)(base)
    }
}

/// Combining transform installed against a composite aggregate slot:
/// `(sequence-of-values) -> value`.
#[derive(Clone)]
pub struct AggregatorFn(Arc<dyn Fn(&[Value]) -> Value + Send + Sync>);

impl AggregatorFn {
    pub fn new<F>(combine: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Self(Arc::new(combine))
    }

    /// Combines the full sequence of already-resolved implementation values.
    pub fn apply(&self, implementations: &[Value]) -> Value {
        (self.0)(implementations)
    }
}

/// Resolution policy failures, named by capability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// Optional points forbid more than one registered implementation.
    TooManyImplementations { capability: String, found: usize },
    /// Singleton points require exactly one registered implementation.
    NotExactlyOne { capability: String, found: usize },
    /// A composite decorate/aggregate slot held a value of the wrong shape.
    InvalidSlotValue {
        capability: String,
        slot: IdentityRole,
    },
}

impl Display for ResolveError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooManyImplementations { capability, found } => write!(
                f,
                "expected at most one implementation for capability `{capability}`, found {found}"
            ),
            Self::NotExactlyOne { capability, found } => write!(
                f,
                "expected exactly one implementation for capability `{capability}`, found {found}"
            ),
            Self::InvalidSlotValue { capability, slot } => write!(
                f,
                "capability `{capability}` holds a value of the wrong shape in its `{}` slot",
                slot.as_str()
            ),
        }
    }
}

impl Error for ResolveError {}
