//! Extension-point wiring vocabulary for an external dependency-injection
//! container.
//! This crate is the single source of truth for the composition algebra:
//! given zero or more implementations registered against a named capability,
//! plus optional decorators and an optional aggregator, it decides the single
//! resolved value handed to consumers and enforces per-kind cardinality.

pub mod descriptor;
pub mod identity;
pub mod logging;
pub mod point;

pub use descriptor::{
    value, AggregatorFn, ConstructFn, DecoratorFn, Descriptor, ResolveError, Value,
};
pub use identity::{Identity, IdentityRole};
pub use logging::{default_log_level, init_logging, logging_status};
pub use point::composite::{AbsentBase, CompositePoint};
pub use point::optional::OptionalPoint;
pub use point::plain::PlainPoint;
pub use point::singleton::SingletonPoint;
pub use point::{composite, optional, plain, singleton, ExtensionPoint, PointKind, PointMetadata};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
