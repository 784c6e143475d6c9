//! Minimal reference container implementing the install/resolve boundary
//! contract: install-order accumulation per identity, recursive
//! dependency-first construction, no caching.

use plugboard_core::{Descriptor, Identity, ResolveError, Value};

#[derive(Default)]
pub struct Container {
    descriptors: Vec<Descriptor>,
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one descriptor under its target identity. Multiple installs
    /// under the same identity accumulate.
    pub fn install(&mut self, descriptor: Descriptor) {
        self.descriptors.push(descriptor);
    }

    /// Resolves every descriptor targeting `identity`, dependencies first,
    /// returning the produced values in installation order.
    ///
    /// No caching: repeated resolution re-runs every construction function,
    /// which is exactly what the idempotence properties need to observe.
    pub fn resolve(&self, identity: &Identity) -> Result<Vec<Value>, ResolveError> {
        let mut values = Vec::new();
        for descriptor in self
            .descriptors
            .iter()
            .filter(|descriptor| &descriptor.target == identity)
        {
            let mut groups = Vec::with_capacity(descriptor.dependencies.len());
            for dependency in &descriptor.dependencies {
                groups.push(self.resolve(dependency)?);
            }
            values.push((descriptor.construct)(&groups)?);
        }
        Ok(values)
    }
}
