//! Identity minting for capability wiring slots.
//!
//! # Responsibility
//! - Mint opaque, collision-free lookup keys for each wiring slot of a
//!   capability (`impl`, `resolve`, and for composite points `decorate` and
//!   `aggregate`).
//!
//! # Invariants
//! - Two minted identities never compare equal, even when minted from the
//!   same capability name and role.
//! - Minting has no side effect beyond allocation.

use serde::Serialize;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Wiring slot role carried by one minted identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentityRole {
    /// Slot providers register against.
    Impl,
    /// Slot consumers request.
    Resolve,
    /// Slot decorators register against (composite points only).
    Decorate,
    /// Slot an aggregator registers against (composite points only).
    Aggregate,
}

impl IdentityRole {
    /// Stable string id used in labels and log lines.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Impl => "impl",
            Self::Resolve => "resolve",
            Self::Decorate => "decorate",
            Self::Aggregate => "aggregate",
        }
    }
}

/// Opaque, globally-unique lookup key for one wiring slot.
///
/// Equality is driven by the minted token, never by the label: the label is
/// diagnostic metadata derived from the capability name and exists only for
/// logging and snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Identity {
    token: Uuid,
    label: String,
}

impl Identity {
    /// Mints a fresh identity labelled `<name>:<role>`.
    pub fn mint(name: &str, role: IdentityRole) -> Self {
        Self {
            token: Uuid::new_v4(),
            label: format!("{name}:{}", role.as_str()),
        }
    }

    /// Diagnostic label (`<name>:<role>`).
    pub fn label(&self) -> &str {
        self.label.as_str()
    }

    /// Unique token backing equality and hashing.
    pub fn token(&self) -> Uuid {
        self.token
    }
}

impl Display for Identity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.label, self.token)
    }
}
