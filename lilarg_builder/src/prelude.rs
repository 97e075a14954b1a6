//! Traits which, typically, may be imported without concern: `use lilarg::prelude::*`.

/// Behaviour shared by the typed argument handles: registration, value reads, and the alternate keyword/help setters.
// Needs to be imported in order to name the handle bounds, ex: `fn configure<F: Field<'a>>(..)`.
pub use crate::api::Field;

/// Behaviour for the typed argument handles which carry a default value.
pub use crate::api::Defaultable;
