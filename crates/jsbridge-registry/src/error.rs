//! Registration errors.

use thiserror::Error;

/// Errors raised while building modules or installing them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// A registration with this name already exists.
    #[error("duplicate registration: {name} already registered as {kind}")]
    DuplicateRegistration {
        /// The name that was duplicated.
        name: String,
        /// What was already registered ("function" or "namespace").
        kind: &'static str,
    },

    /// Function and namespace names must be non-empty.
    #[error("invalid name: empty {0} name")]
    EmptyName(&'static str),

    /// The registry no longer accepts namespaces.
    #[error("registry is sealed - cannot install namespace '{0}'")]
    Sealed(String),
}
