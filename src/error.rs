//! Errors raised while assembling a [`Bridge`](crate::Bridge).

use thiserror::Error;

use jsbridge_core::PropertyError;
use jsbridge_registry::RegistrationError;

/// Errors that can occur while installing or exposing namespaces.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BridgeError {
    /// A namespace failed to build or install.
    #[error(transparent)]
    Registration(#[from] RegistrationError),

    /// The root object could not be attached to the script global object.
    #[error("cannot expose namespaces as '{name}': {source}")]
    Expose {
        name: String,
        #[source]
        source: PropertyError,
    },
}
