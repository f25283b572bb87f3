//! Namespace registration for the script bridge.
//!
//! [`Module`] builds one namespace of bound functions; [`Registry`] installs
//! namespaces under a root object and seals it.

pub mod error;
pub mod module;
pub mod registry;

pub use error::RegistrationError;
pub use module::Module;
pub use registry::Registry;
