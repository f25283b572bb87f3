//! Root object holding every installed namespace.
//!
//! # Lifecycle
//!
//! - **Registration phase**: modules are installed one by one. Each becomes a
//!   read-only namespace property of the root object.
//! - **Sealed phase**: after [`Registry::seal`] no more namespaces are
//!   accepted. The root object itself is handed to the script environment.

use rustc_hash::FxHashMap;
use tracing::debug;

use jsbridge_core::{PropertyAttributes, ScriptObject};

use crate::error::RegistrationError;
use crate::module::Module;

/// The installed namespaces under one root object.
#[derive(Debug, Default)]
pub struct Registry {
    root: ScriptObject,
    // namespace name -> function count
    namespaces: FxHashMap<String, usize>,
    sealed: bool,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install `module` as a namespace of the root object.
    pub fn install(&mut self, module: Module) -> Result<(), RegistrationError> {
        if self.sealed {
            return Err(RegistrationError::Sealed(module.name().to_owned()));
        }
        if module.name().is_empty() {
            return Err(RegistrationError::EmptyName("namespace"));
        }
        if self.namespaces.contains_key(module.name()) {
            return Err(RegistrationError::DuplicateRegistration {
                name: module.name().to_owned(),
                kind: "namespace",
            });
        }

        let name = module.name().to_owned();
        let count = module.len();
        let namespace = module.into_namespace();
        self.root
            .define(
                &name,
                namespace,
                PropertyAttributes::READ_ONLY | PropertyAttributes::DONT_DELETE,
            )
            .map_err(|_| RegistrationError::DuplicateRegistration {
                name: name.clone(),
                kind: "namespace",
            })?;

        debug!(namespace = %name, functions = count, "installed namespace");
        self.namespaces.insert(name, count);
        Ok(())
    }

    /// Stop accepting namespaces. Sealing twice is a no-op.
    pub fn seal(&mut self) {
        self.sealed = true;
    }

    pub fn is_sealed(&self) -> bool {
        self.sealed
    }

    /// The object exposing every namespace to script.
    pub fn root(&self) -> &ScriptObject {
        &self.root
    }

    pub fn namespace(&self, name: &str) -> Option<ScriptObject> {
        self.root.get(name)?.as_object().cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.namespaces.contains_key(name)
    }

    /// Number of functions installed under `name`.
    pub fn function_count(&self, name: &str) -> Option<usize> {
        self.namespaces.get(name).copied()
    }

    pub fn namespace_count(&self) -> usize {
        self.namespaces.len()
    }
}
