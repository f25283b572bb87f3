//! Namespace builders.
//!
//! A [`Module`] collects the functions of one script namespace before it is
//! installed. Functions are either native pointers adapted by the generic
//! call adapter or custom closures over the raw argument list.
//!
//! # Example
//!
//! ```ignore
//! let mut module = Module::new("World");
//! module.register_fn("num_units", api.num_units)?;
//! module.register_native("units", |args| {
//!     let world = args.get::<*mut CApiWorld>(0)?;
//!     ...
//! })?;
//! ```

use rustc_hash::FxHashSet;

use jsbridge_core::{
    ApiHandler, Arguments, NativeError, NativeFn, NativeFunction, PropertyAttributes,
    ScriptObject, ScriptValue,
};

use crate::error::RegistrationError;

/// Functions of one script namespace.
#[derive(Debug)]
pub struct Module {
    name: String,
    functions: Vec<NativeFn>,
    names: FxHashSet<String>,
}

impl Module {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            functions: Vec::new(),
            names: FxHashSet::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn get(&self, name: &str) -> Option<&NativeFn> {
        self.functions.iter().find(|f| f.name() == name)
    }

    /// Registered functions in registration order.
    pub fn functions(&self) -> &[NativeFn] {
        &self.functions
    }

    /// Register a native function pointer.
    pub fn register_fn<F: NativeFunction>(
        &mut self,
        name: &str,
        f: F,
    ) -> Result<(), RegistrationError> {
        self.register(NativeFn::from_function(name, f))
    }

    /// Register a custom binding working on the raw arguments.
    pub fn register_native<F>(&mut self, name: &str, f: F) -> Result<(), RegistrationError>
    where
        F: Fn(&Arguments<'_>) -> Result<ScriptValue, NativeError> + 'static,
    {
        self.register(NativeFn::new(name, f))
    }

    pub fn register(&mut self, native: NativeFn) -> Result<(), RegistrationError> {
        if native.name().is_empty() {
            return Err(RegistrationError::EmptyName("function"));
        }
        if !self.names.insert(native.name().to_owned()) {
            return Err(RegistrationError::DuplicateRegistration {
                name: format!("{}.{}", self.name, native.name()),
                kind: "function",
            });
        }
        self.functions.push(native);
        Ok(())
    }

    /// Build the script namespace object.
    ///
    /// Every function becomes a read-only, non-deletable property.
    pub fn into_namespace(self) -> ScriptObject {
        self.functions.into_iter().fold(ScriptObject::new(), |ns, native| {
            let name = native.name().to_owned();
            ns.with_property(
                &name,
                ApiHandler::new(native).into_function(),
                PropertyAttributes::READ_ONLY | PropertyAttributes::DONT_DELETE,
            )
        })
    }
}
