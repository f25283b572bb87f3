//! The `fs` namespace.
//!
//! Only `exists` touches the file system. Every other entry is registered so
//! scripts can detect it, and fails with a not-implemented error when
//! called.

use std::fs::File;

use jsbridge_core::{Arguments, DecodeError, NativeError, ScriptValue};
use jsbridge_registry::{Module, RegistrationError};

const UNIMPLEMENTED: [(&str, &str); 11] = [
    ("enumerate", "fs.enumerate"),
    ("lock", "fs.lock"),
    ("unlock", "fs.unlock"),
    ("mkdir", "fs.mkdir"),
    ("unlink", "fs.unlink"),
    ("stats", "fs.stats"),
    ("read", "fs.read"),
    ("write", "fs.write"),
    ("watch", "fs.watch"),
    ("copy", "fs.copy"),
    ("move", "fs.move"),
];

/// `exists(path)`: whether `path` can be opened for reading.
fn exists(args: &Arguments<'_>) -> Result<ScriptValue, NativeError> {
    if args.len() != 1 {
        return Err(NativeError::validation("function takes 1 argument"));
    }
    let path = args
        .value(0)
        .and_then(ScriptValue::as_str)
        .ok_or(DecodeError::NotAString { index: 0 })?;
    Ok(ScriptValue::Bool(File::open(path).is_ok()))
}

pub fn module() -> Result<Module, RegistrationError> {
    let mut module = Module::new("fs");
    module.register_native("exists", exists)?;
    for (name, qualified) in UNIMPLEMENTED {
        module.register_native(name, move |_| Err(NativeError::NotImplemented(qualified)))?;
    }
    Ok(module)
}
