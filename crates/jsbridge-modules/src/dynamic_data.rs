//! `has_data`, `get_data` and `set_data` for objects carrying script data.
//!
//! Every trailing argument after the object (and the value, for `set_data`)
//! is one key of the nested key path.

use std::ffi::c_char;

use jsbridge_core::{Arguments, DecodeError, DynamicScriptDataItem, FromArg, ScriptValue};
use jsbridge_registry::{Module, RegistrationError};

use crate::capi::DynamicScriptDataCApi;

/// Arena array of the C string keys starting at argument `first`.
fn keys(args: &Arguments<'_>, first: usize) -> Result<(u32, *const *const c_char), DecodeError> {
    let keys = (first..args.len())
        .map(|i| args.get::<*const c_char>(i))
        .collect::<Result<Vec<_>, _>>()?;
    Ok((keys.len() as u32, args.alloc_slice(&keys)))
}

/// Add the three data functions for objects of type `T` to `module`.
pub fn bind_dynamic_data<T>(
    module: &mut Module,
    api: &DynamicScriptDataCApi<T>,
) -> Result<(), RegistrationError>
where
    T: FromArg + Copy + 'static,
{
    let has_data = api.has_data;
    module.register_native("has_data", move |args| {
        let object = args.get::<T>(0)?;
        let (num_keys, keys) = keys(args, 1)?;
        Ok(ScriptValue::Bool(has_data(object, num_keys, keys) != 0))
    })?;

    let get_data = api.get_data;
    module.register_native("get_data", move |args| {
        let object = args.get::<T>(0)?;
        let (num_keys, keys) = keys(args, 1)?;
        Ok(get_data(object, num_keys, keys).to_script()?)
    })?;

    let set_data = api.set_data;
    module.register_native("set_data", move |args| {
        let object = args.get::<T>(0)?;
        let value = args.get::<DynamicScriptDataItem>(1)?;
        let (num_keys, keys) = keys(args, 2)?;
        set_data(object, value, num_keys, keys);
        Ok(ScriptValue::Undefined)
    })?;

    Ok(())
}
