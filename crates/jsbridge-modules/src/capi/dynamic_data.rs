use std::ffi::c_char;

use jsbridge_core::DynamicScriptDataItem;

/// Per-object script data keyed by a path of string keys.
///
/// `T` is the object the data hangs off: a unit reference, world, level or
/// camera pointer.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct DynamicScriptDataCApi<T> {
    pub set_data: extern "C" fn(
        object: T,
        value: DynamicScriptDataItem,
        num_keys: u32,
        keys: *const *const c_char,
    ),
    pub has_data: extern "C" fn(object: T, num_keys: u32, keys: *const *const c_char) -> i32,
    pub get_data:
        extern "C" fn(object: T, num_keys: u32, keys: *const *const c_char) -> DynamicScriptDataItem,
}
