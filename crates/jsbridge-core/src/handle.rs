//! Opaque handles: native references carried through script.
//!
//! A native pointer, a 64-bit identifier or a copied byte blob crosses into
//! script as a plain object whose user data is an [`OpaqueHandle`]. Script
//! sees nothing of the representation except the read-only `@id` property on
//! id handles.
//!
//! `Id` and `Pointer` handles are views and never own their referent. A
//! `Bytes` handle owns its copy, which is freed when the last script reference
//! to the wrapping object goes away.
//!
//! # Example
//!
//! ```ignore
//! let value = handle::wrap_pointer(world);
//! assert_eq!(handle::unwrap(&value), world.cast());
//! ```

use std::ffi::c_void;
use std::ptr;

use crate::error::DecodeError;
use crate::value::{PropertyAttributes, ScriptObject, ScriptValue};

/// Property exposing the numeric id of an id handle.
pub const ID_PROPERTY: &str = "@id";

/// The native payload of a wrapped handle.
#[derive(Debug, PartialEq, Eq)]
pub enum OpaqueHandle {
    /// A 64-bit identifier.
    Id(u64),
    /// A pointer owned by the native side.
    Pointer(*mut c_void),
    /// A byte buffer copied at wrap time.
    Bytes(Box<[u8]>),
}

impl OpaqueHandle {
    /// The raw address. Ids are reinterpreted as pointer-sized values.
    pub fn as_ptr(&self) -> *mut c_void {
        match self {
            OpaqueHandle::Id(id) => *id as usize as *mut c_void,
            OpaqueHandle::Pointer(p) => *p,
            OpaqueHandle::Bytes(bytes) => bytes.as_ptr().cast_mut().cast(),
        }
    }

    /// The stored id, or 0 for non-id handles.
    pub fn id(&self) -> u64 {
        match self {
            OpaqueHandle::Id(id) => *id,
            _ => 0,
        }
    }

    /// Length of the owned copy, or 0 for views.
    pub fn size(&self) -> usize {
        match self {
            OpaqueHandle::Bytes(bytes) => bytes.len(),
            _ => 0,
        }
    }

    pub fn is_id(&self) -> bool {
        matches!(self, OpaqueHandle::Id(_))
    }
}

// ============================================================================
// Wrapping
// ============================================================================

/// Wrap a 64-bit identifier.
pub fn wrap_id(id: u64) -> ScriptValue {
    ScriptValue::Object(
        ScriptObject::with_user_data(OpaqueHandle::Id(id)).with_property(
            ID_PROPERTY,
            id as f64,
            PropertyAttributes::READ_ONLY,
        ),
    )
}

/// Wrap a native pointer without taking ownership.
pub fn wrap_pointer<T>(ptr: *mut T) -> ScriptValue {
    ScriptValue::Object(ScriptObject::with_user_data(OpaqueHandle::Pointer(
        ptr.cast(),
    )))
}

/// Wrap an owned copy of `bytes`.
pub fn wrap_bytes(bytes: &[u8]) -> ScriptValue {
    ScriptValue::Object(ScriptObject::with_user_data(OpaqueHandle::Bytes(
        Box::from(bytes),
    )))
}

// ============================================================================
// Unwrapping
// ============================================================================

/// The handle carried by `value`, if it was produced by this module.
pub fn handle_of(value: &ScriptValue) -> Option<&OpaqueHandle> {
    value.as_object()?.user_data::<OpaqueHandle>()
}

/// The handle carried by `value`, failing on any other kind of value.
pub fn try_handle(value: &ScriptValue) -> Result<&OpaqueHandle, DecodeError> {
    handle_of(value).ok_or(DecodeError::NotAUserObject)
}

/// The raw pointer behind `value`, or null.
pub fn unwrap(value: &ScriptValue) -> *mut c_void {
    handle_of(value).map_or(ptr::null_mut(), OpaqueHandle::as_ptr)
}

/// The id behind `value`, or 0.
pub fn id_of(value: &ScriptValue) -> u64 {
    handle_of(value).map_or(0, OpaqueHandle::id)
}

/// The owned byte length behind `value`, or 0.
pub fn size_of(value: &ScriptValue) -> usize {
    handle_of(value).map_or(0, OpaqueHandle::size)
}
