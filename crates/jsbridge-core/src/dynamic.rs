//! Tagged dynamic values for per-object script data.
//!
//! The engine stores arbitrary script data on units, worlds, levels and
//! cameras as [`DynamicScriptDataItem`]s: a type tag, a payload pointer and a
//! payload size. Script values are converted in priority order:
//!
//! 1. `null` / `undefined` → nil
//! 2. bool → boolean (4-byte int payload)
//! 3. number → number (4-byte float payload)
//! 4. string → string (NUL-terminated, size excludes the NUL)
//! 5. array of 2, 3 or 4 → vector2/3/4
//! 6. id handle → id64
//! 7. pointer or byte handle → pointer
//!
//! Arrays of 16 numbers are not recognized as matrices; like every other
//! shape they are rejected. Payloads are copied into the call's scratch
//! arena and stay valid until the dispatch returns.

use std::ffi::{CStr, c_char, c_void};
use std::mem::size_of;
use std::ptr;

use bumpalo::Bump;
use num_enum::{IntoPrimitive, TryFromPrimitive};
use tracing::error;

use crate::decode::{Arguments, FromArg, alloc_c_str};
use crate::encode::floats_to_script;
use crate::error::{DecodeError, EncodeError};
use crate::handle::{self, OpaqueHandle};
use crate::native::{FloatTuple, Matrix4x4, Vector2, Vector3, Vector4};
use crate::value::ScriptValue;

/// Type tag of a dynamic item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
#[repr(u32)]
pub enum DynamicTag {
    Nil = 0,
    Boolean = 1,
    Number = 3,
    String = 4,
    Vector2 = 5,
    Vector3 = 6,
    Vector4 = 7,
    Matrix4x4 = 8,
    UnitReference = 9,
    Pointer = 10,
    Id64 = 11,
}

impl DynamicTag {
    pub fn name(self) -> &'static str {
        match self {
            DynamicTag::Nil => "nil",
            DynamicTag::Boolean => "boolean",
            DynamicTag::Number => "number",
            DynamicTag::String => "string",
            DynamicTag::Vector2 => "vector2",
            DynamicTag::Vector3 => "vector3",
            DynamicTag::Vector4 => "vector4",
            DynamicTag::Matrix4x4 => "matrix4x4",
            DynamicTag::UnitReference => "unit reference",
            DynamicTag::Pointer => "pointer",
            DynamicTag::Id64 => "id64",
        }
    }
}

/// A tagged value as exchanged with the engine's script data API.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DynamicScriptDataItem {
    pub data_type: u32,
    pub pointer: *const c_void,
    pub size: u32,
}

impl Default for DynamicScriptDataItem {
    fn default() -> Self {
        Self::NIL
    }
}

impl DynamicScriptDataItem {
    pub const NIL: Self = Self {
        data_type: DynamicTag::Nil as u32,
        pointer: ptr::null(),
        size: 0,
    };

    fn with_payload<T: Copy>(tag: DynamicTag, arena: &Bump, value: T) -> Self {
        let payload: &T = arena.alloc(value);
        Self {
            data_type: tag.into(),
            pointer: ptr::from_ref(payload).cast(),
            size: size_of::<T>() as u32,
        }
    }

    pub fn tag(&self) -> Result<DynamicTag, EncodeError> {
        DynamicTag::try_from(self.data_type)
            .map_err(|_| EncodeError::UnsupportedDynamicTag(self.data_type))
    }

    /// Convert a script value, copying any payload into `arena`.
    pub fn from_script(value: &ScriptValue, arena: &Bump) -> Result<Self, DecodeError> {
        let item = match value {
            ScriptValue::Undefined | ScriptValue::Null => Self::NIL,
            ScriptValue::Bool(b) => Self::with_payload(DynamicTag::Boolean, arena, *b as i32),
            ScriptValue::Number(n) => Self::with_payload(DynamicTag::Number, arena, *n as f32),
            ScriptValue::String(s) => {
                let bytes = alloc_c_str(arena, s);
                Self {
                    data_type: DynamicTag::String.into(),
                    pointer: bytes.as_ptr().cast(),
                    size: s.len() as u32,
                }
            }
            ScriptValue::Array(array) => match array.len() {
                2 => Self::vector::<Vector2>(DynamicTag::Vector2, value, arena),
                3 => Self::vector::<Vector3>(DynamicTag::Vector3, value, arena),
                4 => Self::vector::<Vector4>(DynamicTag::Vector4, value, arena),
                _ => return Err(DecodeError::UnsupportedDynamic { actual: "array" }),
            },
            ScriptValue::Object(_) => match handle::handle_of(value) {
                Some(OpaqueHandle::Id(id)) => Self::with_payload(DynamicTag::Id64, arena, *id),
                Some(h) => Self {
                    data_type: DynamicTag::Pointer.into(),
                    pointer: h.as_ptr().cast_const(),
                    size: h.size() as u32,
                },
                None => {
                    return Err(DecodeError::UnsupportedDynamic {
                        actual: value.type_name(),
                    });
                }
            },
            ScriptValue::Function(_) => {
                return Err(DecodeError::UnsupportedDynamic {
                    actual: value.type_name(),
                });
            }
        };
        Ok(item)
    }

    fn vector<T: FloatTuple>(tag: DynamicTag, value: &ScriptValue, arena: &Bump) -> Self {
        let v = T::from_fn(|i| value.get_index(i).double_value() as f32);
        Self::with_payload(tag, arena, v)
    }

    /// Read the payload as `T`.
    ///
    /// # Safety
    ///
    /// `pointer` must reference a live `T`.
    unsafe fn payload<T: Copy>(&self, tag: DynamicTag) -> Result<T, EncodeError> {
        if self.pointer.is_null() {
            return Err(EncodeError::MissingPayload { tag: tag.name() });
        }
        // SAFETY: guaranteed by the caller; engine payloads may be unaligned
        Ok(unsafe { self.pointer.cast::<T>().read_unaligned() })
    }

    /// Convert back to a script value.
    ///
    /// The payload must match the tag, as it does for every item produced by
    /// [`from_script`](Self::from_script) or returned by the engine.
    pub fn to_script(&self) -> Result<ScriptValue, EncodeError> {
        let tag = self.tag().inspect_err(|err| {
            error!(data_type = self.data_type, "{err}");
        })?;
        // SAFETY: each arm reads the payload type its tag promises
        let value = unsafe {
            match tag {
                DynamicTag::Nil => ScriptValue::Undefined,
                DynamicTag::Boolean => ScriptValue::Bool(self.payload::<i32>(tag)? != 0),
                DynamicTag::Number => ScriptValue::from(self.payload::<f32>(tag)?),
                DynamicTag::String => {
                    if self.pointer.is_null() {
                        return Err(EncodeError::MissingPayload { tag: tag.name() });
                    }
                    let s = CStr::from_ptr(self.pointer.cast::<c_char>());
                    ScriptValue::from(s.to_string_lossy().into_owned())
                }
                DynamicTag::Vector2 => floats_to_script(&self.payload::<Vector2>(tag)?),
                DynamicTag::Vector3 => floats_to_script(&self.payload::<Vector3>(tag)?),
                DynamicTag::Vector4 => floats_to_script(&self.payload::<Vector4>(tag)?),
                DynamicTag::Matrix4x4 => floats_to_script(&self.payload::<Matrix4x4>(tag)?),
                DynamicTag::UnitReference => ScriptValue::from(self.payload::<u32>(tag)?),
                DynamicTag::Pointer => {
                    if self.pointer.is_null() {
                        return Err(EncodeError::MissingPayload { tag: tag.name() });
                    }
                    let bytes =
                        std::slice::from_raw_parts(self.pointer.cast::<u8>(), self.size as usize);
                    handle::wrap_bytes(bytes)
                }
                DynamicTag::Id64 => handle::wrap_id(self.payload::<u64>(tag)?),
            }
        };
        Ok(value)
    }
}

impl FromArg for DynamicScriptDataItem {
    fn from_arg(args: &Arguments<'_>, index: usize) -> Result<Self, DecodeError> {
        match args.value(index) {
            Some(value) => Self::from_script(value, args.arena()),
            None => Err(DecodeError::Missing {
                index,
                expected: "DynamicScriptDataItem",
            }),
        }
    }
}

impl FromArg for *const DynamicScriptDataItem {
    fn from_arg(args: &Arguments<'_>, index: usize) -> Result<Self, DecodeError> {
        let item = DynamicScriptDataItem::from_arg(args, index)?;
        Ok(args.alloc(item).cast_const())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::ScriptObject;

    fn round_trip(value: ScriptValue) -> ScriptValue {
        let arena = Bump::new();
        let item = DynamicScriptDataItem::from_script(&value, &arena).unwrap();
        item.to_script().unwrap()
    }

    fn tag_of(value: ScriptValue) -> Result<DynamicTag, DecodeError> {
        let arena = Bump::new();
        DynamicScriptDataItem::from_script(&value, &arena).map(|item| item.tag().unwrap())
    }

    #[test]
    fn classification_order() {
        assert_eq!(tag_of(ScriptValue::Null), Ok(DynamicTag::Nil));
        assert_eq!(tag_of(ScriptValue::Undefined), Ok(DynamicTag::Nil));
        assert_eq!(tag_of(true.into()), Ok(DynamicTag::Boolean));
        assert_eq!(tag_of(3.0.into()), Ok(DynamicTag::Number));
        assert_eq!(tag_of("s".into()), Ok(DynamicTag::String));
        assert_eq!(tag_of([1.0, 2.0].into()), Ok(DynamicTag::Vector2));
        assert_eq!(tag_of([1.0, 2.0, 3.0].into()), Ok(DynamicTag::Vector3));
        assert_eq!(tag_of([1.0; 4].into()), Ok(DynamicTag::Vector4));
        assert_eq!(tag_of(handle::wrap_id(5)), Ok(DynamicTag::Id64));
        assert_eq!(tag_of(handle::wrap_bytes(&[1, 2])), Ok(DynamicTag::Pointer));
    }

    #[test]
    fn unsupported_kinds() {
        assert_eq!(
            tag_of([1.0; 16].into()),
            Err(DecodeError::UnsupportedDynamic { actual: "array" })
        );
        assert_eq!(
            tag_of(ScriptObject::new().into()),
            Err(DecodeError::UnsupportedDynamic { actual: "object" })
        );
    }

    #[test]
    fn numbers_narrow_to_f32() {
        let arena = Bump::new();
        let item = DynamicScriptDataItem::from_script(&0.1.into(), &arena).unwrap();
        assert_eq!(item.size, 4);
        assert_eq!(item.to_script(), Ok(ScriptValue::from(0.1f32)));
    }

    #[test]
    fn scalar_payloads_live_behind_the_pointer() {
        let arena = Bump::new();
        let flag = DynamicScriptDataItem::from_script(&true.into(), &arena).unwrap();
        let id = DynamicScriptDataItem::from_script(&handle::wrap_id(0x1234), &arena).unwrap();

        assert!(arena.allocated_bytes() > 0);
        assert_eq!((flag.size, id.size), (4, 8));
        // SAFETY: scalar payloads are arena copies of the declared size
        unsafe {
            assert_eq!(flag.pointer.cast::<i32>().read_unaligned(), 1);
            assert_eq!(id.pointer.cast::<u64>().read_unaligned(), 0x1234);
        }
    }

    #[test]
    fn string_payload_is_nul_terminated() {
        let arena = Bump::new();
        let item = DynamicScriptDataItem::from_script(&"abc".into(), &arena).unwrap();
        assert_eq!(item.size, 3);
        // SAFETY: string payloads are NUL-terminated arena copies
        let s = unsafe { CStr::from_ptr(item.pointer.cast()) };
        assert_eq!(s.to_bytes(), b"abc");
    }

    #[test]
    fn round_trips() {
        assert_eq!(round_trip(ScriptValue::Null), ScriptValue::Undefined);
        assert_eq!(round_trip(false.into()), ScriptValue::Bool(false));
        assert_eq!(round_trip(2.5.into()), ScriptValue::from(2.5));
        assert_eq!(round_trip("key".into()), ScriptValue::from("key"));
        assert_eq!(round_trip([1.0, 2.0, 3.0].into()), ScriptValue::from([1.0, 2.0, 3.0]));
        assert_eq!(handle::id_of(&round_trip(handle::wrap_id(42))), 42);
    }

    #[test]
    fn pointer_items_copy_their_bytes() {
        let source = handle::wrap_bytes(&[9, 8, 7]);
        let back = round_trip(source.clone());
        assert_eq!(handle::size_of(&back), 3);
        assert_ne!(handle::unwrap(&back), handle::unwrap(&source));
    }

    #[test]
    fn unit_reference_and_matrix_from_engine() {
        let unit = 12u32;
        let item = DynamicScriptDataItem {
            data_type: DynamicTag::UnitReference.into(),
            pointer: ptr::from_ref(&unit).cast(),
            size: 4,
        };
        assert_eq!(item.to_script(), Ok(ScriptValue::from(12)));

        let m = Matrix4x4::IDENTITY;
        let item = DynamicScriptDataItem {
            data_type: DynamicTag::Matrix4x4.into(),
            pointer: ptr::from_ref(&m).cast(),
            size: 64,
        };
        assert_eq!(item.to_script().unwrap().array_len(), Some(16));
    }

    #[test]
    fn unknown_tag_is_an_error() {
        let item = DynamicScriptDataItem {
            data_type: 2,
            ..DynamicScriptDataItem::NIL
        };
        assert_eq!(item.to_script(), Err(EncodeError::UnsupportedDynamicTag(2)));
    }

    #[test]
    fn null_payload_is_an_error() {
        let item = DynamicScriptDataItem {
            data_type: DynamicTag::Number.into(),
            ..DynamicScriptDataItem::NIL
        };
        assert_eq!(
            item.to_script(),
            Err(EncodeError::MissingPayload { tag: "number" })
        );
    }

    #[test]
    fn missing_argument_is_an_error() {
        let arena = Bump::new();
        let args = Arguments::new(&[], &arena);
        assert!(args.get::<DynamicScriptDataItem>(0).is_err());
    }
}
