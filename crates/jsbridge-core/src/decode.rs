//! Argument decoding: script values to native parameters.
//!
//! [`FromArg`] reads one positional argument and produces the native value a
//! C API function expects. Each native type has a fixed policy for absent and
//! malformed input:
//!
//! | native type | absent | accepted | otherwise |
//! |---|---|---|---|
//! | `i32` | 0 | number, bool as 0/1 | 0 |
//! | `u32` | 0 | number, string hashed to [`IdString32`] | 0 |
//! | `u64` | 0 | number, string hashed to [`IdString64`], id handle | 0 |
//! | `f32`, `f64` | +∞ | number | 0.0 |
//! | `*const c_char` | null | string | error |
//! | `*const Vector3` and friends | null | array of exact length | null |
//! | `Vector3` and friends | error | array of exact length | error |
//! | `Matrix4x4` | error | array of 16 numbers | error |
//! | engine object pointers | null | wrapped handle | error on foreign user data |
//! | engine enums | first variant | valid discriminant | error |
//!
//! Anything that must be addressable (strings, by-pointer vectors, structs)
//! is copied into the call's scratch arena and stays valid until the
//! dispatch returns.

use std::ffi::{c_char, c_void};
use std::ptr;

use bumpalo::Bump;

use crate::error::DecodeError;
use crate::handle;
use crate::hash::{IdString32, IdString64};
use crate::native::*;
use crate::value::ScriptValue;

/// Positional script arguments plus the arena for this call.
#[derive(Clone, Copy)]
pub struct Arguments<'a> {
    values: &'a [ScriptValue],
    arena: &'a Bump,
}

impl<'a> Arguments<'a> {
    pub fn new(values: &'a [ScriptValue], arena: &'a Bump) -> Self {
        Self { values, arena }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &'a [ScriptValue] {
        self.values
    }

    /// Argument `index`, or `None` when fewer arguments were passed.
    pub fn value(&self, index: usize) -> Option<&'a ScriptValue> {
        self.values.get(index)
    }

    pub fn arena(&self) -> &'a Bump {
        self.arena
    }

    /// Decode argument `index` as `T`.
    pub fn get<T: FromArg>(&self, index: usize) -> Result<T, DecodeError> {
        T::from_arg(self, index)
    }

    /// Copy `value` into the arena and return its address.
    pub fn alloc<T: Copy>(&self, value: T) -> *mut T {
        self.arena.alloc(value)
    }

    /// Copy `values` into the arena and return the address of the first one.
    pub fn alloc_slice<T: Copy>(&self, values: &[T]) -> *const T {
        self.arena.alloc_slice_copy(values).as_ptr()
    }

    /// NUL-terminated arena copy of `s`.
    pub fn alloc_c_str(&self, s: &str) -> *const c_char {
        alloc_c_str(self.arena, s).as_ptr().cast()
    }
}

/// NUL-terminated copy of `s` in `arena`. The returned slice includes the NUL.
pub(crate) fn alloc_c_str<'b>(arena: &'b Bump, s: &str) -> &'b [u8] {
    let buf = arena.alloc_slice_fill_copy(s.len() + 1, 0u8);
    buf[..s.len()].copy_from_slice(s.as_bytes());
    buf
}

/// Decode a native parameter from a positional script argument.
pub trait FromArg: Sized {
    fn from_arg(args: &Arguments<'_>, index: usize) -> Result<Self, DecodeError>;
}

// ============================================================================
// Primitives
// ============================================================================

impl FromArg for i32 {
    fn from_arg(args: &Arguments<'_>, index: usize) -> Result<Self, DecodeError> {
        Ok(match args.value(index) {
            None => 0,
            Some(ScriptValue::Bool(b)) => *b as i32,
            Some(v) => v.int_value(),
        })
    }
}

impl FromArg for u32 {
    fn from_arg(args: &Arguments<'_>, index: usize) -> Result<Self, DecodeError> {
        Ok(match args.value(index) {
            None => 0,
            Some(ScriptValue::String(s)) => IdString32::new(s).id(),
            Some(v) => v.uint_value(),
        })
    }
}

impl FromArg for u64 {
    fn from_arg(args: &Arguments<'_>, index: usize) -> Result<Self, DecodeError> {
        Ok(match args.value(index) {
            None => 0,
            Some(ScriptValue::String(s)) => IdString64::new(s).id(),
            Some(ScriptValue::Number(n)) => *n as u64,
            Some(v) if v.is_user_created() => handle::id_of(v),
            Some(_) => 0,
        })
    }
}

impl FromArg for f32 {
    fn from_arg(args: &Arguments<'_>, index: usize) -> Result<Self, DecodeError> {
        Ok(args
            .value(index)
            .map_or(f32::INFINITY, |v| v.double_value() as f32))
    }
}

impl FromArg for f64 {
    fn from_arg(args: &Arguments<'_>, index: usize) -> Result<Self, DecodeError> {
        Ok(args.value(index).map_or(f64::INFINITY, ScriptValue::double_value))
    }
}

impl FromArg for bool {
    fn from_arg(args: &Arguments<'_>, index: usize) -> Result<Self, DecodeError> {
        Ok(args.value(index).is_some_and(ScriptValue::bool_value))
    }
}

impl FromArg for *const c_char {
    fn from_arg(args: &Arguments<'_>, index: usize) -> Result<Self, DecodeError> {
        match args.value(index) {
            None | Some(ScriptValue::Undefined | ScriptValue::Null) => Ok(ptr::null()),
            Some(ScriptValue::String(s)) => Ok(args.alloc_c_str(s)),
            Some(_) => Err(DecodeError::NotAString { index }),
        }
    }
}

// `int*` / `unsigned*` out-params: a wrapped pointer, or a fresh cell
// holding an unsigned number.
macro_rules! impl_cell_ptr_arg {
    ($($ty:ty),*) => {
        $(
            impl FromArg for *mut $ty {
                fn from_arg(args: &Arguments<'_>, index: usize) -> Result<Self, DecodeError> {
                    match args.value(index) {
                        None => Ok(ptr::null_mut()),
                        Some(v) if v.is_user_created() => {
                            Ok(handle::try_handle(v)?.as_ptr().cast())
                        }
                        Some(v) if v.is_uint() => Ok(args.alloc(v.uint_value() as $ty)),
                        Some(_) => Ok(ptr::null_mut()),
                    }
                }
            }
        )*
    };
}

impl_cell_ptr_arg!(i32, u32);

// ============================================================================
// Geometry
// ============================================================================

/// Read an exact-length number array. `None` when the value is not an array.
fn read_floats<T: FloatTuple>(value: &ScriptValue) -> Option<Result<T, usize>> {
    let array = value.as_array()?;
    if array.len() != T::LEN {
        return Some(Err(array.len()));
    }
    Some(Ok(T::from_fn(|i| value.get_index(i).double_value() as f32)))
}

macro_rules! impl_vector_arg {
    ($($ty:ty),*) => {
        $(
            impl FromArg for *const $ty {
                fn from_arg(args: &Arguments<'_>, index: usize) -> Result<Self, DecodeError> {
                    Ok(match args.value(index).and_then(read_floats::<$ty>) {
                        Some(Ok(v)) => args.alloc(v).cast_const(),
                        _ => ptr::null(),
                    })
                }
            }

            impl FromArg for $ty {
                fn from_arg(args: &Arguments<'_>, index: usize) -> Result<Self, DecodeError> {
                    let Some(value) = args.value(index) else {
                        return Err(DecodeError::Missing {
                            index,
                            expected: <$ty as FloatTuple>::NAME,
                        });
                    };
                    match read_floats::<$ty>(value) {
                        Some(Ok(v)) => Ok(v),
                        Some(Err(actual)) => Err(DecodeError::ArrayLength {
                            index,
                            type_name: <$ty as FloatTuple>::NAME,
                            expected: <$ty as FloatTuple>::LEN,
                            actual,
                        }),
                        None => Err(DecodeError::TypeMismatch {
                            index,
                            expected: "array",
                            actual: value.type_name(),
                        }),
                    }
                }
            }
        )*
    };
}

impl_vector_arg!(Vector2, Vector3, Vector4, Quaternion);

impl FromArg for Matrix4x4 {
    fn from_arg(args: &Arguments<'_>, index: usize) -> Result<Self, DecodeError> {
        let Some(value) = args.value(index) else {
            return Err(DecodeError::Missing {
                index,
                expected: "Matrix4x4",
            });
        };
        match read_floats::<Matrix4x4>(value) {
            Some(Ok(m)) => Ok(m),
            _ => Err(DecodeError::NotAMatrix { index }),
        }
    }
}

impl FromArg for *const Matrix4x4 {
    fn from_arg(args: &Arguments<'_>, index: usize) -> Result<Self, DecodeError> {
        Ok(args.alloc(Matrix4x4::from_arg(args, index)?).cast_const())
    }
}

// ============================================================================
// Engine structs
// ============================================================================

impl FromArg for WindowRect {
    fn from_arg(args: &Arguments<'_>, index: usize) -> Result<Self, DecodeError> {
        match args.value(index) {
            Some(value) if value.array_len() == Some(4) => Ok(WindowRect {
                pos: std::array::from_fn(|i| value.get_index(i).int_value()),
            }),
            _ => Err(DecodeError::NotARect { index }),
        }
    }
}

impl FromArg for *mut WindowOpenParameter {
    fn from_arg(args: &Arguments<'_>, index: usize) -> Result<Self, DecodeError> {
        let value = match args.value(index) {
            Some(v @ ScriptValue::Object(_)) => v,
            _ => {
                return Err(DecodeError::NotAnObject {
                    index,
                    type_name: "WindowOpenParameter",
                });
            }
        };

        let mut params = WindowOpenParameter::default();
        let int = |key: &str, slot: &mut i32| {
            if value.has_key(key) {
                *slot = value.get_key(key).int_value();
            }
        };
        int("x", &mut params.x);
        int("y", &mut params.y);
        int("width", &mut params.width);
        int("height", &mut params.height);

        let flag = |key: &str, slot: &mut u32| {
            if value.has_key(key) {
                *slot = value.get_key(key).bool_value() as u32;
            }
        };
        flag("explicit_resize", &mut params.explicit_resize);
        flag("main_window", &mut params.main_window);
        flag("visible", &mut params.visible);
        flag("pass_key_events_to_parent", &mut params.pass_key_events_to_parent);
        flag("layered", &mut params.layered);

        if value.has_key("title") {
            params.optional_title = args.alloc_c_str(&value.get_key("title").string_value());
        }
        if value.has_key("parent") {
            let parent = value.get_key("parent");
            if !parent.is_nullish() {
                params.optional_parent = handle::try_handle(&parent)?.as_ptr().cast();
            }
        }
        Ok(args.alloc(params))
    }
}

/// Plain object argument, or `None` for anything else.
fn plain_object<'a>(args: &Arguments<'a>, index: usize) -> Option<&'a ScriptValue> {
    args.value(index)
        .filter(|v| matches!(v, ScriptValue::Object(_)))
}

impl FromArg for *mut DeadZoneSetting {
    fn from_arg(args: &Arguments<'_>, index: usize) -> Result<Self, DecodeError> {
        let Some(value) = plain_object(args, index) else {
            return Ok(ptr::null_mut());
        };
        let mut setting = DeadZoneSetting::default();
        if value.has_key("mode") {
            setting.mode = value.get_key("mode").int_value();
        }
        if value.has_key("size") {
            setting.size = value.get_key("size").double_value() as f32;
        }
        Ok(args.alloc(setting))
    }
}

impl FromArg for *mut RumbleParameters {
    fn from_arg(args: &Arguments<'_>, index: usize) -> Result<Self, DecodeError> {
        let Some(value) = plain_object(args, index) else {
            return Ok(ptr::null_mut());
        };
        let mut params = RumbleParameters::default();
        let field = |key: &str, slot: &mut f32| {
            if value.has_key(key) {
                *slot = value.get_key(key).double_value() as f32;
            }
        };
        field("frequency", &mut params.frequency);
        field("offset", &mut params.offset);
        field("attack_level", &mut params.attack_level);
        field("sustain_level", &mut params.sustain_level);
        field("attack", &mut params.attack);
        field("release", &mut params.release);
        field("sustain", &mut params.sustain);
        field("decay", &mut params.decay);
        Ok(args.alloc(params))
    }
}

// ============================================================================
// Opaque engine pointers
// ============================================================================

/// Pointer behind a wrapped handle; null for absent, nullish or plain values.
fn object_ptr(args: &Arguments<'_>, index: usize) -> Result<*mut c_void, DecodeError> {
    match args.value(index) {
        Some(v) if v.is_user_created() => Ok(handle::try_handle(v)?.as_ptr()),
        _ => Ok(ptr::null_mut()),
    }
}

macro_rules! impl_object_ptr_arg {
    ($($ty:ty),*) => {
        $(
            impl FromArg for *mut $ty {
                fn from_arg(args: &Arguments<'_>, index: usize) -> Result<Self, DecodeError> {
                    object_ptr(args, index).map(|p| p.cast())
                }
            }

            impl FromArg for *const $ty {
                fn from_arg(args: &Arguments<'_>, index: usize) -> Result<Self, DecodeError> {
                    object_ptr(args, index).map(|p| p.cast_const().cast())
                }
            }
        )*
    };
}

impl_object_ptr_arg!(
    c_void,
    CApiWorld,
    CApiLevel,
    CApiCamera,
    CApiWindow,
    CApiViewport,
    CApiGui,
    CApiMover,
    CApiActor,
    CApiLight,
    CApiMaterial,
    CApiShadingEnvironment,
    CApiWorldConfig,
    CApiLodObject,
    CApiInputController,
    LocalTransform,
    TimeStepPolicy,
    AnimationStates,
    AnimationLayerSeeds
);

// ============================================================================
// Enums
// ============================================================================

macro_rules! impl_enum_arg {
    ($($ty:ty),*) => {
        $(
            impl FromArg for $ty {
                fn from_arg(args: &Arguments<'_>, index: usize) -> Result<Self, DecodeError> {
                    let Some(value) = args.value(index) else {
                        return Ok(<$ty>::default());
                    };
                    let raw = value.int_value();
                    <$ty>::try_from(raw).map_err(|_| DecodeError::InvalidEnum {
                        index,
                        type_name: <$ty as EngineEnum>::NAME,
                        value: raw as i64,
                    })
                }
            }
        )*
    };
}

impl_enum_arg!(
    CameraProjectionType,
    CameraMode,
    DeadZoneMode,
    TimeStepPolicyType,
    WindowKeystrokes,
    AnimationBoneRootMode,
    OrphanedParticlePolicy
);
