//! Result encoding: native values to script values.
//!
//! [`IntoScript`] is infallible. Every well-typed native result has exactly
//! one script shape:
//!
//! - numbers and bools box directly, `()` becomes `undefined`
//! - `u64` ids and engine object pointers become opaque handles
//! - vectors, quaternions and matrices become flat number arrays in native
//!   storage order
//! - composite structs become plain objects with read-only keys, except the
//!   parameter structs script edits and passes back (window open parameters,
//!   dead zone settings), whose keys are only non-deletable
//!
//! Results borrowed from the engine (C strings, list structs, struct
//! pointers) are read during encoding, which always happens before the call
//! returns to script.

use std::ffi::{CStr, c_char, c_void};

use crate::handle;
use crate::native::*;
use crate::value::{PropertyAttributes, ScriptArray, ScriptObject, ScriptValue};

/// Encode a native value for script.
pub trait IntoScript {
    fn into_script(self) -> ScriptValue;
}

impl IntoScript for ScriptValue {
    fn into_script(self) -> ScriptValue {
        self
    }
}

impl IntoScript for () {
    fn into_script(self) -> ScriptValue {
        ScriptValue::Undefined
    }
}

macro_rules! impl_number_result {
    ($($ty:ty),*) => {
        $(
            impl IntoScript for $ty {
                fn into_script(self) -> ScriptValue {
                    ScriptValue::Number(self as f64)
                }
            }
        )*
    };
}

impl_number_result!(i32, u32, f32, f64);

impl IntoScript for bool {
    fn into_script(self) -> ScriptValue {
        ScriptValue::Bool(self)
    }
}

impl IntoScript for u64 {
    fn into_script(self) -> ScriptValue {
        handle::wrap_id(self)
    }
}

impl IntoScript for String {
    fn into_script(self) -> ScriptValue {
        ScriptValue::from(self)
    }
}

impl IntoScript for &str {
    fn into_script(self) -> ScriptValue {
        ScriptValue::from(self)
    }
}

/// Copy a borrowed engine string. Null reads as the empty string.
pub fn c_str_to_script(s: *const c_char) -> ScriptValue {
    if s.is_null() {
        return ScriptValue::from("");
    }
    // SAFETY: engine strings are NUL-terminated and outlive the call
    let s = unsafe { CStr::from_ptr(s) };
    ScriptValue::from(s.to_string_lossy().into_owned())
}

impl IntoScript for *const c_char {
    fn into_script(self) -> ScriptValue {
        c_str_to_script(self)
    }
}

impl<T: IntoScript> IntoScript for Option<T> {
    fn into_script(self) -> ScriptValue {
        self.map_or(ScriptValue::Undefined, IntoScript::into_script)
    }
}

// ============================================================================
// Geometry
// ============================================================================

/// Number array holding every component of `value`.
pub fn floats_to_script<T: FloatTuple>(value: &T) -> ScriptValue {
    (0..T::LEN)
        .map(|i| ScriptValue::from(value.component(i)))
        .collect::<ScriptArray>()
        .into()
}

fn float_array(values: &[f32]) -> ScriptValue {
    values
        .iter()
        .map(|f| ScriptValue::from(*f))
        .collect::<ScriptArray>()
        .into()
}

macro_rules! impl_float_tuple_result {
    ($($ty:ty),*) => {
        $(
            impl IntoScript for $ty {
                fn into_script(self) -> ScriptValue {
                    floats_to_script(&self)
                }
            }

            impl IntoScript for *const $ty {
                fn into_script(self) -> ScriptValue {
                    // SAFETY: a non-null result points at a live engine value
                    match unsafe { self.as_ref() } {
                        Some(value) => floats_to_script(value),
                        None => ScriptValue::Null,
                    }
                }
            }
        )*
    };
}

impl_float_tuple_result!(Vector2, Vector3, Vector4, Quaternion, Matrix4x4);

// ============================================================================
// Engine objects
// ============================================================================

macro_rules! impl_object_ptr_result {
    ($($ty:ty),*) => {
        $(
            impl IntoScript for *mut $ty {
                fn into_script(self) -> ScriptValue {
                    handle::wrap_pointer(self)
                }
            }

            impl IntoScript for *const $ty {
                fn into_script(self) -> ScriptValue {
                    handle::wrap_pointer(self.cast_mut())
                }
            }
        )*
    };
}

impl_object_ptr_result!(
    c_void,
    u32,
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
    CApiInputController
);

macro_rules! impl_enum_result {
    ($($ty:ty),*) => {
        $(
            impl IntoScript for $ty {
                fn into_script(self) -> ScriptValue {
                    ScriptValue::from(i32::from(self))
                }
            }
        )*
    };
}

impl_enum_result!(
    CameraProjectionType,
    CameraMode,
    DeadZoneMode,
    TimeStepPolicyType,
    WindowKeystrokes,
    AnimationBoneRootMode,
    OrphanedParticlePolicy
);

// ============================================================================
// Composite structs
// ============================================================================

fn object<const N: usize>(
    attributes: PropertyAttributes,
    fields: [(&str, ScriptValue); N],
) -> ScriptValue {
    fields
        .into_iter()
        .fold(ScriptObject::new(), |object, (key, value)| {
            object.with_property(key, value, attributes)
        })
        .into()
}

fn read_only<const N: usize>(fields: [(&str, ScriptValue); N]) -> ScriptValue {
    object(PropertyAttributes::READ_ONLY, fields)
}

fn editable<const N: usize>(fields: [(&str, ScriptValue); N]) -> ScriptValue {
    object(PropertyAttributes::DONT_DELETE, fields)
}

impl IntoScript for LocalTransform {
    fn into_script(self) -> ScriptValue {
        let r = &self.rot;
        read_only([
            ("pos", self.pos.into_script()),
            ("scale", self.scale.into_script()),
            (
                "rot",
                float_array(&[
                    r.x.x, r.x.y, r.x.z, //
                    r.y.x, r.y.y, r.y.z, //
                    r.z.x, r.z.y, r.z.z,
                ]),
            ),
        ])
    }
}

impl IntoScript for *const LocalTransform {
    fn into_script(self) -> ScriptValue {
        // SAFETY: a non-null result points at a live engine value
        unsafe { self.as_ref() }.copied().map_or(ScriptValue::Null, IntoScript::into_script)
    }
}

impl IntoScript for Oobb {
    fn into_script(self) -> ScriptValue {
        read_only([
            ("tm", self.tm.into_script()),
            ("half_ext", self.half_ext.into_script()),
        ])
    }
}

impl IntoScript for TimeStepPolicy {
    fn into_script(self) -> ScriptValue {
        read_only([
            ("type", self.policy_type.into_script()),
            ("frames", self.frames.into_script()),
            ("fps", self.fps.into_script()),
            ("multiplier", self.multiplier.into_script()),
            ("time", self.time.into_script()),
            ("min", self.min.into_script()),
            ("outliers", self.outliers.into_script()),
            ("max", self.max.into_script()),
            ("lerp", self.lerp.into_script()),
        ])
    }
}

impl IntoScript for *const TimeStepPolicy {
    fn into_script(self) -> ScriptValue {
        // SAFETY: a non-null result points at a live engine value
        unsafe { self.as_ref() }.copied().map_or(ScriptValue::Null, IntoScript::into_script)
    }
}

impl IntoScript for MoverFitsAtResult {
    fn into_script(self) -> ScriptValue {
        read_only([
            ("fits", self.fits.into_script()),
            ("pos", self.pos.into_script()),
        ])
    }
}

impl IntoScript for AnimationLayerInfo {
    fn into_script(self) -> ScriptValue {
        read_only([
            ("length", self.length.into_script()),
            ("time", self.t.into_script()),
        ])
    }
}

impl IntoScript for WindowRect {
    fn into_script(self) -> ScriptValue {
        self.pos
            .into_iter()
            .map(ScriptValue::from)
            .collect::<ScriptArray>()
            .into()
    }
}

impl IntoScript for WindowOpenParameter {
    fn into_script(self) -> ScriptValue {
        editable([
            ("x", self.x.into_script()),
            ("y", self.y.into_script()),
            ("width", self.width.into_script()),
            ("height", self.height.into_script()),
            ("title", c_str_to_script(self.optional_title)),
            ("parent", handle::wrap_pointer(self.optional_parent)),
            ("explicit_resize", (self.explicit_resize != 0).into_script()),
            ("main_window", (self.main_window != 0).into_script()),
            ("visible", (self.visible != 0).into_script()),
            (
                "pass_key_events_to_parent",
                (self.pass_key_events_to_parent != 0).into_script(),
            ),
            ("layered", (self.layered != 0).into_script()),
        ])
    }
}

impl IntoScript for DeadZoneSetting {
    fn into_script(self) -> ScriptValue {
        editable([
            ("mode", self.mode.into_script()),
            ("size", self.size.into_script()),
        ])
    }
}

// ============================================================================
// Borrowed lists
// ============================================================================

/// Encode `count` items starting at `items`.
///
/// # Safety
///
/// `items` must be null or point at `count` initialized values.
pub unsafe fn list_to_script<T: Copy + IntoScript>(items: *const T, count: usize) -> ScriptValue {
    if items.is_null() || count == 0 {
        return ScriptValue::Array(ScriptArray::new());
    }
    // SAFETY: guaranteed by the caller
    let items = unsafe { std::slice::from_raw_parts(items, count) };
    items
        .iter()
        .map(|item| item.into_script())
        .collect::<ScriptArray>()
        .into()
}

impl IntoScript for Vector3Array {
    fn into_script(self) -> ScriptValue {
        // SAFETY: the engine returns `count` vectors at `v`
        unsafe { list_to_script(self.v, self.count as usize) }
    }
}

impl IntoScript for AnimationStates {
    fn into_script(self) -> ScriptValue {
        // SAFETY: the engine returns `num_states` ids at `states`
        unsafe { list_to_script(self.states, self.num_states as usize) }
    }
}

impl IntoScript for AnimationLayerSeeds {
    fn into_script(self) -> ScriptValue {
        // SAFETY: the engine returns `num_seeds` seeds at `seeds`
        unsafe { list_to_script(self.seeds, self.num_seeds as usize) }
    }
}

impl IntoScript for BoneNames {
    fn into_script(self) -> ScriptValue {
        let names = ScriptArray::new();
        let mut cursor = self.bone_names_list;
        if cursor.is_null() {
            return names.into();
        }
        for _ in 0..self.num_bones {
            // SAFETY: the list holds `num_bones` NUL-terminated names back to back
            let name = unsafe { CStr::from_ptr(cursor) };
            names.push(ScriptValue::from(name.to_string_lossy().into_owned()));
            // SAFETY: the next name starts right after this one's NUL
            cursor = unsafe { cursor.add(name.to_bytes_with_nul().len()) };
        }
        names.into()
    }
}
