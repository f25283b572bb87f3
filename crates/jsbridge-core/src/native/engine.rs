//! Engine structs and opaque object types exchanged through the C API.

use std::ffi::c_char;
use std::marker::{PhantomData, PhantomPinned};
use std::ptr;

use super::math::{Matrix3x3, Matrix4x4, Vector3};

/// Reference to a unit inside its world.
pub type UnitRef = u32;

// ============================================================================
// Opaque objects
// ============================================================================

macro_rules! opaque_types {
    ($($(#[$meta:meta])* $name:ident),* $(,)?) => {
        $(
            $(#[$meta])*
            #[repr(C)]
            pub struct $name {
                _private: [u8; 0],
                _marker: PhantomData<(*mut u8, PhantomPinned)>,
            }
        )*
    };
}

opaque_types!(
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
    /// One input device: keyboard, mouse, tablet, touch panel or pad.
    CApiInputController,
);

// ============================================================================
// Structs
// ============================================================================

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LocalTransform {
    pub rot: Matrix3x3,
    pub pos: Vector3,
    pub scale: Vector3,
}

/// Oriented bounding box.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Oobb {
    pub tm: Matrix4x4,
    pub half_ext: Vector3,
}

/// Flattened time step policy. Which fields matter depends on `policy_type`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TimeStepPolicy {
    pub policy_type: i32,
    pub frames: i32,
    pub fps: i32,
    pub multiplier: f32,
    pub time: f32,
    pub min: f32,
    pub outliers: i32,
    pub max: f32,
    pub lerp: f32,
}

/// `[x, y, width, height]` in pixels.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WindowRect {
    pub pos: [i32; 4],
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowOpenParameter {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub optional_title: *const c_char,
    pub optional_parent: *mut CApiWindow,
    pub explicit_resize: u32,
    pub main_window: u32,
    pub visible: u32,
    pub pass_key_events_to_parent: u32,
    pub layered: u32,
}

impl Default for WindowOpenParameter {
    fn default() -> Self {
        Self {
            x: 0,
            y: 0,
            width: 0,
            height: 0,
            optional_title: ptr::null(),
            optional_parent: ptr::null_mut(),
            explicit_resize: 0,
            main_window: 0,
            visible: 1,
            pass_key_events_to_parent: 0,
            layered: 0,
        }
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DeadZoneSetting {
    pub mode: i32,
    pub size: f32,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RumbleParameters {
    pub frequency: f32,
    pub offset: f32,
    pub attack_level: f32,
    pub sustain_level: f32,
    pub attack: f32,
    pub release: f32,
    pub sustain: f32,
    pub decay: f32,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MoverFitsAtResult {
    pub fits: i32,
    pub pos: Vector3,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnimationLayerInfo {
    pub length: f32,
    pub t: f32,
}

// Borrowed native lists. The pointers are owned by the engine and valid for
// the duration of the call that returned them.

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector3Array {
    pub v: *const Vector3,
    pub count: u32,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationStates {
    pub states: *const u32,
    pub num_states: u32,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationLayerSeeds {
    pub seeds: *const u32,
    pub num_seeds: u32,
}

/// `num_bones` NUL-terminated names packed back to back.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoneNames {
    pub bone_names_list: *const c_char,
    pub num_bones: u32,
}

/// Caller-provided buffer of string pointers filled by the engine.
#[repr(C)]
#[derive(Debug)]
pub struct MultipleStringsBuffer {
    pub num_strings: u32,
    pub s: *mut *const c_char,
}
