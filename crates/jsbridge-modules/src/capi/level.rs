use jsbridge_core::native::{CApiLevel, CApiWorld, Matrix4x4, Oobb, UnitRef, Vector3};

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct LevelCApi {
    pub world: extern "C" fn(level: *mut CApiLevel) -> *mut CApiWorld,
    pub spawn_background: extern "C" fn(level: *mut CApiLevel),
    pub unit_by_index: extern "C" fn(level: *mut CApiLevel, index: u32) -> UnitRef,
    pub unit_index: extern "C" fn(level: *mut CApiLevel, unit: UnitRef) -> u32,
    pub num_units: extern "C" fn(level: *mut CApiLevel) -> u32,
    pub num_nested_levels: extern "C" fn(level: *mut CApiLevel) -> u32,
    pub nested_level: extern "C" fn(level: *mut CApiLevel, index: u32) -> *mut CApiLevel,
    pub random_point_inside_volume: extern "C" fn(level: *mut CApiLevel, volume_id: u32) -> Vector3,
    pub is_point_inside_volume:
        extern "C" fn(level: *mut CApiLevel, volume_id: u32, point: *const Vector3) -> i32,
    pub has_volume: extern "C" fn(level: *mut CApiLevel, volume_id: u32) -> i32,
    pub trigger_event: extern "C" fn(level: *mut CApiLevel, event_id: u32),
    pub trigger_level_loaded: extern "C" fn(level: *mut CApiLevel),
    pub trigger_level_shutdown: extern "C" fn(level: *mut CApiLevel),
    pub trigger_level_update: extern "C" fn(level: *mut CApiLevel),
    pub pose: extern "C" fn(level: *mut CApiLevel) -> Matrix4x4,
    pub r#box: extern "C" fn(level: *mut CApiLevel) -> Oobb,
}
