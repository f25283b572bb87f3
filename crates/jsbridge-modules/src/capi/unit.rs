use std::ffi::c_char;

use jsbridge_core::native::{
    AnimationBoneRootMode, AnimationLayerInfo, AnimationLayerSeeds, AnimationStates, BoneNames,
    CApiActor, CApiLevel, CApiLodObject, CApiMover, CApiWorld, Matrix4x4, MoverFitsAtResult, Oobb, Quaternion,
    UnitRef, Vector3,
};

/// Scene graph, physics, animation and property access of a unit.
///
/// Transform functions take a scene graph node index; node 0 is the root.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct UnitCApi {
    pub local_position: extern "C" fn(unit: UnitRef, index: u32) -> Vector3,
    pub local_rotation: extern "C" fn(unit: UnitRef, index: u32) -> Quaternion,
    pub local_scale: extern "C" fn(unit: UnitRef, index: u32) -> Vector3,
    pub local_pose: extern "C" fn(unit: UnitRef, index: u32) -> Matrix4x4,
    pub set_local_position: extern "C" fn(unit: UnitRef, index: u32, pos: *const Vector3),
    pub set_local_rotation: extern "C" fn(unit: UnitRef, index: u32, rot: *const Quaternion),
    pub set_local_scale: extern "C" fn(unit: UnitRef, index: u32, scale: *const Vector3),
    pub set_local_pose: extern "C" fn(unit: UnitRef, index: u32, pose: *const Matrix4x4),
    pub world_position: extern "C" fn(unit: UnitRef, index: u32) -> Vector3,
    pub world_rotation: extern "C" fn(unit: UnitRef, index: u32) -> Quaternion,
    pub world_pose: extern "C" fn(unit: UnitRef, index: u32) -> Matrix4x4,
    pub teleport_local_position: extern "C" fn(unit: UnitRef, index: u32, pos: *const Vector3),
    pub delta_position: extern "C" fn(unit: UnitRef, index: u32) -> Vector3,

    pub num_actors: extern "C" fn(unit: UnitRef) -> u32,
    pub find_actor: extern "C" fn(unit: UnitRef, name_id: u32) -> u32,
    pub actor: extern "C" fn(unit: UnitRef, index: u32) -> *mut CApiActor,
    pub create_actor: extern "C" fn(unit: UnitRef, index: u32),
    pub destroy_actor: extern "C" fn(unit: UnitRef, index: u32),

    pub num_movers: extern "C" fn(unit: UnitRef) -> u32,
    pub set_mover: extern "C" fn(unit: UnitRef, name_id: u32),
    pub set_mover_to_none: extern "C" fn(unit: UnitRef),
    pub mover: extern "C" fn(unit: UnitRef) -> *mut CApiMover,
    pub mover_fits_at:
        extern "C" fn(unit: UnitRef, name_id: u32, pos: *const Vector3) -> MoverFitsAtResult,

    pub trigger_flow_event: extern "C" fn(unit: UnitRef, event_id: u32),

    pub bones: extern "C" fn(unit: UnitRef) -> BoneNames,
    pub animation_root_mode: extern "C" fn(unit: UnitRef) -> AnimationBoneRootMode,
    pub set_animation_root_mode: extern "C" fn(unit: UnitRef, mode: AnimationBoneRootMode),
    pub crossfade_animation: extern "C" fn(
        unit: UnitRef,
        animation_id: u64,
        layer: u32,
        blend_time: f32,
        looping: i32,
    ) -> u32,
    pub animation_find_variable: extern "C" fn(unit: UnitRef, name_id: u32) -> u32,
    pub animation_get_variable: extern "C" fn(unit: UnitRef, index: u32) -> f32,
    pub animation_set_variable: extern "C" fn(unit: UnitRef, index: u32, value: f32),
    pub animation_get_state: extern "C" fn(unit: UnitRef) -> AnimationStates,
    pub animation_set_state: extern "C" fn(unit: UnitRef, states: *const AnimationStates),
    pub animation_get_seeds: extern "C" fn(unit: UnitRef) -> AnimationLayerSeeds,
    pub animation_set_seeds: extern "C" fn(unit: UnitRef, seeds: *const AnimationLayerSeeds),
    pub animation_layer_info: extern "C" fn(unit: UnitRef, layer: u32) -> AnimationLayerInfo,
    /// Returns non-zero when the curve was found.
    pub animation_get_curve_value: extern "C" fn(
        unit: UnitRef,
        layer: u32,
        curve_id: u32,
        channel: u32,
        out_value: *mut f32,
    ) -> i32,

    pub num_lod_objects: extern "C" fn(unit: UnitRef) -> u32,
    pub find_lod_object: extern "C" fn(unit: UnitRef, name_id: u32) -> u32,
    pub lod_object: extern "C" fn(unit: UnitRef, index: u32) -> *mut CApiLodObject,
    pub num_steps_lod: extern "C" fn(lod: *mut CApiLodObject) -> u32,
    /// Writes the `[min, max]` visibility range of `step` into `out_range`.
    pub lod_step_range: extern "C" fn(lod: *mut CApiLodObject, step: u32, out_range: *mut f32),

    /// Sets the float at the nested key path `keys[..num_keys]`.
    pub set_property: extern "C" fn(unit: UnitRef, value: f32, keys: *const u32, num_keys: u32),
    pub get_property: extern "C" fn(unit: UnitRef, keys: *const u32, num_keys: u32) -> f32,

    pub set_unit_visibility: extern "C" fn(unit: UnitRef, visible: i32),
    pub has_node: extern "C" fn(unit: UnitRef, name_id: u32) -> i32,
    pub node: extern "C" fn(unit: UnitRef, name_id: u32) -> u32,
    pub world: extern "C" fn(unit: UnitRef) -> *mut CApiWorld,
    pub level: extern "C" fn(unit: UnitRef) -> *mut CApiLevel,
    pub is_alive: extern "C" fn(unit: UnitRef) -> i32,
    pub id_in_level: extern "C" fn(unit: UnitRef) -> u32,
    pub r#box: extern "C" fn(unit: UnitRef) -> Oobb,
    pub debug_name: extern "C" fn(unit: UnitRef) -> *const c_char,
    /// Writes the hashed unit name into an 8-byte buffer.
    pub name_hash: extern "C" fn(unit: UnitRef, out_name: *mut c_char),
    /// Returns non-zero on a hit.
    pub mesh_raycast: extern "C" fn(
        unit: UnitRef,
        from: *const Vector3,
        direction: *const Vector3,
        length: f32,
        mask: i32,
        out_distance: *mut f32,
        out_normal_world: *mut Vector3,
    ) -> u32,
    pub mesh_pick_raycast: extern "C" fn(
        unit: UnitRef,
        from: *const Vector3,
        direction: *const Vector3,
        length: f32,
        mask: i32,
        out_distance: *mut f32,
        out_normal_world: *mut Vector3,
        out_best_mesh_index: *mut u32,
        out_best_triangle_index: *mut u32,
    ) -> u32,
    pub mesh_closest_point_raycast: extern "C" fn(
        unit: UnitRef,
        from: *const Vector3,
        direction: *const Vector3,
        length: f32,
        out_best_point_world: *mut Vector3,
        out_distance_along_ray: *mut f32,
        out_distance_to_ray: *mut f32,
    ) -> u32,
}
