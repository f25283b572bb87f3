use std::ffi::c_char;

use jsbridge_core::native::{
    CApiGui, CApiLevel, CApiShadingEnvironment, CApiWorld, Matrix4x4, OrphanedParticlePolicy,
    UnitRef,
};

/// Units, levels, particles and rendering state of a world.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct WorldCApi {
    pub spawn_unit: extern "C" fn(
        world: *mut CApiWorld,
        resource_id: u64,
        optional_debug_name: *const c_char,
        transform: *const Matrix4x4,
    ) -> UnitRef,
    pub destroy_unit: extern "C" fn(world: *mut CApiWorld, unit: UnitRef),
    pub num_units: extern "C" fn(world: *mut CApiWorld) -> u32,
    pub unit_by_name: extern "C" fn(world: *mut CApiWorld, name_id: u32) -> UnitRef,
    pub unit_by_id: extern "C" fn(world: *mut CApiWorld, id: u64) -> UnitRef,
    pub unit_by_index: extern "C" fn(world: *mut CApiWorld, index: u32) -> UnitRef,
    pub num_units_by_resource: extern "C" fn(world: *mut CApiWorld, resource_id: u64) -> u32,
    pub units_by_resource: extern "C" fn(
        world: *mut CApiWorld,
        resource_id: u64,
        out_count: *mut u32,
    ) -> *const UnitRef,
    pub link_unit: extern "C" fn(
        world: *mut CApiWorld,
        child: UnitRef,
        child_node: u32,
        parent: UnitRef,
        parent_node: u32,
    ),
    pub unlink_unit: extern "C" fn(world: *mut CApiWorld, child: UnitRef),
    pub update_unit: extern "C" fn(world: *mut CApiWorld, unit: UnitRef),

    pub create_particles:
        extern "C" fn(world: *mut CApiWorld, effect_id: u64, transform: *const Matrix4x4) -> u32,
    pub destroy_particles: extern "C" fn(world: *mut CApiWorld, id: u32),
    pub stop_spawning_particles: extern "C" fn(world: *mut CApiWorld, id: u32),
    pub are_particles_playing: extern "C" fn(world: *mut CApiWorld, id: u32) -> i32,
    pub move_particles: extern "C" fn(world: *mut CApiWorld, id: u32, transform: *const Matrix4x4),
    pub link_particles: extern "C" fn(
        world: *mut CApiWorld,
        id: u32,
        unit: UnitRef,
        node: u32,
        local_pose: *const Matrix4x4,
        orphaned_policy: OrphanedParticlePolicy,
    ),

    pub load_level: extern "C" fn(
        world: *mut CApiWorld,
        resource_id: u64,
        transform: *const Matrix4x4,
    ) -> *mut CApiLevel,
    pub destroy_level: extern "C" fn(world: *mut CApiWorld, level: *mut CApiLevel),
    pub num_levels: extern "C" fn(world: *mut CApiWorld) -> u32,
    pub level: extern "C" fn(world: *mut CApiWorld, index: u32) -> *mut CApiLevel,

    pub update: extern "C" fn(world: *mut CApiWorld, dt: f32),
    pub update_animations: extern "C" fn(world: *mut CApiWorld, dt: f32),
    pub update_scene: extern "C" fn(world: *mut CApiWorld, dt: f32),
    pub delta_time: extern "C" fn(world: *mut CApiWorld) -> f32,
    pub time: extern "C" fn(world: *mut CApiWorld) -> f32,

    pub create_shading_environment:
        extern "C" fn(world: *mut CApiWorld, resource_id: u64) -> *mut CApiShadingEnvironment,
    pub create_default_shading_environment:
        extern "C" fn(world: *mut CApiWorld) -> *mut CApiShadingEnvironment,
    pub destroy_shading_environment:
        extern "C" fn(world: *mut CApiWorld, shading_env: *mut CApiShadingEnvironment),
    pub set_shading_environment: extern "C" fn(
        world: *mut CApiWorld,
        shading_env: *mut CApiShadingEnvironment,
        resource_id: u64,
    ),

    pub create_screen_gui: extern "C" fn(world: *mut CApiWorld) -> *mut CApiGui,
    pub create_world_gui: extern "C" fn(
        world: *mut CApiWorld,
        transform: *const Matrix4x4,
        width: f32,
        height: f32,
    ) -> *mut CApiGui,
    pub destroy_gui: extern "C" fn(world: *mut CApiWorld, gui: *mut CApiGui),

    pub debug_camera_pose: extern "C" fn(world: *mut CApiWorld) -> Matrix4x4,
}
