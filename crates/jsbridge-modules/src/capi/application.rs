use std::ffi::c_char;

use jsbridge_core::native::{
    CApiCamera, CApiShadingEnvironment, CApiViewport, CApiWindow, CApiWorld, CApiWorldConfig,
    MultipleStringsBuffer, TimeStepPolicy,
};

/// Application lifetime, worlds and platform queries.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct ApplicationCApi {
    pub num_worlds: extern "C" fn() -> u32,
    pub world: extern "C" fn(index: u32) -> *mut CApiWorld,
    pub worlds: extern "C" fn(out_count: *mut u32) -> *const *mut CApiWorld,
    pub new_world: extern "C" fn(config: *mut CApiWorldConfig) -> *mut CApiWorld,
    pub main_world: extern "C" fn() -> *mut CApiWorld,
    pub release_world: extern "C" fn(world: *mut CApiWorld),
    pub render_world: extern "C" fn(
        world: *mut CApiWorld,
        camera: *mut CApiCamera,
        viewport: *mut CApiViewport,
        shading_env: *mut CApiShadingEnvironment,
        window: *mut CApiWindow,
    ),

    pub build: extern "C" fn() -> *const c_char,
    pub platform: extern "C" fn() -> *const c_char,
    pub build_identifier: extern "C" fn() -> *const c_char,
    pub sysinfo: extern "C" fn() -> *const c_char,

    pub create_viewport: extern "C" fn(world: *mut CApiWorld, template_id: u32) -> *mut CApiViewport,
    pub destroy_viewport: extern "C" fn(world: *mut CApiWorld, viewport: *mut CApiViewport),

    pub time_since_launch: extern "C" fn() -> f64,
    pub sleep: extern "C" fn(milliseconds: u32),
    pub get_time_step_policy: extern "C" fn() -> *const TimeStepPolicy,
    pub quit: extern "C" fn(exit_code: i32),
    /// Fills `buffer` with at most `capacity` argument strings.
    pub argv: extern "C" fn(buffer: *mut MultipleStringsBuffer, capacity: u32),
}
