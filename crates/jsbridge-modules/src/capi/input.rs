use std::ffi::c_char;

use jsbridge_core::native::{CApiInputController, DeadZoneSetting, RumbleParameters, Vector3};

/// Controller enumeration.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct InputCApi {
    pub num_pads: extern "C" fn() -> u32,
    pub num_touch_panels: extern "C" fn() -> u32,
    pub flush_controllers_state: extern "C" fn(),
    pub keyboard: extern "C" fn() -> *mut CApiInputController,
    pub mouse: extern "C" fn() -> *mut CApiInputController,
    pub tablet: extern "C" fn() -> *mut CApiInputController,
    pub touch_panel: extern "C" fn(index: u32) -> *mut CApiInputController,
    pub pad: extern "C" fn(index: u32) -> *mut CApiInputController,
}

/// Operations on one input controller.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct InputControllerCApi {
    pub name: extern "C" fn(controller: *mut CApiInputController) -> *const c_char,
    pub num_buttons: extern "C" fn(controller: *mut CApiInputController) -> u32,
    pub button: extern "C" fn(controller: *mut CApiInputController, id: u32) -> f32,
    pub pressed: extern "C" fn(controller: *mut CApiInputController, id: u32) -> i32,
    pub released: extern "C" fn(controller: *mut CApiInputController, id: u32) -> i32,
    pub any_pressed: extern "C" fn(controller: *mut CApiInputController) -> i32,
    pub any_released: extern "C" fn(controller: *mut CApiInputController) -> i32,
    pub set_down_threshold: extern "C" fn(controller: *mut CApiInputController, threshold: f32),
    pub down_threshold: extern "C" fn(controller: *mut CApiInputController) -> f32,
    pub num_axes: extern "C" fn(controller: *mut CApiInputController) -> u32,
    pub axis: extern "C" fn(
        controller: *mut CApiInputController,
        id: u32,
        dead_zone: *mut DeadZoneSetting,
    ) -> Vector3,
    pub dead_zone: extern "C" fn(
        controller: *mut CApiInputController,
        id: u32,
        out_dead_zone: *mut DeadZoneSetting,
    ),
    pub set_dead_zone: extern "C" fn(
        controller: *mut CApiInputController,
        id: u32,
        dead_zone: *mut DeadZoneSetting,
    ),
    pub set_rumble_enabled: extern "C" fn(controller: *mut CApiInputController, enabled: i32),
    pub num_rumble_motors: extern "C" fn(controller: *mut CApiInputController) -> u32,
    pub set_rumble: extern "C" fn(controller: *mut CApiInputController, motor: u32, value: f32),
    pub rumble_effect: extern "C" fn(
        controller: *mut CApiInputController,
        motor: u32,
        params: *mut RumbleParameters,
    ) -> u32,
    pub stop_rumble_effect:
        extern "C" fn(controller: *mut CApiInputController, motor: u32, effect_id: u32),
    pub is_rumble_effect_playing:
        extern "C" fn(controller: *mut CApiInputController, motor: u32, effect_id: u32) -> i32,
    pub stop_all_rumble_effects: extern "C" fn(controller: *mut CApiInputController, motor: u32),
    pub button_name: extern "C" fn(controller: *mut CApiInputController, id: u32) -> *const c_char,
    pub button_id: extern "C" fn(controller: *mut CApiInputController, name_id: u32) -> u32,
    pub axis_name: extern "C" fn(controller: *mut CApiInputController, id: u32) -> *const c_char,
    pub axis_id: extern "C" fn(controller: *mut CApiInputController, name_id: u32) -> u32,
    pub active: extern "C" fn(controller: *mut CApiInputController) -> i32,
    pub connected: extern "C" fn(controller: *mut CApiInputController) -> i32,
    pub disconnected: extern "C" fn(controller: *mut CApiInputController) -> i32,
}
