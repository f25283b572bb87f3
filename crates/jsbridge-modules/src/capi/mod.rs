//! Function tables of the engine's C API.
//!
//! The engine hands the plugin one [`ScriptApi`] at load time. Every table is
//! a `#[repr(C)]` struct of `extern "C"` function pointers and is copied into
//! the namespace bindings that use it.

mod application;
mod camera;
mod dynamic_data;
mod gui;
mod input;
mod level;
mod unit;
mod window;
mod world;

pub use application::ApplicationCApi;
pub use camera::CameraCApi;
pub use dynamic_data::DynamicScriptDataCApi;
pub use gui::GuiCApi;
pub use input::{InputCApi, InputControllerCApi};
pub use level::LevelCApi;
pub use unit::UnitCApi;
pub use window::WindowCApi;
pub use world::WorldCApi;

use jsbridge_core::native::{CApiCamera, CApiLevel, CApiWorld, UnitRef};

/// Every table the script bindings call into.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct ScriptApi {
    pub application: ApplicationCApi,
    pub world: WorldCApi,
    pub unit: UnitCApi,
    pub camera: CameraCApi,
    pub window: WindowCApi,
    pub level: LevelCApi,
    pub input: InputCApi,
    pub input_controller: InputControllerCApi,
    pub gui: GuiCApi,
    pub unit_data: DynamicScriptDataCApi<UnitRef>,
    pub world_data: DynamicScriptDataCApi<*mut CApiWorld>,
    pub level_data: DynamicScriptDataCApi<*mut CApiLevel>,
    pub camera_data: DynamicScriptDataCApi<*mut CApiCamera>,
}
