//! The `Camera` namespace.

use jsbridge_core::native::CApiCamera;
use jsbridge_registry::{Module, RegistrationError};

use crate::bind_api;
use crate::capi::{CameraCApi, DynamicScriptDataCApi};
use crate::dynamic_data::bind_dynamic_data;

pub fn module(
    api: &CameraCApi,
    data: &DynamicScriptDataCApi<*mut CApiCamera>,
) -> Result<Module, RegistrationError> {
    let mut module = Module::new("Camera");

    bind_api!(module, api, [
        local_position,
        local_rotation,
        local_scale,
        local_pose,
        set_local_position,
        set_local_rotation,
        set_local_scale,
        set_local_pose,
        set_local,
        world_position,
        world_rotation,
        world_pose,
        near_range,
        far_range,
        set_near_range,
        set_far_range,
        vertical_fov,
        set_vertical_fov,
        projection_type,
        set_projection_type,
        set_orthographic_view,
        set_frustum,
        inside_frustum,
        mode,
        set_mode,
        screen_to_world,
    ]);

    bind_dynamic_data(&mut module, data)?;
    Ok(module)
}
