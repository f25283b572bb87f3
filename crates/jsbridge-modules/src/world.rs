//! The `World` namespace.

use jsbridge_core::encode::list_to_script;
use jsbridge_core::native::CApiWorld;
use jsbridge_registry::{Module, RegistrationError};

use crate::bind_api;
use crate::capi::{DynamicScriptDataCApi, WorldCApi};
use crate::dynamic_data::bind_dynamic_data;

pub fn module(
    api: &WorldCApi,
    data: &DynamicScriptDataCApi<*mut CApiWorld>,
) -> Result<Module, RegistrationError> {
    let mut module = Module::new("World");

    bind_api!(module, api, [
        spawn_unit,
        destroy_unit,
        num_units,
        unit_by_name,
        unit_by_id,
        unit_by_index,
        num_units_by_resource,
        link_unit,
        unlink_unit,
        update_unit,
        create_particles,
        destroy_particles,
        stop_spawning_particles,
        are_particles_playing,
        move_particles,
        link_particles,
        load_level,
        destroy_level,
        num_levels,
        level,
        update,
        update_animations,
        update_scene,
        delta_time,
        time,
        create_shading_environment,
        create_default_shading_environment,
        destroy_shading_environment,
        set_shading_environment,
        create_screen_gui,
        create_world_gui,
        destroy_gui,
        debug_camera_pose,
    ]);

    let units_by_resource = api.units_by_resource;
    module.register_native("units_by_resource", move |args| {
        let world = args.get::<*mut CApiWorld>(0)?;
        let resource_id = args.get::<u64>(1)?;
        let mut count = 0u32;
        let units = units_by_resource(world, resource_id, &mut count);
        // SAFETY: the engine returns `count` unit references at `units`
        Ok(unsafe { list_to_script(units, count as usize) })
    })?;

    bind_dynamic_data(&mut module, data)?;
    Ok(module)
}
