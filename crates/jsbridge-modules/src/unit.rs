//! The `Unit` namespace.

use std::ffi::c_char;

use jsbridge_core::native::{CApiLodObject, UnitRef, Vector3};
use jsbridge_core::{
    Arguments, IdString32, IntoScript, PropertyAttributes, ScriptObject, ScriptValue,
};
use jsbridge_registry::{Module, RegistrationError};

use crate::bind_api;
use crate::capi::{DynamicScriptDataCApi, UnitCApi};
use crate::dynamic_data::bind_dynamic_data;

/// Size of the buffer `name_hash` writes into.
const NAME_HASH_LEN: usize = 8;

/// Property key path from argument `first` on. Strings are hashed, anything
/// else is read as an unsigned id.
fn property_keys(args: &Arguments<'_>, first: usize) -> Vec<u32> {
    args.values()
        .iter()
        .skip(first)
        .map(|key| match key.as_str() {
            Some(name) => IdString32::new(name).id(),
            None => key.uint_value(),
        })
        .collect()
}

pub fn module(
    api: &UnitCApi,
    data: &DynamicScriptDataCApi<UnitRef>,
) -> Result<Module, RegistrationError> {
    let mut module = Module::new("Unit");

    bind_api!(module, api, [
        local_position,
        local_rotation,
        local_scale,
        local_pose,
        set_local_position,
        set_local_rotation,
        set_local_scale,
        set_local_pose,
        world_position,
        world_rotation,
        world_pose,
        teleport_local_position,
        delta_position,
        num_actors,
        find_actor,
        actor,
        create_actor,
        destroy_actor,
        num_movers,
        set_mover,
        set_mover_to_none,
        mover,
        mover_fits_at,
        trigger_flow_event,
        bones,
        animation_root_mode,
        set_animation_root_mode,
        crossfade_animation,
        animation_find_variable,
        animation_get_variable,
        animation_set_variable,
        animation_get_state,
        animation_set_state,
        animation_get_seeds,
        animation_set_seeds,
        animation_layer_info,
        num_lod_objects,
        find_lod_object,
        lod_object,
        num_steps_lod,
        set_unit_visibility,
        has_node,
        node,
        world,
        level,
        is_alive,
        id_in_level,
        debug_name,
    ]);
    module.register_fn("box", api.r#box)?;

    let set_property = api.set_property;
    module.register_native("set_property", move |args| {
        let unit = args.get::<UnitRef>(0)?;
        let value = args.get::<f32>(1)?;
        let keys = property_keys(args, 2);
        set_property(unit, value, keys.as_ptr(), keys.len() as u32);
        Ok(ScriptValue::Undefined)
    })?;

    let get_property = api.get_property;
    module.register_native("get_property", move |args| {
        let unit = args.get::<UnitRef>(0)?;
        let keys = property_keys(args, 1);
        Ok(get_property(unit, keys.as_ptr(), keys.len() as u32).into_script())
    })?;

    let name_hash = api.name_hash;
    module.register_native("name_hash", move |args| {
        let unit = args.get::<UnitRef>(0)?;
        let mut out = [0 as c_char; NAME_HASH_LEN];
        name_hash(unit, out.as_mut_ptr());
        let bytes: Vec<u8> = out
            .iter()
            .take_while(|c| **c != 0)
            .map(|c| *c as u8)
            .collect();
        Ok(String::from_utf8_lossy(&bytes).into_owned().into())
    })?;

    let mesh_raycast = api.mesh_raycast;
    module.register_native("mesh_raycast", move |args| {
        let mut distance = 0.0f32;
        let mut normal = Vector3::default();
        let hit = mesh_raycast(
            args.get(0)?,
            args.get(1)?,
            args.get(2)?,
            args.get(3)?,
            args.get(4)?,
            &mut distance,
            &mut normal,
        );
        if hit == 0 {
            return Ok(ScriptValue::Undefined);
        }
        Ok(ScriptObject::new()
            .with_property("distance", distance, PropertyAttributes::READ_ONLY)
            .with_property("normal_world", normal.into_script(), PropertyAttributes::READ_ONLY)
            .into())
    })?;

    let mesh_pick_raycast = api.mesh_pick_raycast;
    module.register_native("mesh_pick_raycast", move |args| {
        let mut distance = 0.0f32;
        let mut normal = Vector3::default();
        let mut mesh = 0u32;
        let mut triangle = 0u32;
        let hit = mesh_pick_raycast(
            args.get(0)?,
            args.get(1)?,
            args.get(2)?,
            args.get(3)?,
            args.get(4)?,
            &mut distance,
            &mut normal,
            &mut mesh,
            &mut triangle,
        );
        if hit == 0 {
            return Ok(ScriptValue::Undefined);
        }
        Ok(ScriptObject::new()
            .with_property("distance", distance, PropertyAttributes::READ_ONLY)
            .with_property("normal_world", normal.into_script(), PropertyAttributes::READ_ONLY)
            .with_property("best_mesh_index", mesh, PropertyAttributes::READ_ONLY)
            .with_property("best_triangle_index", triangle, PropertyAttributes::READ_ONLY)
            .into())
    })?;

    let mesh_closest_point_raycast = api.mesh_closest_point_raycast;
    module.register_native("mesh_closest_point_raycast", move |args| {
        let mut point = Vector3::default();
        let mut along = 0.0f32;
        let mut to_ray = 0.0f32;
        let hit = mesh_closest_point_raycast(
            args.get(0)?,
            args.get(1)?,
            args.get(2)?,
            args.get(3)?,
            &mut point,
            &mut along,
            &mut to_ray,
        );
        if hit == 0 {
            return Ok(ScriptValue::Undefined);
        }
        Ok(ScriptObject::new()
            .with_property("best_point_world", point.into_script(), PropertyAttributes::READ_ONLY)
            .with_property("best_point_distance_along_ray", along, PropertyAttributes::READ_ONLY)
            .with_property("best_point_distance_to_ray", to_ray, PropertyAttributes::READ_ONLY)
            .into())
    })?;

    // [found, value]; value is undefined when the curve is missing
    let animation_get_curve_value = api.animation_get_curve_value;
    module.register_native("animation_get_curve_value", move |args| {
        let mut value = 0.0f32;
        let found = animation_get_curve_value(
            args.get(0)?,
            args.get(1)?,
            args.get(2)?,
            args.get(3)?,
            &mut value,
        );
        let value = if found != 0 {
            value.into_script()
        } else {
            ScriptValue::Undefined
        };
        Ok(vec![found.into_script(), value].into())
    })?;

    let lod_step_range = api.lod_step_range;
    module.register_native("lod_step_range", move |args| {
        let lod = args.get::<*mut CApiLodObject>(0)?;
        let mut range = [0.0f32; 2];
        lod_step_range(lod, args.get(1)?, range.as_mut_ptr());
        Ok(range.map(IntoScript::into_script).to_vec().into())
    })?;

    bind_dynamic_data(&mut module, data)?;
    Ok(module)
}
