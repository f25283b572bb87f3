//! The `Level` namespace.

use jsbridge_core::native::CApiLevel;
use jsbridge_registry::{Module, RegistrationError};

use crate::bind_api;
use crate::capi::{DynamicScriptDataCApi, LevelCApi};
use crate::dynamic_data::bind_dynamic_data;

pub fn module(
    api: &LevelCApi,
    data: &DynamicScriptDataCApi<*mut CApiLevel>,
) -> Result<Module, RegistrationError> {
    let mut module = Module::new("Level");

    bind_api!(module, api, [
        world,
        spawn_background,
        unit_by_index,
        unit_index,
        num_units,
        num_nested_levels,
        nested_level,
        random_point_inside_volume,
        is_point_inside_volume,
        has_volume,
        trigger_event,
        trigger_level_loaded,
        trigger_level_shutdown,
        trigger_level_update,
        pose,
    ]);
    module.register_fn("box", api.r#box)?;

    bind_dynamic_data(&mut module, data)?;
    Ok(module)
}

#[cfg(test)]
mod tests {
    use bumpalo::Bump;
    use jsbridge_core::native::{Matrix4x4, Oobb, Vector3};
    use jsbridge_core::{Arguments, IdString32, ScriptValue, handle};

    use super::*;
    use crate::testing;

    extern "C" fn r#box(_level: *mut CApiLevel) -> Oobb {
        Oobb {
            tm: Matrix4x4::IDENTITY,
            half_ext: Vector3 {
                x: 1.0,
                y: 2.0,
                z: 3.0,
            },
        }
    }

    extern "C" fn has_volume(level: *mut CApiLevel, volume_id: u32) -> i32 {
        (!level.is_null() && volume_id == IdString32::new("spawn_area").id()) as i32
    }

    fn call(name: &str, args: &[ScriptValue]) -> ScriptValue {
        let api = LevelCApi {
            r#box,
            has_volume,
            ..testing::level()
        };
        let module = module(&api, &testing::dynamic_data()).unwrap();
        let arena = Bump::new();
        module
            .get(name)
            .unwrap()
            .call(&Arguments::new(args, &arena))
            .unwrap()
    }

    #[test]
    fn box_encodes_as_read_only_struct() {
        let level = handle::wrap_pointer(0x20usize as *mut CApiLevel);
        let oobb = call("box", &[level]);
        let oobb = oobb.as_object().unwrap();
        assert_eq!(oobb.get("half_ext"), Some(ScriptValue::from([1.0, 2.0, 3.0])));
        assert_eq!(oobb.get("tm").and_then(|tm| tm.array_len()), Some(16));
    }

    #[test]
    fn volume_names_are_hashed() {
        let level = handle::wrap_pointer(0x20usize as *mut CApiLevel);
        assert_eq!(
            call("has_volume", &[level.clone(), "spawn_area".into()]),
            ScriptValue::from(1)
        );
        assert_eq!(
            call("has_volume", &[level, "exit".into()]),
            ScriptValue::from(0)
        );
    }
}
