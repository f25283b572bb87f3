//! The `Input` namespace and one namespace per fixed controller.
//!
//! Controller namespaces (`Keyboard`, `Mouse`, `Pad`, ...) bind every controller
//! function with the controller pointer captured at install time, so script
//! calls `Keyboard.pressed(id)` rather than passing the controller.

use jsbridge_core::native::{CApiInputController, DeadZoneSetting};
use jsbridge_core::{FromArg, IntoScript, NativeError, ScriptValue};
use jsbridge_registry::{Module, RegistrationError};

use crate::bind_api;
use crate::capi::{InputCApi, InputControllerCApi};

type Controller = *mut CApiInputController;

// =============================================================================
// CAPTURED CONTROLLER BINDINGS
// =============================================================================

fn bind0<R>(
    module: &mut Module,
    name: &str,
    controller: Controller,
    f: extern "C" fn(Controller) -> R,
) -> Result<(), RegistrationError>
where
    R: IntoScript + 'static,
{
    module.register_native(name, move |_| Ok(f(controller).into_script()))
}

fn bind1<P0, R>(
    module: &mut Module,
    name: &str,
    controller: Controller,
    f: extern "C" fn(Controller, P0) -> R,
) -> Result<(), RegistrationError>
where
    P0: FromArg + 'static,
    R: IntoScript + 'static,
{
    module.register_native(name, move |args| {
        Ok(f(controller, args.get::<P0>(0)?).into_script())
    })
}

fn bind2<P0, P1, R>(
    module: &mut Module,
    name: &str,
    controller: Controller,
    f: extern "C" fn(Controller, P0, P1) -> R,
) -> Result<(), RegistrationError>
where
    P0: FromArg + 'static,
    P1: FromArg + 'static,
    R: IntoScript + 'static,
{
    module.register_native(name, move |args| {
        Ok(f(controller, args.get::<P0>(0)?, args.get::<P1>(1)?).into_script())
    })
}

/// Namespace `name` bound to one controller.
pub fn controller_module(
    name: &str,
    api: &InputControllerCApi,
    controller: Controller,
) -> Result<Module, RegistrationError> {
    let mut module = Module::new(name);
    let m = &mut module;
    let c = controller;

    bind0(m, "name", c, api.name)?;
    bind0(m, "num_buttons", c, api.num_buttons)?;
    bind1(m, "button", c, api.button)?;
    bind1(m, "pressed", c, api.pressed)?;
    bind1(m, "released", c, api.released)?;
    bind0(m, "any_pressed", c, api.any_pressed)?;
    bind0(m, "any_released", c, api.any_released)?;
    bind1(m, "set_down_threshold", c, api.set_down_threshold)?;
    bind0(m, "down_threshold", c, api.down_threshold)?;
    bind0(m, "num_axes", c, api.num_axes)?;
    bind2(m, "axis", c, api.axis)?;
    bind2(m, "set_dead_zone", c, api.set_dead_zone)?;
    bind1(m, "set_rumble_enabled", c, api.set_rumble_enabled)?;
    bind0(m, "num_rumble_motors", c, api.num_rumble_motors)?;
    bind2(m, "set_rumble", c, api.set_rumble)?;
    bind2(m, "rumble_effect", c, api.rumble_effect)?;
    bind2(m, "stop_rumble_effect", c, api.stop_rumble_effect)?;
    bind2(m, "is_rumble_effect_playing", c, api.is_rumble_effect_playing)?;
    bind1(m, "stop_all_rumble_effects", c, api.stop_all_rumble_effects)?;
    bind1(m, "button_name", c, api.button_name)?;
    bind1(m, "button_id", c, api.button_id)?;
    bind1(m, "axis_name", c, api.axis_name)?;
    bind1(m, "axis_id", c, api.axis_id)?;
    bind0(m, "active", c, api.active)?;
    bind0(m, "connected", c, api.connected)?;
    bind0(m, "disconnected", c, api.disconnected)?;

    let dead_zone = api.dead_zone;
    module.register_native("dead_zone", move |args| {
        let axis = args.get::<u32>(0)?;
        let mut setting = DeadZoneSetting::default();
        dead_zone(controller, axis, &mut setting);
        Ok(setting.into_script())
    })?;

    Ok(module)
}

// =============================================================================
// INPUT
// =============================================================================

/// `Input.<name>(index)` returns the namespace of the indexed controller, or
/// `null` when the engine has no such controller.
fn bind_indexed(
    module: &mut Module,
    name: &'static str,
    api: &InputControllerCApi,
    f: extern "C" fn(u32) -> Controller,
) -> Result<(), RegistrationError> {
    let api = *api;
    module.register_native(name, move |args| {
        let controller = f(args.get::<u32>(0)?);
        if controller.is_null() {
            return Ok(ScriptValue::Null);
        }
        let module = controller_module(name, &api, controller)
            .map_err(|err| NativeError::engine(err.to_string()))?;
        Ok(module.into_namespace().into())
    })
}

/// `Input` plus one namespace per fixed controller.
///
/// `Pad` and `TouchPanel` are the first of their kind; the others are reached
/// through `Input.pad(index)` and `Input.touch_panel(index)`.
pub fn modules(
    api: &InputCApi,
    controller: &InputControllerCApi,
) -> Result<Vec<Module>, RegistrationError> {
    let mut module = Module::new("Input");
    bind_api!(module, api, [num_pads, num_touch_panels, flush_controllers_state]);
    bind_indexed(&mut module, "pad", controller, api.pad)?;
    bind_indexed(&mut module, "touch_panel", controller, api.touch_panel)?;

    Ok(vec![
        module,
        controller_module("Keyboard", controller, (api.keyboard)())?,
        controller_module("Mouse", controller, (api.mouse)())?,
        controller_module("Tablet", controller, (api.tablet)())?,
        controller_module("TouchPanel", controller, (api.touch_panel)(0))?,
        controller_module("Pad", controller, (api.pad)(0))?,
    ])
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use bumpalo::Bump;
    use jsbridge_core::native::RumbleParameters;
    use jsbridge_core::{Arguments, PropertyAttributes, ScriptObject, ScriptValue, handle};

    use super::*;
    use crate::testing;

    const KEYBOARD: usize = 0x100;
    const MOUSE: usize = 0x200;
    const TABLET: usize = 0x280;
    const PAD: usize = 0x300;
    const TOUCH_PANEL: usize = 0x400;

    thread_local! {
        static CALLS: RefCell<Vec<(usize, String)>> = const { RefCell::new(Vec::new()) };
    }

    fn record(controller: Controller, call: String) {
        CALLS.with(|c| c.borrow_mut().push((controller as usize, call)));
    }

    fn calls() -> Vec<(usize, String)> {
        CALLS.with(|c| c.take())
    }

    extern "C" fn keyboard() -> Controller {
        KEYBOARD as Controller
    }

    extern "C" fn mouse() -> Controller {
        MOUSE as Controller
    }

    extern "C" fn tablet() -> Controller {
        TABLET as Controller
    }

    extern "C" fn pad(index: u32) -> Controller {
        match index {
            0..=3 => (PAD + index as usize) as Controller,
            _ => std::ptr::null_mut(),
        }
    }

    extern "C" fn touch_panel(index: u32) -> Controller {
        (TOUCH_PANEL + index as usize) as Controller
    }

    extern "C" fn pressed(controller: Controller, id: u32) -> i32 {
        record(controller, format!("pressed {id}"));
        (id == 32) as i32
    }

    extern "C" fn dead_zone(controller: Controller, id: u32, out: *mut DeadZoneSetting) {
        record(controller, format!("dead_zone {id}"));
        unsafe {
            *out = DeadZoneSetting {
                mode: 1,
                size: 0.25,
            }
        };
    }

    extern "C" fn set_dead_zone(controller: Controller, id: u32, setting: *mut DeadZoneSetting) {
        let setting = unsafe { *setting };
        record(
            controller,
            format!("set_dead_zone {id} {} {}", setting.mode, setting.size),
        );
    }

    extern "C" fn rumble_effect(
        controller: Controller,
        motor: u32,
        params: *mut RumbleParameters,
    ) -> u32 {
        let params = unsafe { *params };
        record(
            controller,
            format!("rumble_effect {motor} {} {}", params.frequency, params.decay),
        );
        9
    }

    fn input_modules() -> Vec<Module> {
        let input = InputCApi {
            keyboard,
            mouse,
            tablet,
            touch_panel,
            pad,
            ..testing::input()
        };
        let controller = InputControllerCApi {
            pressed,
            dead_zone,
            set_dead_zone,
            rumble_effect,
            ..testing::input_controller()
        };
        modules(&input, &controller).unwrap()
    }

    fn namespace<'a>(modules: &'a [Module], name: &str) -> &'a Module {
        modules.iter().find(|m| m.name() == name).unwrap()
    }

    fn call(module: &Module, name: &str, args: &[ScriptValue]) -> ScriptValue {
        let arena = Bump::new();
        module
            .get(name)
            .unwrap()
            .call(&Arguments::new(args, &arena))
            .unwrap()
    }

    #[test]
    fn controller_namespaces_capture_their_controller() {
        let modules = input_modules();
        let names: Vec<_> = modules.iter().map(Module::name).collect();
        assert_eq!(
            names,
            ["Input", "Keyboard", "Mouse", "Tablet", "TouchPanel", "Pad"]
        );

        calls();
        assert_eq!(
            call(namespace(&modules, "Keyboard"), "pressed", &[ScriptValue::from(32)]),
            ScriptValue::from(1)
        );
        assert_eq!(
            call(namespace(&modules, "Mouse"), "pressed", &[ScriptValue::from(1)]),
            ScriptValue::from(0)
        );
        for name in ["Tablet", "TouchPanel", "Pad"] {
            call(namespace(&modules, name), "pressed", &[ScriptValue::from(4)]);
        }

        assert_eq!(
            calls(),
            vec![
                (KEYBOARD, "pressed 32".to_string()),
                (MOUSE, "pressed 1".to_string()),
                (TABLET, "pressed 4".to_string()),
                (TOUCH_PANEL, "pressed 4".to_string()),
                (PAD, "pressed 4".to_string()),
            ]
        );
    }

    #[test]
    fn dead_zone_round_trips_as_object() {
        let modules = input_modules();
        let pad = namespace(&modules, "Pad");
        calls();

        let setting = call(pad, "dead_zone", &[ScriptValue::from(2)]);
        let object = setting.as_object().unwrap();
        assert_eq!(object.get("mode"), Some(ScriptValue::from(1)));
        assert_eq!(object.get("size"), Some(ScriptValue::from(0.25)));
        assert_eq!(object.attributes("size"), Some(PropertyAttributes::DONT_DELETE));

        object.set("size", 0.5).unwrap();
        call(pad, "set_dead_zone", &[ScriptValue::from(2), setting]);

        assert_eq!(
            calls(),
            vec![
                (PAD, "dead_zone 2".to_string()),
                (PAD, "set_dead_zone 2 1 0.5".to_string()),
            ]
        );
    }

    #[test]
    fn rumble_parameters_are_read_from_an_object() {
        let modules = input_modules();
        calls();

        let params = ScriptObject::new();
        params.set("frequency", 30.0).unwrap();
        params.set("decay", 0.1).unwrap();
        let effect = call(
            namespace(&modules, "Pad"),
            "rumble_effect",
            &[ScriptValue::from(0), params.into()],
        );

        assert_eq!(effect, ScriptValue::from(9));
        assert_eq!(calls(), vec![(PAD, "rumble_effect 0 30 0.1".to_string())]);
    }

    #[test]
    fn indexed_controllers_are_namespaces() {
        let modules = input_modules();
        let input = namespace(&modules, "Input");
        assert_eq!(input.len(), 5);
        calls();

        let second_pad = call(input, "pad", &[ScriptValue::from(1)]);
        let pressed = second_pad.get_key("pressed");
        assert_eq!(
            pressed.as_function().unwrap().invoke(&[ScriptValue::from(32)]),
            Ok(ScriptValue::from(1))
        );
        assert!(second_pad.as_object().unwrap().set("pressed", 1).is_err());

        let panel = call(input, "touch_panel", &[ScriptValue::from(2)]);
        panel
            .get_key("pressed")
            .as_function()
            .unwrap()
            .invoke(&[ScriptValue::from(0)])
            .unwrap();

        assert_eq!(
            calls(),
            vec![
                (PAD + 1, "pressed 32".to_string()),
                (TOUCH_PANEL + 2, "pressed 0".to_string()),
            ]
        );
    }

    #[test]
    fn missing_pad_is_null() {
        let modules = input_modules();
        let input = namespace(&modules, "Input");
        assert_eq!(call(input, "pad", &[ScriptValue::from(7)]), ScriptValue::Null);
        let first_pad = call(input, "pad", &[ScriptValue::from(0)]);
        assert!(first_pad.get_key("axis").is_function());
        assert!(handle::handle_of(&first_pad).is_none());
    }
}
