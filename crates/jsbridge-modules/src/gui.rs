//! The `Gui` namespace.

use jsbridge_core::native::{CApiViewport, CApiWindow};
use jsbridge_core::ScriptValue;
use jsbridge_registry::{Module, RegistrationError};

use crate::bind_api;
use crate::capi::GuiCApi;

pub fn module(api: &GuiCApi) -> Result<Module, RegistrationError> {
    let mut module = Module::new("Gui");

    bind_api!(module, api, [
        material,
        rect,
        update_rect,
        destroy_rect,
        bitmap,
        update_bitmap,
        destroy_bitmap,
        text,
        destroy_text,
        set_visible,
        is_visible,
    ]);

    let resolution = api.resolution;
    module.register_native("resolution", move |args| {
        let viewport = args.get::<*mut CApiViewport>(0)?;
        let window = args.get::<*mut CApiWindow>(1)?;
        let (mut width, mut height) = (0u32, 0u32);
        resolution(viewport, window, &mut width, &mut height);
        Ok(vec![ScriptValue::from(width), ScriptValue::from(height)].into())
    })?;

    Ok(module)
}
