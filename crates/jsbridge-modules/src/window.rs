//! The `Window` namespace.

use jsbridge_core::IntoScript;
use jsbridge_core::native::WindowOpenParameter;
use jsbridge_registry::{Module, RegistrationError};

use crate::bind_api;
use crate::capi::WindowCApi;

pub fn module(api: &WindowCApi) -> Result<Module, RegistrationError> {
    let mut module = Module::new("Window");

    bind_api!(module, api, [
        has_mouse_focus,
        has_focus,
        set_mouse_focus,
        set_focus,
        show_cursor,
        set_show_cursor,
        clip_cursor,
        set_clip_cursor,
        set_cursor,
        is_resizable,
        set_resizable,
        set_resolution,
        get_dpi_scale,
        set_title,
        get_main_window,
        minimize,
        maximize,
        restore,
        is_closing,
        close,
        set_keystroke_enabled,
        id,
        rect,
        set_rect,
        open,
    ]);

    // Script edits the returned object and passes it back to `open`.
    let fill_default_open_parameter = api.fill_default_open_parameter;
    module.register_native("fill_default_open_parameter", move |_| {
        let mut params = WindowOpenParameter::default();
        fill_default_open_parameter(&mut params);
        Ok(params.into_script())
    })?;

    Ok(module)
}
