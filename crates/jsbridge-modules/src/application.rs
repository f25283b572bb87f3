//! The `Application` namespace.

use std::ffi::c_char;
use std::ptr;

use jsbridge_core::encode::c_str_to_script;
use jsbridge_core::native::MultipleStringsBuffer;
use jsbridge_core::{CountedList, ScriptArray, ScriptValue};
use jsbridge_registry::{Module, RegistrationError};

use crate::bind_api;
use crate::capi::ApplicationCApi;

/// Most argument strings `argv` collects.
pub const MAX_ARGV: usize = 2048;

pub fn module(api: &ApplicationCApi) -> Result<Module, RegistrationError> {
    let mut module = Module::new("Application");

    bind_api!(module, api, [
        num_worlds,
        world,
        new_world,
        main_world,
        release_world,
        render_world,
        build,
        platform,
        build_identifier,
        sysinfo,
        create_viewport,
        destroy_viewport,
        time_since_launch,
        sleep,
        get_time_step_policy,
        quit,
    ]);
    module.register_fn("worlds", CountedList::new(api.worlds))?;

    let argv = api.argv;
    module.register_native("argv", move |_| {
        let mut strings = vec![ptr::null::<c_char>(); MAX_ARGV];
        let mut buffer = MultipleStringsBuffer {
            num_strings: 0,
            s: strings.as_mut_ptr(),
        };
        argv(&mut buffer, MAX_ARGV as u32);

        let count = (buffer.num_strings as usize).min(MAX_ARGV);
        Ok(strings[..count]
            .iter()
            .map(|s| c_str_to_script(*s))
            .collect::<ScriptArray>()
            .into())
    })?;

    Ok(module)
}
