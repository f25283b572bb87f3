//! A mock engine behind a full [`ScriptApi`].

use std::cell::RefCell;
use std::collections::HashMap;
use std::ffi::{CStr, c_char, c_void};

use jsbridge::capi::{
    ApplicationCApi, CameraCApi, DynamicScriptDataCApi, InputCApi, InputControllerCApi, UnitCApi,
    WorldCApi,
};
use jsbridge::{Bridge, ScriptApi, ScriptException, ScriptValue};
use jsbridge_core::native::{
    CApiCamera, CApiInputController, CApiWorld, Matrix4x4, UnitRef, Vector3,
};
use jsbridge_core::{DynamicScriptDataItem, IdString32};
use jsbridge_modules::testing;
use tracing_subscriber::EnvFilter;

pub const WORLD: usize = 0x1000;
pub const CAMERA: usize = 0x2000;
pub const MY_UNIT: UnitRef = 7;

#[derive(Default)]
struct Engine {
    calls: Vec<String>,
    positions: HashMap<(UnitRef, u32), Vector3>,
    // (unit, key path) -> (tag, payload with a trailing NUL)
    data: HashMap<(UnitRef, Vec<String>), (u32, Vec<u8>)>,
}

thread_local! {
    static ENGINE: RefCell<Engine> = RefCell::new(Engine::default());
}

fn record(call: String) {
    ENGINE.with_borrow_mut(|e| e.calls.push(call));
}

/// Calls recorded since the last take.
pub fn take_calls() -> Vec<String> {
    ENGINE.with_borrow_mut(|e| std::mem::take(&mut e.calls))
}

// =============================================================================
// APPLICATION
// =============================================================================

extern "C" fn main_world() -> *mut CApiWorld {
    WORLD as *mut CApiWorld
}

extern "C" fn platform() -> *const c_char {
    c"win32".as_ptr()
}

// =============================================================================
// WORLD
// =============================================================================

extern "C" fn num_units(world: *mut CApiWorld) -> u32 {
    record(format!("num_units {:#x}", world as usize));
    3
}

extern "C" fn unit_by_name(_world: *mut CApiWorld, name_id: u32) -> UnitRef {
    if name_id == IdString32::new("my_unit").id() {
        MY_UNIT
    } else {
        u32::MAX
    }
}

extern "C" fn unit_by_id(_world: *mut CApiWorld, id: u64) -> UnitRef {
    id as UnitRef
}

extern "C" fn update(world: *mut CApiWorld, dt: f32) {
    record(format!("update {:#x} {dt}", world as usize));
}

extern "C" fn debug_camera_pose(_world: *mut CApiWorld) -> Matrix4x4 {
    Matrix4x4::IDENTITY
}

// =============================================================================
// UNIT
// =============================================================================

extern "C" fn local_position(unit: UnitRef, index: u32) -> Vector3 {
    ENGINE.with_borrow(|e| e.positions.get(&(unit, index)).copied().unwrap_or_default())
}

extern "C" fn set_local_position(unit: UnitRef, index: u32, pos: *const Vector3) {
    let pos = unsafe { *pos };
    ENGINE.with_borrow_mut(|e| e.positions.insert((unit, index), pos));
}

unsafe fn key_path(num_keys: u32, keys: *const *const c_char) -> Vec<String> {
    (0..num_keys as usize)
        .map(|i| unsafe { CStr::from_ptr(*keys.add(i)) }.to_string_lossy().into_owned())
        .collect()
}

extern "C" fn set_data(
    unit: UnitRef,
    value: DynamicScriptDataItem,
    num_keys: u32,
    keys: *const *const c_char,
) {
    let path = unsafe { key_path(num_keys, keys) };
    let mut payload = if value.pointer.is_null() {
        Vec::new()
    } else {
        unsafe { std::slice::from_raw_parts(value.pointer.cast::<u8>(), value.size as usize) }
            .to_vec()
    };
    payload.push(0);
    ENGINE.with_borrow_mut(|e| e.data.insert((unit, path), (value.data_type, payload)));
}

extern "C" fn has_data(unit: UnitRef, num_keys: u32, keys: *const *const c_char) -> i32 {
    let path = unsafe { key_path(num_keys, keys) };
    ENGINE.with_borrow(|e| e.data.contains_key(&(unit, path))) as i32
}

extern "C" fn get_data(
    unit: UnitRef,
    num_keys: u32,
    keys: *const *const c_char,
) -> DynamicScriptDataItem {
    let path = unsafe { key_path(num_keys, keys) };
    ENGINE.with_borrow(|e| match e.data.get(&(unit, path)) {
        Some((tag, payload)) => DynamicScriptDataItem {
            data_type: *tag,
            pointer: payload.as_ptr().cast::<c_void>(),
            size: (payload.len() - 1) as u32,
        },
        None => DynamicScriptDataItem::NIL,
    })
}

// =============================================================================
// CAMERA
// =============================================================================

extern "C" fn camera_set_local_position(camera: *mut CApiCamera, _pos: *const Vector3) {
    record(format!("set_local_position {:#x}", camera as usize));
}

// =============================================================================
// INPUT
// =============================================================================

extern "C" fn keyboard() -> *mut CApiInputController {
    0x100 as *mut CApiInputController
}

extern "C" fn mouse() -> *mut CApiInputController {
    0x200 as *mut CApiInputController
}

extern "C" fn tablet() -> *mut CApiInputController {
    0x280 as *mut CApiInputController
}

extern "C" fn touch_panel(index: u32) -> *mut CApiInputController {
    (0x400 + index as usize) as *mut CApiInputController
}

pub const PAD: usize = 0x300;

extern "C" fn pad(index: u32) -> *mut CApiInputController {
    (PAD + index as usize) as *mut CApiInputController
}

extern "C" fn pressed(controller: *mut CApiInputController, id: u32) -> i32 {
    record(format!("pressed {:#x} {id}", controller as usize));
    (id == 1) as i32
}

/// The engine's tables with the mocks above filled in.
pub fn api() -> ScriptApi {
    ScriptApi {
        application: ApplicationCApi {
            main_world,
            platform,
            ..testing::application()
        },
        world: WorldCApi {
            num_units,
            unit_by_name,
            unit_by_id,
            update,
            debug_camera_pose,
            ..testing::world()
        },
        unit: UnitCApi {
            local_position,
            set_local_position,
            ..testing::unit()
        },
        camera: CameraCApi {
            set_local_position: camera_set_local_position,
            ..testing::camera()
        },
        input: InputCApi {
            keyboard,
            mouse,
            tablet,
            touch_panel,
            pad,
            ..testing::input()
        },
        input_controller: InputControllerCApi {
            pressed,
            ..testing::input_controller()
        },
        unit_data: DynamicScriptDataCApi {
            set_data,
            has_data,
            get_data,
        },
        ..testing::script_api()
    }
}

/// Log output for failing tests, filtered by `RUST_LOG`.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn bridge() -> Bridge {
    init_tracing();
    take_calls();
    Bridge::with_default_modules(&api()).unwrap()
}

pub fn call(
    bridge: &Bridge,
    namespace: &str,
    name: &str,
    args: &[ScriptValue],
) -> Result<ScriptValue, ScriptException> {
    bridge
        .function(namespace, name)
        .unwrap_or_else(|| panic!("{namespace}.{name} is not installed"))
        .invoke(args)
}

pub fn world() -> ScriptValue {
    jsbridge::handle::wrap_pointer(WORLD as *mut CApiWorld)
}

pub fn camera() -> ScriptValue {
    jsbridge::handle::wrap_pointer(CAMERA as *mut CApiCamera)
}
