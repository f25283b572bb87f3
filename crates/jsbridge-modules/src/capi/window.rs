use std::ffi::c_char;

use jsbridge_core::native::{CApiWindow, WindowKeystrokes, WindowOpenParameter, WindowRect};

/// Operating system windows. A null window means the main window.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct WindowCApi {
    pub has_mouse_focus: extern "C" fn(window: *mut CApiWindow) -> i32,
    pub has_focus: extern "C" fn(window: *mut CApiWindow) -> i32,
    pub set_mouse_focus: extern "C" fn(window: *mut CApiWindow, enabled: i32),
    pub set_focus: extern "C" fn(window: *mut CApiWindow),
    pub show_cursor: extern "C" fn(window: *mut CApiWindow) -> i32,
    pub set_show_cursor: extern "C" fn(window: *mut CApiWindow, visible: i32),
    pub clip_cursor: extern "C" fn(window: *mut CApiWindow) -> i32,
    pub set_clip_cursor: extern "C" fn(window: *mut CApiWindow, clipped: i32),
    pub set_cursor: extern "C" fn(window: *mut CApiWindow, cursor_id: u64),
    pub is_resizable: extern "C" fn(window: *mut CApiWindow) -> i32,
    pub set_resizable: extern "C" fn(window: *mut CApiWindow, resizable: i32),
    pub set_resolution: extern "C" fn(window: *mut CApiWindow, width: u32, height: u32),
    pub get_dpi_scale: extern "C" fn(window: *mut CApiWindow) -> f32,
    pub set_title: extern "C" fn(window: *mut CApiWindow, title: *const c_char),
    pub get_main_window: extern "C" fn() -> *mut CApiWindow,
    pub minimize: extern "C" fn(window: *mut CApiWindow),
    pub maximize: extern "C" fn(window: *mut CApiWindow),
    pub restore: extern "C" fn(window: *mut CApiWindow),
    pub is_closing: extern "C" fn(window: *mut CApiWindow) -> i32,
    pub close: extern "C" fn(window: *mut CApiWindow),
    pub set_keystroke_enabled:
        extern "C" fn(window: *mut CApiWindow, keystroke: WindowKeystrokes, enabled: i32),
    pub id: extern "C" fn(window: *mut CApiWindow) -> u64,
    pub rect: extern "C" fn(window: *mut CApiWindow) -> WindowRect,
    pub set_rect: extern "C" fn(window: *mut CApiWindow, rect: WindowRect),
    pub open: extern "C" fn(params: *mut WindowOpenParameter) -> *mut CApiWindow,
    pub fill_default_open_parameter: extern "C" fn(params: *mut WindowOpenParameter),
}
