use std::ffi::c_char;

use jsbridge_core::native::{CApiGui, CApiMaterial, CApiViewport, CApiWindow, Vector2, Vector4};

/// Immediate and retained 2D gui primitives. Primitives are addressed by id.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct GuiCApi {
    pub material: extern "C" fn(gui: *mut CApiGui, resource_id: u64) -> *mut CApiMaterial,
    pub rect: extern "C" fn(
        gui: *mut CApiGui,
        pos: *const Vector2,
        layer: u32,
        size: *const Vector2,
        color: *const Vector4,
    ) -> u32,
    pub update_rect: extern "C" fn(
        gui: *mut CApiGui,
        id: u32,
        pos: *const Vector2,
        layer: u32,
        size: *const Vector2,
        color: *const Vector4,
    ),
    pub destroy_rect: extern "C" fn(gui: *mut CApiGui, id: u32),
    pub bitmap: extern "C" fn(
        gui: *mut CApiGui,
        material: *mut CApiMaterial,
        pos: *const Vector2,
        layer: u32,
        size: *const Vector2,
        color: *const Vector4,
    ) -> u32,
    pub update_bitmap: extern "C" fn(
        gui: *mut CApiGui,
        id: u32,
        material: *mut CApiMaterial,
        pos: *const Vector2,
        layer: u32,
        size: *const Vector2,
        color: *const Vector4,
        uv00: *const Vector2,
        uv11: *const Vector2,
    ),
    pub destroy_bitmap: extern "C" fn(gui: *mut CApiGui, id: u32),
    pub text: extern "C" fn(
        gui: *mut CApiGui,
        text: *const c_char,
        font_id: u64,
        font_size: f32,
        pos: *const Vector2,
        layer: u32,
        color: *const Vector4,
    ) -> u32,
    pub destroy_text: extern "C" fn(gui: *mut CApiGui, id: u32),
    pub set_visible: extern "C" fn(gui: *mut CApiGui, visible: i32),
    pub is_visible: extern "C" fn(gui: *mut CApiGui) -> i32,
    pub resolution: extern "C" fn(
        viewport: *mut CApiViewport,
        window: *mut CApiWindow,
        out_width: *mut u32,
        out_height: *mut u32,
    ),
}
