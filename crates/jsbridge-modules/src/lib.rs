//! Script namespaces for the engine subsystems.
//!
//! This crate provides:
//!
//! - **capi** - the engine's C API function tables
//! - **application**, **world**, **unit**, **camera**, **window**, **level**,
//!   **input**, **gui** - namespaces binding those tables
//! - **math** - `Vector2`, `Vector3`, `Quaternion` and `Matrix4x4`
//! - **fs** - file system probing
//! - **dynamic_data** - per-object script data
//! - **testing** - stub tables for tests (`testing` feature)
//!
//! # Usage
//!
//! Each namespace has a function returning a [`Module`](jsbridge_registry::Module)
//! that can be installed into a registry:
//!
//! ```ignore
//! use jsbridge_modules::{math, world};
//!
//! registry.install(world::module(&api.world, &api.world_data)?)?;
//! registry.install(math::vector3_module()?)?;
//! ```

pub mod application;
pub mod camera;
pub mod capi;
pub mod dynamic_data;
pub mod fs;
pub mod gui;
pub mod input;
pub mod level;
pub mod math;
pub mod unit;
pub mod window;
pub mod world;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use capi::ScriptApi;

/// Register table entries under their field names.
#[macro_export]
macro_rules! bind_api {
    ($module:ident, $api:ident, [$($name:ident),* $(,)?]) => {
        $($module.register_fn(stringify!($name), $api.$name)?;)*
    };
}
