//! Script bindings for a native game engine.
//!
//! The engine publishes its subsystems as C function tables ([`ScriptApi`]).
//! This crate binds those tables into script namespaces (`World`, `Unit`,
//! `Camera` and so on) hung off one root object, and converts values and
//! failures across the boundary.
//!
//! - [`jsbridge_core`] - value model, handles, decode/encode, dispatch
//! - [`jsbridge_registry`] - [`Module`] and [`Registry`]
//! - [`jsbridge_modules`] - the C API tables and subsystem namespaces
//!
//! # Usage
//!
//! ```ignore
//! use jsbridge::{Bridge, BridgeConfig, ModuleSet};
//!
//! let config = BridgeConfig::default().with_modules(ModuleSet::all() - ModuleSet::FS);
//! let mut bridge = Bridge::with_config(config);
//! bridge.install_default_modules(&api)?;
//! bridge.seal();
//! bridge.expose(&global)?;
//! ```

pub mod bridge;
pub mod config;
pub mod error;

pub use bridge::Bridge;
pub use config::{BridgeConfig, ModuleSet};
pub use error::BridgeError;

pub use jsbridge_core::{
    Arguments, DecodeError, EncodeError, FromArg, IntoScript, NativeError, ScratchConfig,
    ScriptException, ScriptFunction, ScriptObject, ScriptValue, handle,
};
pub use jsbridge_modules::{ScriptApi, capi};
pub use jsbridge_registry::{Module, Registry, RegistrationError};
