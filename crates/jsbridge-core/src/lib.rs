//! Core marshalling layer between script values and native engine calls.
//!
//! This crate provides:
//!
//! - **value** - the script value model the boundary works against
//! - **handle** - opaque handles wrapping native pointers, ids and byte copies
//! - **decode** - script argument → native parameter conversion
//! - **encode** - native result → script value conversion
//! - **dynamic** - the engine's tagged dynamic values
//! - **call** - generic adaptation of native function pointers
//! - **dispatch** - the exception boundary around every call
//!
//! # Usage
//!
//! ```ignore
//! use jsbridge_core::{ApiHandler, NativeFn};
//!
//! let f = NativeFn::from_function("num_units", api.num_units);
//! let function = ApiHandler::new(f).into_function();
//! let count = function.invoke(&[world])?;
//! ```

pub mod call;
pub mod decode;
pub mod dispatch;
pub mod dynamic;
pub mod encode;
pub mod error;
pub mod handle;
pub mod hash;
pub mod native;
pub mod native_fn;
pub mod scratch;
pub mod value;

pub use call::{CountedList, NativeFunction};
pub use decode::{Arguments, FromArg};
pub use dispatch::{ApiHandler, dispatch};
pub use dynamic::{DynamicScriptDataItem, DynamicTag};
pub use encode::IntoScript;
pub use error::{DecodeError, EncodeError, NativeError, PropertyError, ScriptException};
pub use handle::OpaqueHandle;
pub use hash::{IdString32, IdString64};
pub use native_fn::{NativeCallable, NativeFn};
pub use scratch::{ScratchConfig, ScratchPool};
pub use value::{
    HandlerResult, PropertyAttributes, ScriptArray, ScriptFunction, ScriptHandler, ScriptObject,
    ScriptValue,
};
