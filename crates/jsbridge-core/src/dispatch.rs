//! The boundary every script-invoked native call passes through.
//!
//! [`ApiHandler`] gives each call a fresh scratch arena, runs the bound
//! [`NativeFn`] and converts any signaled failure into a [`ScriptException`]
//! naming the call. Script never observes a native error directly.

use tracing::{error, trace, warn};

use crate::decode::Arguments;
use crate::error::{NativeError, ScriptException};
use crate::native_fn::NativeFn;
use crate::scratch::ScratchPool;
use crate::value::{HandlerResult, ScriptFunction, ScriptHandler, ScriptValue};

/// Run `native` with `args` under a dedicated scratch arena.
///
/// Temporaries decoded for the call are released when this returns.
pub fn dispatch(native: &NativeFn, args: &[ScriptValue]) -> Result<ScriptValue, ScriptException> {
    let scratch = ScratchPool::checkout();
    let arguments = Arguments::new(args, scratch.arena());
    native.call(&arguments).map_err(|err| {
        let exception = ScriptException::failed_call(native.name(), &err);
        match err {
            NativeError::Encode(_) => error!(function = native.name(), "{exception}"),
            _ => warn!(function = native.name(), "{exception}"),
        }
        exception
    })
}

/// Script handler for one registered native function.
#[derive(Debug, Clone)]
pub struct ApiHandler {
    native: NativeFn,
}

impl ApiHandler {
    pub fn new(native: NativeFn) -> Self {
        Self { native }
    }

    pub fn name(&self) -> &str {
        self.native.name()
    }

    /// The script-callable function backed by this handler.
    pub fn into_function(self) -> ScriptFunction {
        let name = self.native.name().to_owned();
        ScriptFunction::new(&name, self)
    }
}

impl ScriptHandler for ApiHandler {
    #[cfg_attr(feature = "profiling", profiling::function)]
    fn execute(&self, name: &str, args: &[ScriptValue]) -> HandlerResult {
        trace!(function = name, argc = args.len(), "native call");
        HandlerResult::Handled(dispatch(&self.native, args))
    }
}
