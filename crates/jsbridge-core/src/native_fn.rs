//! Type-erased native callables.

use std::fmt;
use std::rc::Rc;

use crate::call::NativeFunction;
use crate::decode::Arguments;
use crate::error::NativeError;
use crate::value::ScriptValue;

/// Type-erased native function.
///
/// Wraps either an adapted native function pointer or a custom closure, so
/// bindings of every signature are stored uniformly. Built once per
/// registered name; clones share the callable.
#[derive(Clone)]
pub struct NativeFn {
    name: Rc<str>,
    inner: Rc<dyn NativeCallable>,
}

impl NativeFn {
    /// Wrap a custom binding.
    pub fn new<F>(name: &str, f: F) -> Self
    where
        F: Fn(&Arguments<'_>) -> Result<ScriptValue, NativeError> + 'static,
    {
        Self::from_callable(name, f)
    }

    /// Wrap a native function pointer through the generic call adapter.
    pub fn from_function<F: NativeFunction>(name: &str, f: F) -> Self {
        Self::from_callable(name, Adapted(f))
    }

    pub fn from_callable<F: NativeCallable + 'static>(name: &str, f: F) -> Self {
        Self {
            name: Rc::from(name),
            inner: Rc::new(f),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Call this function with decoded-on-demand arguments.
    pub fn call(&self, args: &Arguments<'_>) -> Result<ScriptValue, NativeError> {
        self.inner.call(args)
    }
}

impl fmt::Debug for NativeFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeFn")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Trait for callable native bindings.
pub trait NativeCallable {
    fn call(&self, args: &Arguments<'_>) -> Result<ScriptValue, NativeError>;
}

// Closures taking the argument list
impl<F> NativeCallable for F
where
    F: Fn(&Arguments<'_>) -> Result<ScriptValue, NativeError>,
{
    fn call(&self, args: &Arguments<'_>) -> Result<ScriptValue, NativeError> {
        (self)(args)
    }
}

struct Adapted<F>(F);

impl<F: NativeFunction> NativeCallable for Adapted<F> {
    fn call(&self, args: &Arguments<'_>) -> Result<ScriptValue, NativeError> {
        self.0.invoke(args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bumpalo::Bump;

    extern "C" fn double(x: f32) -> f32 {
        x * 2.0
    }

    fn run(f: &NativeFn, values: &[ScriptValue]) -> Result<ScriptValue, NativeError> {
        let arena = Bump::new();
        f.call(&Arguments::new(values, &arena))
    }

    #[test]
    fn adapted_pointer() {
        let f = NativeFn::from_function("double", double as extern "C" fn(f32) -> f32);
        assert_eq!(f.name(), "double");
        assert_eq!(run(&f, &[1.5.into()]), Ok(ScriptValue::from(3.0)));
    }

    #[test]
    fn closure() {
        let f = NativeFn::new("argc", |args: &Arguments<'_>| {
            Ok(ScriptValue::from(args.len() as u32))
        });
        assert_eq!(run(&f, &[1.into(), 2.into()]), Ok(ScriptValue::from(2)));
    }

    #[test]
    fn clones_share_the_callable() {
        let f = NativeFn::new("fail", |_: &Arguments<'_>| Err(NativeError::engine("boom")));
        let g = f.clone();
        assert!(Rc::ptr_eq(&f.inner, &g.inner));
        assert_eq!(run(&g, &[]), Err(NativeError::engine("boom")));
    }
}
