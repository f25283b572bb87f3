//! Generic call adaptation for native function pointers.
//!
//! [`NativeFunction`] is implemented for `extern "C" fn` and Rust `fn`
//! pointers of up to nine parameters whose parameters implement [`FromArg`]
//! and whose result implements [`IntoScript`]. Arguments are decoded left to
//! right; the first decode failure aborts the call before the native function
//! runs.
//!
//! # Example
//!
//! ```ignore
//! extern "C" fn num_units(world: *mut CApiWorld) -> u32 { ... }
//!
//! let f: extern "C" fn(*mut CApiWorld) -> u32 = num_units;
//! let value = f.invoke(&args)?;
//! ```

use std::fmt;
use std::marker::PhantomData;

use crate::decode::{Arguments, FromArg};
use crate::encode::{IntoScript, list_to_script};
use crate::error::NativeError;
use crate::value::ScriptValue;

/// A native function callable with script arguments.
pub trait NativeFunction: Copy + 'static {
    fn invoke(self, args: &Arguments<'_>) -> Result<ScriptValue, NativeError>;
}

macro_rules! impl_native_function {
    ($($param:ident $arg:ident $index:tt),*) => {
        impl<R, $($param,)*> NativeFunction for extern "C" fn($($param),*) -> R
        where
            R: IntoScript + 'static,
            $($param: FromArg + 'static,)*
        {
            #[allow(unused_variables)]
            fn invoke(self, args: &Arguments<'_>) -> Result<ScriptValue, NativeError> {
                $(let $arg = args.get::<$param>($index)?;)*
                Ok(self($($arg),*).into_script())
            }
        }

        impl<R, $($param,)*> NativeFunction for fn($($param),*) -> R
        where
            R: IntoScript + 'static,
            $($param: FromArg + 'static,)*
        {
            #[allow(unused_variables)]
            fn invoke(self, args: &Arguments<'_>) -> Result<ScriptValue, NativeError> {
                $(let $arg = args.get::<$param>($index)?;)*
                Ok(self($($arg),*).into_script())
            }
        }
    };
}

impl_native_function!();
impl_native_function!(P0 a0 0);
impl_native_function!(P0 a0 0, P1 a1 1);
impl_native_function!(P0 a0 0, P1 a1 1, P2 a2 2);
impl_native_function!(P0 a0 0, P1 a1 1, P2 a2 2, P3 a3 3);
impl_native_function!(P0 a0 0, P1 a1 1, P2 a2 2, P3 a3 3, P4 a4 4);
impl_native_function!(P0 a0 0, P1 a1 1, P2 a2 2, P3 a3 3, P4 a4 4, P5 a5 5);
impl_native_function!(P0 a0 0, P1 a1 1, P2 a2 2, P3 a3 3, P4 a4 4, P5 a5 5, P6 a6 6);
impl_native_function!(
    P0 a0 0, P1 a1 1, P2 a2 2, P3 a3 3, P4 a4 4, P5 a5 5, P6 a6 6, P7 a7 7
);
impl_native_function!(
    P0 a0 0, P1 a1 1, P2 a2 2, P3 a3 3, P4 a4 4, P5 a5 5, P6 a6 6, P7 a7 7, P8 a8 8
);

// ============================================================================
// Count-pointer lists
// ============================================================================

/// A native function returning `count` items through an out-parameter.
///
/// The function is called once; it writes the item count and returns a
/// pointer to that many contiguous items, each encoded with its scalar
/// encoder.
pub struct CountedList<T> {
    f: extern "C" fn(*mut u32) -> *const T,
    _marker: PhantomData<fn() -> T>,
}

impl<T> CountedList<T> {
    pub fn new(f: extern "C" fn(*mut u32) -> *const T) -> Self {
        Self {
            f,
            _marker: PhantomData,
        }
    }
}

impl<T> Clone for CountedList<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for CountedList<T> {}

impl<T> fmt::Debug for CountedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CountedList").finish_non_exhaustive()
    }
}

impl<T: Copy + IntoScript + 'static> NativeFunction for CountedList<T> {
    fn invoke(self, _args: &Arguments<'_>) -> Result<ScriptValue, NativeError> {
        let mut count = 0u32;
        let items = (self.f)(&mut count);
        // SAFETY: the engine returns `count` items at `items`, or null
        Ok(unsafe { list_to_script(items, count as usize) })
    }
}
