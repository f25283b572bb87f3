//! Error types for the script boundary.
//!
//! Every failure raised while servicing a script call is one of these. None of
//! them ever reach the script environment directly: the dispatch boundary turns
//! them into a [`ScriptException`] carrying a human-readable message.
//!
//! ## Error Hierarchy
//!
//! ```text
//! NativeError (anything a bound function can signal)
//! ├── DecodeError  - a script argument could not become the native parameter
//! ├── EncodeError  - a native result could not become a script value
//! ├── Validation   - a custom binding rejected its arguments
//! ├── NotImplemented
//! └── Engine       - the native layer reported a failure
//!
//! ScriptException (what the script observes)
//! ```

use std::fmt;

use thiserror::Error;

// ============================================================================
// Decode Errors
// ============================================================================

/// Errors raised while decoding a positional script argument.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    /// A mandatory argument was not supplied.
    #[error("argument {index} is missing, expected {expected}")]
    Missing { index: usize, expected: &'static str },

    /// The argument has the wrong script kind.
    #[error("argument {index} must be {expected}, got {actual}")]
    TypeMismatch {
        index: usize,
        expected: &'static str,
        actual: &'static str,
    },

    /// A fixed-size geometric argument was an array of the wrong length.
    #[error("argument {index} must be an array of {expected} numbers for {type_name}, got {actual}")]
    ArrayLength {
        index: usize,
        type_name: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A string slot received something other than a string.
    #[error("Argument must be a string")]
    NotAString { index: usize },

    /// A matrix slot received something other than 16 numbers.
    #[error("Cannot get matrix 4x4 from argument")]
    NotAMatrix { index: usize },

    /// A rect slot received something other than 4 numbers.
    #[error("Argument is not a rect")]
    NotARect { index: usize },

    /// A struct slot received something other than a plain object.
    #[error("argument {index} must be a {type_name} object")]
    NotAnObject {
        index: usize,
        type_name: &'static str,
    },

    /// A user-created object carried data this bridge did not attach.
    #[error("Value is not a user object")]
    NotAUserObject,

    /// An integer did not name a variant of the expected enum.
    #[error("argument {index}: {value} is not a valid {type_name}")]
    InvalidEnum {
        index: usize,
        type_name: &'static str,
        value: i64,
    },

    /// The value has no dynamic data representation.
    #[error("Dynamic data type not supported")]
    UnsupportedDynamic { actual: &'static str },
}

impl DecodeError {
    /// Index of the offending argument, when the error is tied to one.
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::Missing { index, .. }
            | Self::TypeMismatch { index, .. }
            | Self::ArrayLength { index, .. }
            | Self::NotAString { index }
            | Self::NotAMatrix { index }
            | Self::NotARect { index }
            | Self::NotAnObject { index, .. }
            | Self::InvalidEnum { index, .. } => Some(*index),
            Self::NotAUserObject | Self::UnsupportedDynamic { .. } => None,
        }
    }
}

// ============================================================================
// Encode Errors
// ============================================================================

/// Errors raised while encoding a native value for script.
///
/// Well-typed results always encode; only tagged dynamic items handed back
/// by the native layer can be inconsistent.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EncodeError {
    /// The dynamic item carried a tag outside the known set.
    #[error("Dynamic data type {0} not supported")]
    UnsupportedDynamicTag(u32),

    /// A dynamic item with a payload-carrying tag had a null payload.
    #[error("dynamic {tag} item has no payload")]
    MissingPayload { tag: &'static str },
}

// ============================================================================
// Native Errors
// ============================================================================

/// A failure signaled by a bound native function.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NativeError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Encode(#[from] EncodeError),

    /// Arguments were decoded but rejected by the binding.
    #[error("{0}")]
    Validation(String),

    /// The entry point is registered but has no implementation.
    #[error("{0} is not implemented")]
    NotImplemented(&'static str),

    /// The native layer reported a failure.
    #[error("{0}")]
    Engine(String),
}

impl NativeError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn engine(message: impl Into<String>) -> Self {
        Self::Engine(message.into())
    }
}

// ============================================================================
// Property Errors
// ============================================================================

/// A property write or delete rejected by the property's attributes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropertyError {
    #[error("property '{0}' is read-only")]
    ReadOnly(String),

    #[error("property '{0}' cannot be deleted")]
    NotDeletable(String),
}

// ============================================================================
// Script Exception
// ============================================================================

/// The exception delivered to script when a call fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptException {
    message: String,
}

impl ScriptException {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the exception for a failed call to `name`.
    pub fn failed_call(name: &str, error: &NativeError) -> Self {
        Self::new(format!("Failed to execute `{name}`.\n{error}"))
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ScriptException {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ScriptException {}
