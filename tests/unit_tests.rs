//! Integration tests for the assembled bridge.
//!
//! The engine is replaced by `extern "C"` mocks that record into thread-local
//! state. Every call goes through the same dispatch boundary script uses.

mod unit;
