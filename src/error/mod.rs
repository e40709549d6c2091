// Error types for the drum-kit bridge
//
// This module defines the errors raised at the binding boundary and by engine
// backends, each carrying a numeric code suitable for FFI communication.

mod binding;
mod engine;

pub use binding::{log_binding_error, BindingError, BindingErrorCodes};
pub use engine::{log_engine_error, EngineError, EngineErrorCodes};

/// Error codes for structured error reporting
///
/// This trait provides a standard way to get error codes and messages
/// from custom error types, enabling consistent error handling across
/// the FFI boundary.
pub trait ErrorCode {
    /// Get the numeric error code
    fn code(&self) -> i32;

    /// Get the human-readable error message
    fn message(&self) -> String;
}
