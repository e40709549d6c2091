// Binding error types and constants

use crate::error::{EngineError, ErrorCode};
use flutter_rust_bridge::frb;
use log::error;
use std::fmt;

/// Binding error code constants exposed to Dart via FFI
///
/// Error code range: 1001-1005
#[frb(unignore)]
pub struct BindingErrorCodes {}

#[frb]
impl BindingErrorCodes {
    /// Too few arguments supplied to an operation
    pub const ARGUMENT_COUNT: i32 = 1001;

    /// Argument does not have the required type
    pub const ARGUMENT_TYPE: i32 = 1002;

    /// No method with that name on the facade
    pub const UNKNOWN_METHOD: i32 = 1003;

    /// Engine reported a failure
    pub const ENGINE: i32 = 1004;

    /// Mutex guarding the facade was poisoned
    pub const LOCK_POISONED: i32 = 1005;

    /// Get ARGUMENT_COUNT error code
    #[flutter_rust_bridge::frb(sync, getter)]
    pub fn argument_count() -> i32 {
        Self::ARGUMENT_COUNT
    }

    /// Get ARGUMENT_TYPE error code
    #[flutter_rust_bridge::frb(sync, getter)]
    pub fn argument_type() -> i32 {
        Self::ARGUMENT_TYPE
    }

    /// Get UNKNOWN_METHOD error code
    #[flutter_rust_bridge::frb(sync, getter)]
    pub fn unknown_method() -> i32 {
        Self::UNKNOWN_METHOD
    }

    /// Get ENGINE error code
    #[flutter_rust_bridge::frb(sync, getter)]
    pub fn engine() -> i32 {
        Self::ENGINE
    }

    /// Get LOCK_POISONED error code
    #[flutter_rust_bridge::frb(sync, getter)]
    pub fn lock_poisoned() -> i32 {
        Self::LOCK_POISONED
    }
}

/// Log a binding error with structured context
///
/// Logs the numeric code, the failing component and the message so host-side
/// exceptions can be matched against native logs.
pub fn log_binding_error(err: &BindingError, context: &str) {
    error!(
        "Binding error in {}: code={}, component=DrumKitFacade, message={}",
        context,
        err.code(),
        err.message()
    );
}

/// Errors surfaced to the host at the binding boundary
///
/// Argument errors are raised before the engine is touched. Engine errors
/// are propagated unchanged inside [`BindingError::Engine`].
#[derive(Debug, Clone, PartialEq)]
pub enum BindingError {
    /// Fewer arguments than the operation requires
    ArgumentCount {
        method: String,
        expected: usize,
        received: usize,
    },

    /// Argument at the checked position has the wrong type
    ArgumentType {
        method: String,
        expected: String,
        received: String,
    },

    /// Method name is not part of the facade
    UnknownMethod { method: String },

    /// Failure inside the engine
    Engine { source: EngineError },

    /// Mutex/RwLock was poisoned
    LockPoisoned { component: String },
}

impl ErrorCode for BindingError {
    fn code(&self) -> i32 {
        match self {
            BindingError::ArgumentCount { .. } => BindingErrorCodes::ARGUMENT_COUNT,
            BindingError::ArgumentType { .. } => BindingErrorCodes::ARGUMENT_TYPE,
            BindingError::UnknownMethod { .. } => BindingErrorCodes::UNKNOWN_METHOD,
            BindingError::Engine { .. } => BindingErrorCodes::ENGINE,
            BindingError::LockPoisoned { .. } => BindingErrorCodes::LOCK_POISONED,
        }
    }

    fn message(&self) -> String {
        match self {
            BindingError::ArgumentCount {
                method,
                expected,
                received,
            } => format!(
                "Wrong number of arguments for {}: expected {}, got {}",
                method, expected, received
            ),
            BindingError::ArgumentType {
                method,
                expected,
                received,
            } => format!(
                "Wrong argument type for {}: expected {}, got {}",
                method, expected, received
            ),
            BindingError::UnknownMethod { method } => format!("Unknown method: {}", method),
            BindingError::Engine { source } => source.message(),
            BindingError::LockPoisoned { component } => format!("Lock poisoned on {}", component),
        }
    }
}

impl fmt::Display for BindingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BindingError::{:?} (code {}): {}",
            self,
            self.code(),
            self.message()
        )
    }
}

impl std::error::Error for BindingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BindingError::Engine { source } => Some(source),
            _ => None,
        }
    }
}

impl From<EngineError> for BindingError {
    fn from(source: EngineError) -> Self {
        BindingError::Engine { source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binding_error_codes() {
        assert_eq!(
            BindingError::ArgumentCount {
                method: "enableMetronome".to_string(),
                expected: 1,
                received: 0
            }
            .code(),
            BindingErrorCodes::ARGUMENT_COUNT
        );
        assert_eq!(
            BindingError::ArgumentType {
                method: "enableMetronome".to_string(),
                expected: "boolean".to_string(),
                received: "string".to_string()
            }
            .code(),
            BindingErrorCodes::ARGUMENT_TYPE
        );
        assert_eq!(
            BindingError::UnknownMethod {
                method: "play".to_string()
            }
            .code(),
            BindingErrorCodes::UNKNOWN_METHOD
        );
        assert_eq!(
            BindingError::LockPoisoned {
                component: "test".to_string()
            }
            .code(),
            BindingErrorCodes::LOCK_POISONED
        );
    }

    #[test]
    fn test_binding_error_messages() {
        let err = BindingError::ArgumentCount {
            method: "changeClickVolume".to_string(),
            expected: 1,
            received: 0,
        };
        assert_eq!(
            err.message(),
            "Wrong number of arguments for changeClickVolume: expected 1, got 0"
        );

        let err = BindingError::ArgumentType {
            method: "DrumKit".to_string(),
            expected: "string".to_string(),
            received: "number".to_string(),
        };
        assert!(err.message().starts_with("Wrong argument type"));
        assert!(err.message().contains("expected string"));
    }

    #[test]
    fn test_engine_error_conversion() {
        let engine_err = EngineError::DataLocationNotFound {
            path: "/nowhere".to_string(),
        };
        let err: BindingError = engine_err.clone().into();

        assert_eq!(err.code(), BindingErrorCodes::ENGINE);
        assert_eq!(err.message(), engine_err.message());
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_binding_error_display() {
        let err = BindingError::UnknownMethod {
            method: "play".to_string(),
        };
        let display = format!("{}", err);
        assert!(display.contains("BindingError"));
        assert!(display.contains(&err.code().to_string()));
    }

    #[test]
    fn test_error_code_getters() {
        assert_eq!(BindingErrorCodes::argument_count(), 1001);
        assert_eq!(BindingErrorCodes::argument_type(), 1002);
        assert_eq!(BindingErrorCodes::unknown_method(), 1003);
        assert_eq!(BindingErrorCodes::engine(), 1004);
        assert_eq!(BindingErrorCodes::lock_poisoned(), 1005);
    }
}
