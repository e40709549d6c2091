// Engine error types and constants

use crate::error::ErrorCode;
use flutter_rust_bridge::frb;
use log::error;
use std::fmt;

/// Engine error code constants exposed to Dart via FFI
///
/// Error code range: 2001-2003
#[frb(unignore)]
pub struct EngineErrorCodes {}

#[frb]
impl EngineErrorCodes {
    /// Data location does not exist or is not a directory
    pub const DATA_LOCATION_NOT_FOUND: i32 = 2001;

    /// Kits directory exists but could not be listed
    pub const KITS_UNREADABLE: i32 = 2002;

    /// Engine refused the request
    pub const UNAVAILABLE: i32 = 2003;

    /// Get DATA_LOCATION_NOT_FOUND error code
    #[flutter_rust_bridge::frb(sync, getter)]
    pub fn data_location_not_found() -> i32 {
        Self::DATA_LOCATION_NOT_FOUND
    }

    /// Get KITS_UNREADABLE error code
    #[flutter_rust_bridge::frb(sync, getter)]
    pub fn kits_unreadable() -> i32 {
        Self::KITS_UNREADABLE
    }

    /// Get UNAVAILABLE error code
    #[flutter_rust_bridge::frb(sync, getter)]
    pub fn unavailable() -> i32 {
        Self::UNAVAILABLE
    }
}

/// Log an engine error with the operation that raised it.
pub fn log_engine_error(err: &EngineError, context: &str) {
    error!(
        "Engine error in {}: code={}, component=DrumKitEngine, message={}",
        context,
        err.code(),
        err.message()
    );
}

/// Errors raised by drum-kit engine backends.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineError {
    /// Data location is missing or not a directory
    DataLocationNotFound { path: String },

    /// Kits directory could not be read
    KitsUnreadable { path: String, reason: String },

    /// Engine could not carry out the request
    Unavailable { reason: String },
}

impl ErrorCode for EngineError {
    fn code(&self) -> i32 {
        match self {
            EngineError::DataLocationNotFound { .. } => EngineErrorCodes::DATA_LOCATION_NOT_FOUND,
            EngineError::KitsUnreadable { .. } => EngineErrorCodes::KITS_UNREADABLE,
            EngineError::Unavailable { .. } => EngineErrorCodes::UNAVAILABLE,
        }
    }

    fn message(&self) -> String {
        match self {
            EngineError::DataLocationNotFound { path } => {
                format!("Data location not found: {}", path)
            }
            EngineError::KitsUnreadable { path, reason } => {
                format!("Failed to read kits from {}: {}", path, reason)
            }
            EngineError::Unavailable { reason } => format!("Engine unavailable: {}", reason),
        }
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "EngineError::{:?} (code {}): {}",
            self,
            self.code(),
            self.message()
        )
    }
}

impl std::error::Error for EngineError {}
