// Public API for flutter_rust_bridge integration
// This module exposes the drum-kit facade to the host as an opaque class plus
// a few free functions that do not need an instance.

#![allow(dead_code)] // FFI functions are called from Dart, not detected by Rust analyzer

use std::sync::{Mutex, MutexGuard};

use once_cell::sync::Lazy;
use serde_json::Value;

use crate::config::BridgeConfig;
use crate::error::{log_binding_error, BindingError};
use crate::facade::DrumKit;

// Re-export error code constant holders for FFI exposure
pub use crate::error::{BindingErrorCodes, EngineErrorCodes};

/// Process-wide bridge configuration, loaded on first use.
static BRIDGE_CONFIG: Lazy<BridgeConfig> = Lazy::new(BridgeConfig::load);

/// Access the process-wide configuration.
pub fn bridge_config() -> &'static BridgeConfig {
    &BRIDGE_CONFIG
}

/// Get the version of the drum-kit engine
///
/// Static: does not require a constructed `DrumKitApi`.
#[flutter_rust_bridge::frb(sync)]
pub fn get_version() -> String {
    DrumKit::version().to_string()
}

/// Install the native log subscriber using the configured level.
#[flutter_rust_bridge::frb(sync)]
pub fn init_bridge_logging() {
    crate::init_logging(bridge_config().logging.level_filter());
}

/// Get BindingErrorCodes as a structured object with all error code constants
#[flutter_rust_bridge::frb(sync)]
pub fn get_binding_error_codes() -> BindingErrorCodes {
    BindingErrorCodes {}
}

/// Get EngineErrorCodes as a structured object with all error code constants
#[flutter_rust_bridge::frb(sync)]
pub fn get_engine_error_codes() -> EngineErrorCodes {
    EngineErrorCodes {}
}

/// Host-side handle owning one drum-kit facade.
///
/// The bridge hands out shared references, so the facade sits behind a
/// mutex. Calls are still expected to arrive one at a time.
#[flutter_rust_bridge::frb(opaque)]
pub struct DrumKitApi {
    inner: Mutex<DrumKit>,
}

impl DrumKitApi {
    /// Open a drum kit on `data_location`
    ///
    /// # Errors
    /// - Engine cannot open the data location
    #[flutter_rust_bridge::frb(sync)]
    pub fn new(data_location: String) -> Result<DrumKitApi, BindingError> {
        let kit = DrumKit::open(&data_location, &bridge_config().engine).map_err(|err| {
            log_binding_error(&err, "DrumKitApi::new");
            err
        })?;
        Ok(Self::from_facade(kit))
    }

    /// Construct from a JSON array of untyped host arguments
    ///
    /// # Errors
    /// - `args_json` is not a JSON array (ArgumentType)
    /// - Missing data location (ArgumentCount) or not a string (ArgumentType)
    /// - Engine cannot open the data location
    #[flutter_rust_bridge::frb(sync)]
    pub fn construct(args_json: String) -> Result<DrumKitApi, BindingError> {
        let args = parse_args(crate::facade::CLASS_NAME, &args_json)?;
        let kit = DrumKit::construct(&args, &bridge_config().engine)?;
        Ok(Self::from_facade(kit))
    }

    #[flutter_rust_bridge::frb(ignore)]
    pub fn from_facade(kit: DrumKit) -> Self {
        Self {
            inner: Mutex::new(kit),
        }
    }

    /// Call a facade method by host name with a JSON array of arguments
    ///
    /// Returns the result encoded as JSON (`null` for operations without one).
    #[flutter_rust_bridge::frb(sync)]
    pub fn invoke(&self, method: String, args_json: String) -> Result<String, BindingError> {
        let args = parse_args(&method, &args_json)?;
        let result = self.lock_kit()?.invoke(&method, &args)?;
        Ok(result.to_string())
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn start(&self) -> Result<(), BindingError> {
        self.lock_kit()?.start()
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn stop(&self) -> Result<(), BindingError> {
        self.lock_kit()?.stop()
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn is_started(&self) -> Result<bool, BindingError> {
        Ok(self.lock_kit()?.is_started())
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn get_data_location(&self) -> Result<String, BindingError> {
        Ok(self.lock_kit()?.get_data_location())
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn get_version(&self) -> String {
        DrumKit::version().to_string()
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn enable_metronome(&self, enabled: bool) -> Result<(), BindingError> {
        self.lock_kit()?.enable_metronome(enabled)
    }

    /// Set the metronome click volume (truncated to an unsigned 32-bit integer)
    #[flutter_rust_bridge::frb(sync)]
    pub fn change_click_volume(&self, level: f64) -> Result<(), BindingError> {
        self.lock_kit()?.change_click_volume(level)
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn get_kits_names(&self) -> Result<Vec<String>, BindingError> {
        self.lock_kit()?.get_kits_names()
    }

    /// Safely acquire the facade lock
    ///
    /// Returns MutexGuard or BindingError::LockPoisoned on lock failure
    fn lock_kit(&self) -> Result<MutexGuard<'_, DrumKit>, BindingError> {
        self.inner.lock().map_err(|_| {
            let err = BindingError::LockPoisoned {
                component: "drum_kit".to_string(),
            };
            log_binding_error(&err, "lock_kit");
            err
        })
    }
}

/// Decode a JSON argument list coming from the host.
fn parse_args(method: &str, args_json: &str) -> Result<Vec<Value>, BindingError> {
    let received = match serde_json::from_str::<Value>(args_json) {
        Ok(Value::Array(values)) => return Ok(values),
        Ok(other) => crate::facade::args::type_name(&other),
        Err(_) => "invalid JSON",
    };

    let err = BindingError::ArgumentType {
        method: method.to_string(),
        expected: "argument array".to_string(),
        received: received.to_string(),
    };
    log_binding_error(&err, method);
    Err(err)
}

#[cfg(test)]
mod tests;
