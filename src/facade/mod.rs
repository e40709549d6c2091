//! Binding facade over one drum-kit engine.
//!
//! [`DrumKit`] exclusively owns a single engine for its whole lifetime and
//! forwards every operation to it. Nothing is cached here: run state, kit
//! names and metronome settings are always read back from the engine.
//!
//! Two call shapes are offered. The typed methods below suit statically-typed
//! hosts. [`DrumKit::construct`] and [`DrumKit::invoke`] (in `dispatch`)
//! accept untyped argument lists and validate them at runtime.

use log::info;

use crate::config::EngineConfig;
use crate::engine::{DirectoryEngine, DrumKitEngine, ENGINE_VERSION};
use crate::error::BindingError;

pub mod args;
mod dispatch;

pub use args::to_uint32;
pub use dispatch::{Method, CLASS_NAME};

/// Facade owning one engine instance.
pub struct DrumKit {
    engine: Box<dyn DrumKitEngine>,
}

impl DrumKit {
    /// Open the default [`DirectoryEngine`] on `data_location`.
    ///
    /// # Errors
    /// - `BindingError::Engine` if the engine cannot be created
    pub fn open(data_location: &str, config: &EngineConfig) -> Result<Self, BindingError> {
        let engine = DirectoryEngine::new(data_location, config)?;
        Ok(Self::with_engine(Box::new(engine)))
    }

    /// Wrap an already constructed engine.
    pub fn with_engine(engine: Box<dyn DrumKitEngine>) -> Self {
        info!(
            "[DrumKit] Facade created for data location {}",
            engine.data_location()
        );
        Self { engine }
    }

    /// Static engine version. Identical for every instance.
    pub fn version() -> &'static str {
        ENGINE_VERSION
    }

    pub fn start(&mut self) -> Result<(), BindingError> {
        self.engine.start()?;
        Ok(())
    }

    pub fn stop(&mut self) -> Result<(), BindingError> {
        self.engine.stop()?;
        Ok(())
    }

    pub fn is_started(&self) -> bool {
        self.engine.is_started()
    }

    pub fn get_data_location(&self) -> String {
        self.engine.data_location().to_string()
    }

    pub fn get_version(&self) -> String {
        Self::version().to_string()
    }

    pub fn enable_metronome(&mut self, enabled: bool) -> Result<(), BindingError> {
        self.engine.enable_metronome(enabled)?;
        Ok(())
    }

    /// Set the click volume from a host number (see [`to_uint32`]).
    pub fn change_click_volume(&mut self, level: f64) -> Result<(), BindingError> {
        self.engine.change_click_volume(to_uint32(level))?;
        Ok(())
    }

    pub fn get_kits_names(&self) -> Result<Vec<String>, BindingError> {
        Ok(self.engine.kits_names()?)
    }
}

impl Drop for DrumKit {
    fn drop(&mut self) {
        info!(
            "[DrumKit] Releasing engine for data location {}",
            self.engine.data_location()
        );
    }
}
