//! Backend abstractions for the drum-kit engine.

use crate::error::EngineError;

/// Trait implemented by drum-kit engines driven through the facade.
///
/// An engine is created once from a data location and owned exclusively by
/// one facade. Transport, metronome and kit state live here; the facade
/// never caches any of it.
pub trait DrumKitEngine: Send {
    fn start(&mut self) -> Result<(), EngineError>;
    fn stop(&mut self) -> Result<(), EngineError>;
    fn is_started(&self) -> bool;

    /// Path the engine was initialized with.
    fn data_location(&self) -> &str;

    fn enable_metronome(&mut self, enabled: bool) -> Result<(), EngineError>;
    fn is_metronome_enabled(&self) -> bool;

    fn change_click_volume(&mut self, volume: u32) -> Result<(), EngineError>;
    fn click_volume(&self) -> u32;

    /// Names of the available kits, in the engine's own order.
    fn kits_names(&self) -> Result<Vec<String>, EngineError>;
}

mod directory;
pub use directory::DirectoryEngine;

mod stub;
pub use stub::{StubCall, StubEngine, StubProbe};
