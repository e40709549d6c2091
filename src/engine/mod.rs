//! Drum-kit engine backends.
//!
//! The facade talks to engines only through [`DrumKitEngine`]. The default
//! backend is [`DirectoryEngine`]; [`StubEngine`] is the recording double used
//! by tests and tooling.

pub mod backend;

pub use backend::{DirectoryEngine, DrumKitEngine, StubCall, StubEngine, StubProbe};

/// Version of the engine build. Does not depend on any engine instance.
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");
