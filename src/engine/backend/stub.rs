use std::sync::{Arc, Mutex};

use crate::error::EngineError;

use super::DrumKitEngine;

/// Call received by a [`StubEngine`], in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub enum StubCall {
    Start,
    Stop,
    EnableMetronome(bool),
    ChangeClickVolume(u32),
    KitsNames,
}

#[derive(Debug, Default)]
struct StubState {
    calls: Vec<StubCall>,
    started: bool,
    metronome_enabled: bool,
    click_volume: u32,
}

/// Read-only view into a [`StubEngine`] that outlives the facade owning it.
#[derive(Clone, Default)]
pub struct StubProbe {
    state: Arc<Mutex<StubState>>,
}

impl StubProbe {
    pub fn calls(&self) -> Vec<StubCall> {
        self.state.lock().map(|s| s.calls.clone()).unwrap_or_default()
    }

    pub fn is_started(&self) -> bool {
        self.state.lock().map(|s| s.started).unwrap_or(false)
    }

    pub fn is_metronome_enabled(&self) -> bool {
        self.state.lock().map(|s| s.metronome_enabled).unwrap_or(false)
    }

    pub fn click_volume(&self) -> u32 {
        self.state.lock().map(|s| s.click_volume).unwrap_or(0)
    }
}

/// Deterministic engine used for tests and tooling.
///
/// Holds a fixed kit list and records every call into a shared [`StubProbe`].
pub struct StubEngine {
    data_location: String,
    kits: Vec<String>,
    fail_start: bool,
    probe: StubProbe,
}

impl StubEngine {
    pub fn new<I, S>(data_location: &str, kits: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            data_location: data_location.to_string(),
            kits: kits.into_iter().map(Into::into).collect(),
            fail_start: false,
            probe: StubProbe::default(),
        }
    }

    /// Make `start` fail with `EngineError::Unavailable`.
    pub fn failing_start(mut self) -> Self {
        self.fail_start = true;
        self
    }

    pub fn probe(&self) -> StubProbe {
        self.probe.clone()
    }

    fn with_state<T>(&self, f: impl FnOnce(&mut StubState) -> T) -> Result<T, EngineError> {
        let mut guard = self
            .probe
            .state
            .lock()
            .map_err(|_| EngineError::Unavailable {
                reason: "stub state poisoned".to_string(),
            })?;
        Ok(f(&mut guard))
    }
}

impl DrumKitEngine for StubEngine {
    fn start(&mut self) -> Result<(), EngineError> {
        let fail = self.fail_start;
        self.with_state(|s| {
            s.calls.push(StubCall::Start);
            if !fail {
                s.started = true;
            }
        })?;
        if fail {
            return Err(EngineError::Unavailable {
                reason: "stub start failure".to_string(),
            });
        }
        Ok(())
    }

    fn stop(&mut self) -> Result<(), EngineError> {
        self.with_state(|s| {
            s.calls.push(StubCall::Stop);
            s.started = false;
        })
    }

    fn is_started(&self) -> bool {
        self.probe.is_started()
    }

    fn data_location(&self) -> &str {
        &self.data_location
    }

    fn enable_metronome(&mut self, enabled: bool) -> Result<(), EngineError> {
        self.with_state(|s| {
            s.calls.push(StubCall::EnableMetronome(enabled));
            s.metronome_enabled = enabled;
        })
    }

    fn is_metronome_enabled(&self) -> bool {
        self.probe.is_metronome_enabled()
    }

    fn change_click_volume(&mut self, volume: u32) -> Result<(), EngineError> {
        self.with_state(|s| {
            s.calls.push(StubCall::ChangeClickVolume(volume));
            s.click_volume = volume;
        })
    }

    fn click_volume(&self) -> u32 {
        self.probe.click_volume()
    }

    fn kits_names(&self) -> Result<Vec<String>, EngineError> {
        self.with_state(|s| s.calls.push(StubCall::KitsNames))?;
        Ok(self.kits.clone())
    }
}
