use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::config::EngineConfig;
use crate::error::{log_engine_error, EngineError};

use super::DrumKitEngine;

/// Engine backed by a data location on disk.
///
/// Kits are discovered from `<data>/<kits_directory>/*.<kit_extension>` each
/// time they are requested, named after the file stem and reported in file
/// name order. Transport and metronome state are tracked in memory; no audio
/// I/O happens here.
pub struct DirectoryEngine {
    data_location: String,
    kits_dir: PathBuf,
    kit_extension: String,
    started: bool,
    metronome_enabled: bool,
    click_volume: u32,
}

impl DirectoryEngine {
    /// Open the engine on `data_location`.
    ///
    /// # Errors
    /// - `DataLocationNotFound` if the path is not an existing directory
    pub fn new(data_location: &str, config: &EngineConfig) -> Result<Self, EngineError> {
        let root = Path::new(data_location);
        if !root.is_dir() {
            let err = EngineError::DataLocationNotFound {
                path: data_location.to_string(),
            };
            log_engine_error(&err, "DirectoryEngine::new");
            return Err(err);
        }

        info!("[DirectoryEngine] Opened data location {}", data_location);

        Ok(Self {
            data_location: data_location.to_string(),
            kits_dir: root.join(&config.kits_directory),
            kit_extension: config.kit_extension.clone(),
            started: false,
            metronome_enabled: false,
            click_volume: 0,
        })
    }

    fn is_kit_file(&self, path: &Path) -> bool {
        path.is_file()
            && path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case(&self.kit_extension))
    }

    fn unreadable(&self, err: std::io::Error) -> EngineError {
        let err = EngineError::KitsUnreadable {
            path: self.kits_dir.display().to_string(),
            reason: err.to_string(),
        };
        log_engine_error(&err, "kits_names");
        err
    }
}

impl DrumKitEngine for DirectoryEngine {
    fn start(&mut self) -> Result<(), EngineError> {
        if !self.started {
            info!("[DirectoryEngine] Started");
            self.started = true;
        }
        Ok(())
    }

    fn stop(&mut self) -> Result<(), EngineError> {
        if self.started {
            info!("[DirectoryEngine] Stopped");
            self.started = false;
        }
        Ok(())
    }

    fn is_started(&self) -> bool {
        self.started
    }

    fn data_location(&self) -> &str {
        &self.data_location
    }

    fn enable_metronome(&mut self, enabled: bool) -> Result<(), EngineError> {
        debug!("[DirectoryEngine] Metronome enabled={}", enabled);
        self.metronome_enabled = enabled;
        Ok(())
    }

    fn is_metronome_enabled(&self) -> bool {
        self.metronome_enabled
    }

    fn change_click_volume(&mut self, volume: u32) -> Result<(), EngineError> {
        debug!("[DirectoryEngine] Click volume={}", volume);
        self.click_volume = volume;
        Ok(())
    }

    fn click_volume(&self) -> u32 {
        self.click_volume
    }

    fn kits_names(&self) -> Result<Vec<String>, EngineError> {
        if !self.kits_dir.exists() {
            return Ok(Vec::new());
        }

        let mut files = Vec::new();
        for entry in fs::read_dir(&self.kits_dir).map_err(|err| self.unreadable(err))? {
            let path = entry.map_err(|err| self.unreadable(err))?.path();
            if self.is_kit_file(&path) {
                files.push(path);
            }
        }
        files.sort();

        Ok(files
            .iter()
            .filter_map(|path| path.file_stem())
            .map(|stem| stem.to_string_lossy().into_owned())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data_dir_with_kits(kits: &[&str]) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        let kits_dir = dir.path().join("Kits");
        fs::create_dir(&kits_dir).unwrap();
        for name in kits {
            fs::write(kits_dir.join(name), "<kit/>").unwrap();
        }
        dir
    }

    fn open(dir: &tempfile::TempDir) -> DirectoryEngine {
        DirectoryEngine::new(dir.path().to_str().unwrap(), &EngineConfig::default()).unwrap()
    }

    #[test]
    fn test_missing_data_location_rejected() {
        let result = DirectoryEngine::new("/no/such/drumkit/data", &EngineConfig::default());
        assert!(matches!(
            result,
            Err(EngineError::DataLocationNotFound { .. })
        ));
    }

    #[test]
    fn test_kits_listed_by_file_name() {
        let dir = data_dir_with_kits(&["Rock.xml", "Jazz.xml", "notes.txt", "Metal.XML"]);
        let engine = open(&dir);

        assert_eq!(engine.kits_names().unwrap(), vec!["Jazz", "Metal", "Rock"]);
    }

    #[test]
    fn test_missing_kits_directory_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let engine = open(&dir);

        assert!(engine.kits_names().unwrap().is_empty());
    }

    #[test]
    fn test_kits_rescanned_on_each_call() {
        let dir = data_dir_with_kits(&["Rock.xml"]);
        let engine = open(&dir);
        assert_eq!(engine.kits_names().unwrap(), vec!["Rock"]);

        fs::write(dir.path().join("Kits").join("Blues.xml"), "<kit/>").unwrap();
        assert_eq!(engine.kits_names().unwrap(), vec!["Blues", "Rock"]);
    }

    #[test]
    fn test_custom_layout() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("Sets")).unwrap();
        fs::write(dir.path().join("Sets").join("Funk.kit"), "").unwrap();
        fs::write(dir.path().join("Sets").join("Funk.xml"), "").unwrap();

        let config = EngineConfig {
            kits_directory: "Sets".to_string(),
            kit_extension: "kit".to_string(),
        };
        let engine = DirectoryEngine::new(dir.path().to_str().unwrap(), &config).unwrap();
        assert_eq!(engine.kits_names().unwrap(), vec!["Funk"]);
    }

    #[test]
    fn test_transport_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let mut engine = open(&dir);
        assert!(!engine.is_started());

        engine.start().unwrap();
        engine.start().unwrap();
        assert!(engine.is_started());

        engine.stop().unwrap();
        engine.stop().unwrap();
        assert!(!engine.is_started());
    }

    #[test]
    fn test_metronome_state() {
        let dir = tempfile::tempdir().unwrap();
        let mut engine = open(&dir);

        engine.enable_metronome(true).unwrap();
        engine.change_click_volume(80).unwrap();
        assert!(engine.is_metronome_enabled());
        assert_eq!(engine.click_volume(), 80);
        assert_eq!(engine.data_location(), dir.path().to_str().unwrap());
    }
}
