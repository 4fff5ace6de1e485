//! Shared test utilities for the bella-italia test suite.
//!
//! Provides a recording audio backend and site-source fixtures.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let backend = RecordingBackend::failing_play(Cue::Drop);
//! let log = backend.log();
//! let mut sound = SoundController::new(backend, true, CueVolumes::default());
//! sound.play(Cue::Drop, Duration::ZERO, Duration::ZERO, Epoch::INITIAL);
//! assert!(log.borrow().played.is_empty());
//!
//! let tmp = setup_site();
//! assert!(missing_assets(&tmp.path().join("assets")).is_empty());
//! ```

use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;
use tempfile::TempDir;

use crate::assets::expected_paths;
use crate::sound::{AudioBackend, AudioError, Cue};

// =========================================================================
// Audio
// =========================================================================

/// What a [`RecordingBackend`] has been asked to do.
#[derive(Debug, Default)]
pub struct AudioLog {
    pub loaded: Vec<(Cue, f32)>,
    pub played: Vec<Cue>,
    pub released: Vec<Cue>,
}

/// Audio backend that records calls instead of making noise.
///
/// The log is shared so it can still be inspected after the controller that
/// owns the backend has been dropped.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    log: Rc<RefCell<AudioLog>>,
    fail_load: Option<Cue>,
    fail_play: Option<Cue>,
}

impl RecordingBackend {
    pub fn failing_load(cue: Cue) -> Self {
        Self {
            fail_load: Some(cue),
            ..Self::default()
        }
    }

    pub fn failing_play(cue: Cue) -> Self {
        Self {
            fail_play: Some(cue),
            ..Self::default()
        }
    }

    pub fn log(&self) -> Rc<RefCell<AudioLog>> {
        Rc::clone(&self.log)
    }
}

impl AudioBackend for RecordingBackend {
    type Handle = Cue;

    fn load(&mut self, cue: Cue, source: &str, volume: f32) -> Result<Cue, AudioError> {
        if self.fail_load == Some(cue) {
            return Err(AudioError::Load {
                cue,
                source_path: source.to_string(),
                reason: "simulated load failure".to_string(),
            });
        }
        self.log.borrow_mut().loaded.push((cue, volume));
        Ok(cue)
    }

    fn play(&mut self, cue: Cue, _handle: &mut Cue) -> Result<(), AudioError> {
        if self.fail_play == Some(cue) {
            return Err(AudioError::Playback {
                cue,
                reason: "simulated playback failure".to_string(),
            });
        }
        self.log.borrow_mut().played.push(cue);
        Ok(())
    }

    fn release(&mut self, handle: Cue) {
        self.log.borrow_mut().released.push(handle);
    }
}

// =========================================================================
// Site fixtures
// =========================================================================

/// A site source directory with every required asset present and no
/// config file.
pub fn setup_site() -> TempDir {
    let tmp = TempDir::new().unwrap();
    write_assets(&tmp.path().join("assets"));
    tmp
}

/// Write a small placeholder for every expected asset under `assets_dir`.
pub fn write_assets(assets_dir: &Path) {
    for rel in expected_paths() {
        let path = assets_dir.join(&rel);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, format!("placeholder for {rel}")).unwrap();
    }
}

/// Write `config.toml` into a site source directory.
pub fn write_config(site: &Path, toml: &str) {
    std::fs::write(site.join("config.toml"), toml).unwrap();
}
