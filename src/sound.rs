//! Sound cues for the pizza illustration.
//!
//! A [`SoundController`] owns one preloaded handle per [`Cue`] and a single
//! enabled flag. Playback goes through an [`AudioBackend`], so the controller
//! logic is the same whether the clips are real audio or just files checked
//! on disk (see [`AssetProbe`]).
//!
//! Sound is best effort. The first failed load or play moves the controller
//! to [`SoundState::Failed`], logs a warning, and silences it for good.
//! Errors never reach the caller.

use crate::schedule::{Epoch, Scheduler};
use serde::Serialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AudioError {
    #[error("failed to load {cue} cue from {source_path}: {reason}")]
    Load {
        cue: Cue,
        source_path: String,
        reason: String,
    },
    #[error("failed to play {cue} cue: {reason}")]
    Playback { cue: Cue, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Cue {
    Drop,
    Bounce,
    Ready,
    Click,
}

impl Cue {
    pub const ALL: [Cue; 4] = [Cue::Drop, Cue::Bounce, Cue::Ready, Cue::Click];

    pub fn name(self) -> &'static str {
        match self {
            Cue::Drop => "drop",
            Cue::Bounce => "bounce",
            Cue::Ready => "ready",
            Cue::Click => "click",
        }
    }

    /// Site-relative path of the clip.
    pub fn source(self) -> &'static str {
        match self {
            Cue::Drop => "sounds/ingredient-drop.mp3",
            Cue::Bounce => "sounds/ingredient-bounce.mp3",
            Cue::Ready => "sounds/pizza-ready.mp3",
            Cue::Click => "sounds/button-click.mp3",
        }
    }
}

impl std::fmt::Display for Cue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Playback volume per cue. The ready chime is louder than the effects.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CueVolumes {
    pub effects: f32,
    pub ready: f32,
}

impl Default for CueVolumes {
    fn default() -> Self {
        Self {
            effects: 0.5,
            ready: 0.7,
        }
    }
}

impl CueVolumes {
    pub fn for_cue(&self, cue: Cue) -> f32 {
        match cue {
            Cue::Ready => self.ready,
            _ => self.effects,
        }
    }
}

/// Something that can load and play short clips.
pub trait AudioBackend {
    type Handle;

    /// Preload `cue` from `source` at the given volume.
    fn load(&mut self, cue: Cue, source: &str, volume: f32) -> Result<Self::Handle, AudioError>;

    /// Rewind the clip to its start and play it.
    fn play(&mut self, cue: Cue, handle: &mut Self::Handle) -> Result<(), AudioError>;

    /// Stop the clip and clear its source.
    fn release(&mut self, handle: Self::Handle);
}

/// Backend that resolves every cue against a directory of staged assets.
///
/// Loading fails when the clip is missing or empty; playing only logs. Used
/// by the CLI to find out whether the page would end up with working sound.
#[derive(Debug)]
pub struct AssetProbe {
    root: PathBuf,
}

impl AssetProbe {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl AudioBackend for AssetProbe {
    type Handle = PathBuf;

    fn load(&mut self, cue: Cue, source: &str, _volume: f32) -> Result<PathBuf, AudioError> {
        let path = self.root.join(source);
        let failed = |reason: String| AudioError::Load {
            cue,
            source_path: path.display().to_string(),
            reason,
        };
        let meta = std::fs::metadata(&path).map_err(|e| failed(e.to_string()))?;
        if meta.len() == 0 {
            return Err(failed("file is empty".to_string()));
        }
        Ok(path)
    }

    fn play(&mut self, cue: Cue, handle: &mut PathBuf) -> Result<(), AudioError> {
        log::debug!("play {cue} ({})", handle.display());
        Ok(())
    }

    fn release(&mut self, _handle: PathBuf) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SoundState {
    Enabled,
    Disabled,
    /// A load or playback error happened. Terminal.
    Failed,
}

pub struct SoundController<B: AudioBackend> {
    backend: B,
    state: SoundState,
    volumes: CueVolumes,
    handles: HashMap<Cue, B::Handle>,
    timers: Scheduler<Cue>,
}

impl<B: AudioBackend> SoundController<B> {
    /// Create a controller. Cues are preloaded right away when it starts
    /// enabled, otherwise on first enable.
    pub fn new(backend: B, enabled: bool, volumes: CueVolumes) -> Self {
        let mut controller = Self {
            backend,
            state: SoundState::Disabled,
            volumes,
            handles: HashMap::new(),
            timers: Scheduler::new(),
        };
        if enabled {
            controller.set_enabled(true);
        }
        controller
    }

    pub fn state(&self) -> SoundState {
        self.state
    }

    pub fn is_enabled(&self) -> bool {
        self.state == SoundState::Enabled
    }

    pub fn is_loaded(&self, cue: Cue) -> bool {
        self.handles.contains_key(&cue)
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Number of delayed plays still waiting.
    pub fn pending(&self) -> usize {
        self.timers.len()
    }

    /// Turn sound on or off and return whether it is now on. A failed
    /// controller stays off.
    pub fn set_enabled(&mut self, enabled: bool) -> bool {
        match (self.state, enabled) {
            (SoundState::Failed, _) => {}
            (_, false) => {
                self.state = SoundState::Disabled;
                self.timers = Scheduler::new();
            }
            (_, true) => {
                self.state = SoundState::Enabled;
                self.preload();
            }
        }
        self.is_enabled()
    }

    pub fn toggle(&mut self) -> bool {
        self.set_enabled(!self.is_enabled())
    }

    fn preload(&mut self) {
        for cue in Cue::ALL {
            if self.handles.contains_key(&cue) {
                continue;
            }
            match self
                .backend
                .load(cue, cue.source(), self.volumes.for_cue(cue))
            {
                Ok(handle) => {
                    self.handles.insert(cue, handle);
                }
                Err(e) => {
                    self.fail(e);
                    return;
                }
            }
        }
    }

    fn fail(&mut self, error: AudioError) {
        log::warn!("sound disabled: {error}");
        self.state = SoundState::Failed;
        self.timers = Scheduler::new();
    }

    /// Play `cue` now, or `delay` after `now` under `epoch`.
    ///
    /// Does nothing while sound is off or when the cue never loaded.
    pub fn play(&mut self, cue: Cue, delay: Duration, now: Duration, epoch: Epoch) {
        if !self.is_enabled() || !self.is_loaded(cue) {
            return;
        }
        if delay.is_zero() {
            self.play_now(cue);
        } else {
            self.timers.schedule(now + delay, epoch, cue);
        }
    }

    /// Fire every delayed play that is due.
    pub fn tick(&mut self, now: Duration) {
        for (_, cue) in self.timers.drain_due(now) {
            if !self.is_enabled() {
                break;
            }
            self.play_now(cue);
        }
    }

    /// Drop delayed plays scheduled under a discarded epoch.
    pub fn cancel_epoch(&mut self, epoch: Epoch) -> usize {
        let dropped = self.timers.cancel_epoch(epoch);
        if dropped > 0 {
            log::debug!("cancelled {dropped} pending cue(s) from epoch {epoch}");
        }
        dropped
    }

    fn play_now(&mut self, cue: Cue) {
        let Some(handle) = self.handles.get_mut(&cue) else {
            return;
        };
        if let Err(e) = self.backend.play(cue, handle) {
            self.fail(e);
        }
    }
}

impl<B: AudioBackend> Drop for SoundController<B> {
    fn drop(&mut self) {
        for (_, handle) in self.handles.drain() {
            self.backend.release(handle);
        }
    }
}
