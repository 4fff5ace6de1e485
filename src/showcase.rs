//! The pizza illustration: ingredient sequencer, its sound cues, and the
//! restart/mute controls.
//!
//! The showcase never owns an epoch counter. The page shell bumps the epoch
//! and hands the new value to [`Showcase::restart`], which cancels every
//! delayed cue of the old epoch before the timelines start again.

use crate::config::SiteConfig;
use crate::content::SHOWCASE_CAPTIONS;
use crate::schedule::Epoch;
use crate::sequencer::{
    INGREDIENTS, IngredientDescriptor, Phase, PhaseTiming, Pose, Sequencer, SequencerEvent,
};
use crate::sound::{AudioBackend, Cue, CueVolumes, SoundController};
use serde::Serialize;
use std::time::Duration;

/// Text that fades in over the illustration once the drop is under way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caption {
    pub text: &'static str,
    pub role: CaptionRole,
    pub delay_ms: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CaptionRole {
    Badge,
    Title,
    Subtitle,
}

impl Caption {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(u64::from(self.delay_ms))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShowcaseSettings {
    pub timing: PhaseTiming,
    /// Lag between a fall starting and its drop cue.
    pub drop_delay: Duration,
    /// When the restart and mute controls fade in.
    pub controls_delay: Duration,
    /// Whether the page offers sound at all. Hides the mute control when
    /// false.
    pub sound_available: bool,
    pub volumes: CueVolumes,
}

impl Default for ShowcaseSettings {
    fn default() -> Self {
        Self {
            timing: PhaseTiming::default(),
            drop_delay: Duration::from_millis(100),
            controls_delay: Duration::from_millis(5_500),
            sound_available: false,
            volumes: CueVolumes::default(),
        }
    }
}

impl ShowcaseSettings {
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            timing: PhaseTiming {
                bounce: Duration::from_millis(config.showcase.bounce_ms),
                settle: Duration::from_millis(config.showcase.settle_ms),
                overshoot: config.showcase.bounce_overshoot,
            },
            drop_delay: Duration::from_millis(config.sound.drop_delay_ms),
            controls_delay: Duration::from_millis(config.showcase.controls_delay_ms),
            sound_available: config.sound.enabled,
            volumes: CueVolumes {
                effects: config.sound.volume,
                ready: config.sound.ready_volume,
            },
        }
    }
}

/// Snapshot of the illustration at one instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShowcaseView {
    pub epoch: Epoch,
    pub elapsed_ms: u128,
    pub poses: Vec<Pose>,
    pub phases: Vec<Phase>,
    pub captions_visible: Vec<bool>,
    pub controls_visible: bool,
    pub mute_visible: bool,
    pub sound_on: bool,
    pub ready: bool,
}

pub struct Showcase<B: AudioBackend> {
    sequencer: Sequencer,
    sound: SoundController<B>,
    settings: ShowcaseSettings,
    ready: bool,
}

impl<B: AudioBackend> Showcase<B> {
    pub fn new(backend: B, settings: ShowcaseSettings) -> Self {
        Self::with_ingredients(&INGREDIENTS, backend, settings)
    }

    pub fn with_ingredients(
        ingredients: &'static [IngredientDescriptor],
        backend: B,
        settings: ShowcaseSettings,
    ) -> Self {
        Self {
            sequencer: Sequencer::new(ingredients, settings.timing),
            sound: SoundController::new(backend, settings.sound_available, settings.volumes),
            settings,
            ready: false,
        }
    }

    pub fn epoch(&self) -> Epoch {
        self.sequencer.epoch()
    }

    pub fn sequencer(&self) -> &Sequencer {
        &self.sequencer
    }

    pub fn sound(&self) -> &SoundController<B> {
        &self.sound
    }

    pub fn settings(&self) -> &ShowcaseSettings {
        &self.settings
    }

    /// Start over under `epoch` at `now`.
    pub fn restart(&mut self, epoch: Epoch, now: Duration) {
        let stale = self.sequencer.epoch();
        self.sound.cancel_epoch(stale);
        self.sound.play(Cue::Click, Duration::ZERO, now, epoch);
        self.sequencer.restart(epoch, now);
        self.ready = false;
    }

    /// Flip sound on or off; returns the new state.
    pub fn toggle_sound(&mut self) -> bool {
        self.sound.toggle()
    }

    /// Move the illustration to `now`, firing due cues.
    pub fn advance(&mut self, now: Duration) -> Vec<SequencerEvent> {
        self.sound.tick(now);

        let epoch = self.sequencer.epoch();
        let epoch_start = now.saturating_sub(self.sequencer.elapsed(now));
        let events = self.sequencer.advance(now);
        for event in &events {
            let Some(cue) = event.cue() else { continue };
            let lag = if cue == Cue::Drop {
                self.settings.drop_delay
            } else {
                Duration::ZERO
            };
            let due = epoch_start + event.at() + lag;
            self.sound.play(cue, due.saturating_sub(now), now, epoch);
            if cue == Cue::Ready {
                self.ready = true;
                log::info!("pizza ready at {:?} (epoch {epoch})", event.at());
            }
        }
        events
    }

    /// Every cue of one epoch at the offset it actually plays, drop lag
    /// included, in playing order.
    pub fn cue_plan(&self) -> Vec<(Duration, Cue)> {
        let mut plan: Vec<(Duration, Cue)> = self
            .sequencer
            .cue_schedule()
            .into_iter()
            .map(|(at, cue)| match cue {
                Cue::Drop => (at + self.settings.drop_delay, cue),
                _ => (at, cue),
            })
            .collect();
        plan.sort_by_key(|(at, _)| *at);
        plan
    }

    pub fn controls_visible(&self, now: Duration) -> bool {
        self.sequencer.elapsed(now) >= self.settings.controls_delay
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn view(&self, now: Duration) -> ShowcaseView {
        let elapsed = self.sequencer.elapsed(now);
        let phases = (0..self.sequencer.descriptors().len())
            .filter_map(|i| self.sequencer.phase(i, now))
            .collect();
        ShowcaseView {
            epoch: self.epoch(),
            elapsed_ms: elapsed.as_millis(),
            poses: self.sequencer.poses(now),
            phases,
            captions_visible: SHOWCASE_CAPTIONS
                .iter()
                .map(|c| elapsed >= c.delay())
                .collect(),
            controls_visible: self.controls_visible(now),
            mute_visible: self.settings.sound_available,
            sound_on: self.sound.is_enabled(),
            ready: self.ready,
        }
    }
}
